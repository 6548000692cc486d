//! Derived label columns for edge tables.
//!
//! A derived column is named after a template, and its values are built row
//! by row from two parallel lists of base strings: the part (primary) value
//! and the owner (auxiliary) value.

pub mod error;
pub mod pattern;
pub mod synth;

pub use error::SynthesisError;
pub use pattern::ColumnPattern;
pub use synth::{append_synthesized_column, create_column_values};
