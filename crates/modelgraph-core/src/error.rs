//! Core error types for modelgraph-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! table validation and vertex construction failures.

use thiserror::Error;

/// Core errors produced by the modelgraph-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A table row references an element name that is not a node of the
    /// supplied graph.
    #[error("missing node: '{name}' appears in column '{column}' (row {row}) but not in the graph")]
    MissingNode {
        name: String,
        column: String,
        row: usize,
    },

    /// A column was requested by name but the table has no such column.
    #[error("unknown column: '{name}'")]
    UnknownColumn { name: String },

    /// A column with the same name already exists in the table.
    #[error("duplicate column: '{name}'")]
    DuplicateColumn { name: String },

    /// A column's length disagrees with the table's row count.
    #[error("column '{column}' has {actual} values, table has {expected} rows")]
    ColumnLengthMismatch {
        column: String,
        expected: usize,
        actual: usize,
    },
}
