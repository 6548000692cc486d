//! Error types for column synthesis.

use modelgraph_core::CoreError;
use thiserror::Error;

/// Errors produced while synthesizing derived column values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SynthesisError {
    /// The primary and auxiliary value lists are not the same length.
    #[error("input length mismatch: {data_len} data values vs {aux_len} auxiliary values")]
    InputLengthMismatch { data_len: usize, aux_len: usize },

    /// The column name matches none of the known naming templates.
    #[error("unrecognized column pattern: '{col_name}'")]
    UnrecognizedColumnPattern { col_name: String },

    /// Reading from or writing to the table failed.
    #[error(transparent)]
    Table(#[from] CoreError),
}
