//! Row-by-row synthesis of derived column values.

use modelgraph_core::EdgeTable;

use crate::error::SynthesisError;
use crate::pattern::ColumnPattern;

/// Builds the values of the derived column `col_name`, one per row.
///
/// `data[i]` is row `i`'s part value and `aux_data[i]` its owner value. The
/// output keeps row order. The two lists must be the same length; a mismatch
/// fails with [`SynthesisError::InputLengthMismatch`] instead of truncating.
pub fn create_column_values<S: AsRef<str>>(
    col_name: &str,
    data: &[S],
    aux_data: &[S],
) -> Result<Vec<String>, SynthesisError> {
    let pattern = ColumnPattern::parse(col_name).ok_or_else(|| {
        tracing::warn!(col_name, "no naming template matches column");
        SynthesisError::UnrecognizedColumnPattern {
            col_name: col_name.to_string(),
        }
    })?;

    if data.len() != aux_data.len() {
        return Err(SynthesisError::InputLengthMismatch {
            data_len: data.len(),
            aux_len: aux_data.len(),
        });
    }

    let values: Vec<String> = data
        .iter()
        .zip(aux_data)
        .map(|(part, owner)| pattern.render(part.as_ref(), owner.as_ref()))
        .collect();

    tracing::debug!(col_name, ?pattern, rows = values.len(), "synthesized column values");
    Ok(values)
}

/// Synthesizes `col_name` from two existing columns and appends it to the
/// table, aligned row for row.
///
/// `data_column` supplies the part values and `aux_column` the owner values.
pub fn append_synthesized_column(
    table: &mut EdgeTable,
    col_name: &str,
    data_column: &str,
    aux_column: &str,
) -> Result<(), SynthesisError> {
    let values = create_column_values(
        col_name,
        table.column(data_column)?,
        table.column(aux_column)?,
    )?;
    table.push_column(col_name, values)?;
    Ok(())
}
