//! Column-oriented edge table and the schema naming its edge columns.
//!
//! [`EdgeTable`] holds an already-parsed table: ordered, uniquely named
//! columns of string cells, all with the same row count. [`EdgeTableSchema`]
//! says which columns carry edge sources, edge targets, and edge labels.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Which table columns describe an edge, and how the edge label is stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EdgeTableSchema {
    /// Column holding the source element of each edge.
    pub source_column: String,
    /// Column holding the target element of each edge.
    pub target_column: String,
    /// Column holding the edge-type label of each edge.
    pub edge_label_column: String,
    /// Attribute key under which the edge label is stored on graph edges.
    pub edge_attribute_key: String,
}

impl Default for EdgeTableSchema {
    fn default() -> Self {
        EdgeTableSchema {
            source_column: "Component".to_string(),
            target_column: "Position".to_string(),
            edge_label_column: "edge type".to_string(),
            edge_attribute_key: "edge_attribute".to_string(),
        }
    }
}

impl EdgeTableSchema {
    /// Returns the columns whose values are element names.
    pub fn endpoint_columns(&self) -> [&str; 2] {
        [&self.source_column, &self.target_column]
    }
}

/// An in-memory table addressable by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeTable {
    columns: IndexMap<String, Vec<String>>,
    rows: usize,
}

impl EdgeTable {
    /// Creates an empty table with no columns and no rows.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, values)` pairs, in column order.
    ///
    /// Returns [`CoreError::DuplicateColumn`] on a repeated name and
    /// [`CoreError::ColumnLengthMismatch`] when columns differ in length.
    pub fn from_columns<I, N, V, S>(columns: I) -> Result<Self, CoreError>
    where
        I: IntoIterator<Item = (N, V)>,
        N: Into<String>,
        V: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut table = EdgeTable::new();
        for (name, values) in columns {
            table.push_column(name, values.into_iter().map(Into::into).collect())?;
        }
        Ok(table)
    }

    /// Appends a column to the right of the existing ones.
    ///
    /// The first column fixes the row count; every later column must match it.
    pub fn push_column(
        &mut self,
        name: impl Into<String>,
        values: Vec<String>,
    ) -> Result<(), CoreError> {
        let name = name.into();
        if self.columns.contains_key(&name) {
            return Err(CoreError::DuplicateColumn { name });
        }
        if !self.columns.is_empty() && values.len() != self.rows {
            return Err(CoreError::ColumnLengthMismatch {
                column: name,
                expected: self.rows,
                actual: values.len(),
            });
        }
        self.rows = values.len();
        self.columns.insert(name, values);
        Ok(())
    }

    /// Returns the cells of the named column, in row order.
    pub fn column(&self, name: &str) -> Result<&[String], CoreError> {
        self.columns
            .get(name)
            .map(Vec::as_slice)
            .ok_or_else(|| CoreError::UnknownColumn {
                name: name.to_string(),
            })
    }

    /// Returns `true` if the table has a column with this name.
    pub fn has_column(&self, name: &str) -> bool {
        self.columns.contains_key(name)
    }

    /// Iterates over column names in column order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns `true` if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}
