//! Vertex construction: one [`Vertex`] per graph node.
//!
//! Node types are the union of the roles recorded on the graph node and the
//! names of every table column in which the element name appears as a cell.
//! Adjacency comes from the graph alone. Each vertex gets its own copies of
//! both.

use std::collections::{BTreeSet, HashMap};

use crate::error::CoreError;
use crate::graph::{AttributeMap, GraphView};
use crate::table::{EdgeTable, EdgeTableSchema};
use crate::vertex::{Adjacency, Vertex};

/// Builds [`Vertex`] values from an edge table and a graph built from it.
#[derive(Debug, Clone, Default)]
pub struct VertexBuilder {
    schema: EdgeTableSchema,
}

impl VertexBuilder {
    pub fn new(schema: EdgeTableSchema) -> Self {
        VertexBuilder { schema }
    }

    pub fn schema(&self) -> &EdgeTableSchema {
        &self.schema
    }

    /// Produces one vertex per node of `graph`, in the graph's node order.
    ///
    /// Fails with [`CoreError::MissingNode`] if any endpoint cell of `table`
    /// names an element the graph does not contain, and with
    /// [`CoreError::UnknownColumn`] if a non-empty table lacks an endpoint
    /// column. Nothing is returned on failure.
    pub fn build<G: GraphView + ?Sized>(
        &self,
        table: &EdgeTable,
        graph: &G,
    ) -> Result<Vec<Vertex>, CoreError> {
        let table_roles = self.table_roles(table, graph)?;

        let vertices: Vec<Vertex> = graph
            .node_names()
            .into_iter()
            .map(|name| {
                let mut node_types: BTreeSet<String> = graph
                    .node_roles(name)
                    .into_iter()
                    .map(str::to_string)
                    .collect();
                if let Some(roles) = table_roles.get(name) {
                    node_types.extend(roles.iter().map(|role| role.to_string()));
                }

                let successors = collect_adjacency(graph.successors(name));
                let predecessors = collect_adjacency(graph.predecessors(name));

                tracing::trace!(
                    vertex = name,
                    node_types = node_types.len(),
                    successors = successors.len(),
                    predecessors = predecessors.len(),
                    "built vertex"
                );
                Vertex::new(name, node_types, successors, predecessors)
            })
            .collect();

        tracing::debug!(
            rows = table.row_count(),
            vertices = vertices.len(),
            "built vertices"
        );
        Ok(vertices)
    }

    /// Maps each element name to every column it appears in.
    ///
    /// Endpoint cells are checked against the graph first; other columns
    /// (edge labels, derived columns) only contribute roles.
    fn table_roles<'t, G: GraphView + ?Sized>(
        &self,
        table: &'t EdgeTable,
        graph: &G,
    ) -> Result<HashMap<&'t str, BTreeSet<&'t str>>, CoreError> {
        let mut roles: HashMap<&str, BTreeSet<&str>> = HashMap::new();
        if table.is_empty() {
            return Ok(roles);
        }

        for column in self.schema.endpoint_columns() {
            for (row, name) in table.column(column)?.iter().enumerate() {
                if !graph.contains_node(name) {
                    tracing::warn!(
                        name = %name,
                        column,
                        row,
                        "table names an element missing from the graph"
                    );
                    return Err(CoreError::MissingNode {
                        name: name.clone(),
                        column: column.to_string(),
                        row,
                    });
                }
            }
        }

        for column in table.column_names() {
            for name in table.column(column)? {
                roles.entry(name.as_str()).or_default().insert(column);
            }
        }
        Ok(roles)
    }
}

/// Copies adjacency into an owned map. A later edge to the same neighbor
/// replaces the earlier one.
fn collect_adjacency(edges: Vec<(&str, &AttributeMap)>) -> Adjacency {
    let mut adjacency = Adjacency::with_capacity(edges.len());
    for (neighbor, payload) in edges {
        adjacency.insert(neighbor.to_string(), payload.clone());
    }
    adjacency
}

/// Builds vertices using the default [`EdgeTableSchema`].
pub fn build_vertices<G: GraphView + ?Sized>(
    table: &EdgeTable,
    graph: &G,
) -> Result<Vec<Vertex>, CoreError> {
    VertexBuilder::default().build(table, graph)
}
