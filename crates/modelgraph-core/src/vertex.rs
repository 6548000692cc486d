//! Per-element vertex records produced by vertex construction.
//!
//! A [`Vertex`] owns copies of everything it reports: its node types and
//! both adjacency maps. Nothing is shared with the graph it was built from,
//! so a vertex never changes after it is returned.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::graph::AttributeMap;

/// Adjacency map: neighbor name to the payload of the connecting edge.
pub type Adjacency = IndexMap<String, AttributeMap>;

/// One modeled element with its roles and directed relationships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex {
    name: String,
    node_types: BTreeSet<String>,
    successors: Adjacency,
    predecessors: Adjacency,
}

impl Vertex {
    pub fn new(
        name: impl Into<String>,
        node_types: BTreeSet<String>,
        successors: Adjacency,
        predecessors: Adjacency,
    ) -> Self {
        Vertex {
            name: name.into(),
            node_types,
            successors,
            predecessors,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every column name this element appeared under.
    pub fn node_types(&self) -> &BTreeSet<String> {
        &self.node_types
    }

    /// Outgoing edges keyed by target name.
    pub fn successors(&self) -> &Adjacency {
        &self.successors
    }

    /// Incoming edges keyed by source name.
    pub fn predecessors(&self) -> &Adjacency {
        &self.predecessors
    }

    pub fn has_node_type(&self, node_type: &str) -> bool {
        self.node_types.contains(node_type)
    }

    pub fn successor_names(&self) -> impl Iterator<Item = &str> {
        self.successors.keys().map(String::as_str)
    }

    pub fn predecessor_names(&self) -> impl Iterator<Item = &str> {
        self.predecessors.keys().map(String::as_str)
    }

    /// Number of adjacency entries across both directions. A neighbor linked
    /// both ways counts twice.
    pub fn degree(&self) -> usize {
        self.successors.len() + self.predecessors.len()
    }

    /// Returns a plain record of the vertex's full state.
    ///
    /// The record serializes with the keys `name`, `node types`,
    /// `successors` and `predecessors`.
    pub fn to_record(&self) -> VertexRecord {
        VertexRecord {
            name: self.name.clone(),
            node_types: self.node_types.clone(),
            successors: self.successors.clone(),
            predecessors: self.predecessors.clone(),
        }
    }
}

/// Serializable snapshot of a [`Vertex`].
///
/// Equality ignores adjacency order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord {
    pub name: String,
    #[serde(rename = "node types")]
    pub node_types: BTreeSet<String>,
    pub successors: Adjacency,
    pub predecessors: Adjacency,
}

impl VertexRecord {
    /// Converts the record to a JSON value with the same keys its
    /// `Serialize` impl writes.
    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}

impl From<VertexRecord> for Vertex {
    fn from(record: VertexRecord) -> Self {
        Vertex::new(
            record.name,
            record.node_types,
            record.successors,
            record.predecessors,
        )
    }
}
