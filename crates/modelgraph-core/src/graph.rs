//! The directed model graph and the capability trait vertex construction
//! reads through.
//!
//! [`GraphView`] is the minimal read-only surface [`build_vertices`] needs:
//! node iteration, per-node roles, and per-node outgoing/incoming adjacency
//! with an attribute payload per edge. [`ModelGraph`] is the crate's own
//! implementation, a `StableGraph` keyed by element name.
//!
//! [`build_vertices`]: crate::builder::build_vertices

use std::collections::{BTreeMap, BTreeSet};

use indexmap::IndexMap;
use petgraph::graph::NodeIndex;
use petgraph::stable_graph::StableGraph;
use petgraph::visit::EdgeRef;
use petgraph::{Directed, Direction};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::table::{EdgeTable, EdgeTableSchema};

/// Attribute payload carried by a directed edge: attribute name to value.
pub type AttributeMap = BTreeMap<String, String>;

/// Read-only access to a directed, attributed graph keyed by element name.
///
/// Any adjacency structure can back this; nothing here assumes petgraph.
pub trait GraphView {
    /// Node names in the graph's iteration order.
    fn node_names(&self) -> Vec<&str>;

    /// Returns `true` if `name` is a node of the graph.
    fn contains_node(&self, name: &str) -> bool;

    /// Roles (originating column names) recorded on the node. Empty for an
    /// unknown node.
    fn node_roles(&self, name: &str) -> Vec<&str>;

    /// Outgoing edges of the node as `(target, payload)`.
    fn successors(&self, name: &str) -> Vec<(&str, &AttributeMap)>;

    /// Incoming edges of the node as `(source, payload)`.
    fn predecessors(&self, name: &str) -> Vec<(&str, &AttributeMap)>;
}

/// Node weight of a [`ModelGraph`]: an element name and the roles it was
/// observed under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementNode {
    pub name: String,
    pub roles: BTreeSet<String>,
}

/// A simple directed graph of named elements.
///
/// At most one edge exists per ordered `(source, target)` pair. Adding an
/// edge for an existing pair merges the new payload into the old one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModelGraph {
    graph: StableGraph<ElementNode, AttributeMap, Directed, u32>,
    /// Name to node index, in node insertion order.
    index: IndexMap<String, NodeIndex<u32>>,
}

impl ModelGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from an edge table.
    ///
    /// Every source and target value becomes a node tagged with the column it
    /// came from. Every row becomes an edge whose payload maps
    /// `schema.edge_attribute_key` to the row's edge label.
    pub fn from_table(table: &EdgeTable, schema: &EdgeTableSchema) -> Result<Self, CoreError> {
        let sources = table.column(&schema.source_column)?;
        let targets = table.column(&schema.target_column)?;
        let labels = table.column(&schema.edge_label_column)?;

        let mut graph = ModelGraph::new();
        for ((source, target), label) in sources.iter().zip(targets).zip(labels) {
            graph.add_role(source, &schema.source_column);
            graph.add_role(target, &schema.target_column);

            let mut attributes = AttributeMap::new();
            attributes.insert(schema.edge_attribute_key.clone(), label.clone());
            graph.add_edge(source, target, attributes);
        }

        tracing::debug!(
            rows = table.row_count(),
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "built model graph from edge table"
        );
        Ok(graph)
    }

    /// Adds a node if absent and returns its index.
    pub fn add_node(&mut self, name: &str) -> NodeIndex<u32> {
        if let Some(&idx) = self.index.get(name) {
            return idx;
        }
        let idx = self.graph.add_node(ElementNode {
            name: name.to_string(),
            roles: BTreeSet::new(),
        });
        self.index.insert(name.to_string(), idx);
        idx
    }

    /// Records `role` on the node, adding the node if absent.
    pub fn add_role(&mut self, name: &str, role: &str) {
        let idx = self.add_node(name);
        self.graph[idx].roles.insert(role.to_string());
    }

    /// Adds a directed edge, creating missing endpoints.
    ///
    /// If the edge already exists its payload is updated key by key, later
    /// values overwriting earlier ones.
    pub fn add_edge(&mut self, source: &str, target: &str, attributes: AttributeMap) {
        let a = self.add_node(source);
        let b = self.add_node(target);
        match self.graph.find_edge(a, b) {
            Some(edge) => self.graph[edge].extend(attributes),
            None => {
                self.graph.add_edge(a, b, attributes);
            }
        }
    }

    /// Returns the payload of the edge `source -> target`, if present.
    pub fn edge_attributes(&self, source: &str, target: &str) -> Option<&AttributeMap> {
        let a = *self.index.get(source)?;
        let b = *self.index.get(target)?;
        self.graph.find_edge(a, b).map(|edge| &self.graph[edge])
    }

    /// Returns the node weight for `name`.
    pub fn node(&self, name: &str) -> Option<&ElementNode> {
        self.index.get(name).map(|&idx| &self.graph[idx])
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Read-only access to the underlying petgraph structure.
    pub fn inner(&self) -> &StableGraph<ElementNode, AttributeMap, Directed, u32> {
        &self.graph
    }

    fn neighbors(&self, name: &str, direction: Direction) -> Vec<(&str, &AttributeMap)> {
        let Some(&idx) = self.index.get(name) else {
            return Vec::new();
        };
        let mut edges: Vec<_> = self.graph.edges_directed(idx, direction).collect();
        // petgraph yields newest edges first; report them in insertion order.
        edges.sort_by_key(|edge| edge.id());
        edges
            .into_iter()
            .map(|edge| {
                let other = match direction {
                    Direction::Outgoing => edge.target(),
                    Direction::Incoming => edge.source(),
                };
                (self.graph[other].name.as_str(), &self.graph[edge.id()])
            })
            .collect()
    }
}

impl GraphView for ModelGraph {
    fn node_names(&self) -> Vec<&str> {
        self.index.keys().map(String::as_str).collect()
    }

    fn contains_node(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    fn node_roles(&self, name: &str) -> Vec<&str> {
        self.node(name)
            .map(|node| node.roles.iter().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn successors(&self, name: &str) -> Vec<(&str, &AttributeMap)> {
        self.neighbors(name, Direction::Outgoing)
    }

    fn predecessors(&self, name: &str) -> Vec<(&str, &AttributeMap)> {
        self.neighbors(name, Direction::Incoming)
    }
}
