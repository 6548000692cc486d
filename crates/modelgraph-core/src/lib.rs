pub mod builder;
pub mod error;
pub mod graph;
pub mod table;
pub mod vertex;

// Re-export commonly used types
pub use builder::{build_vertices, VertexBuilder};
pub use error::CoreError;
pub use graph::{AttributeMap, ElementNode, GraphView, ModelGraph};
pub use table::{EdgeTable, EdgeTableSchema};
pub use vertex::{Adjacency, Vertex, VertexRecord};
