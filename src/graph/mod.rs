pub mod adjacency;
pub mod edge;

pub use adjacency::Graph;
pub use edge::{Edge, Matching, Node};
