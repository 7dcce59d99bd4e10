//! Re-exports of the most commonly used items in `route_core`.
pub use crate::constants::{Weight, NO_EDGE};
pub use crate::error::GraphError;
pub use crate::graph::{Edge, Graph, Vertex};
pub use crate::search;
pub use crate::search::dijkstra::Dijkstra;
pub use crate::search::shortest_path;
pub use crate::search::shortest_path::ShortestPath;
