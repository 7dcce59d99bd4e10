//! Crate to compute cheapest routes in directed graphs with non-negative
//! integer edge weights.
//!
//! # Basic usage
//! ```
//! use route_core::prelude::*;
//! use route_core::{edge, vertices};
//!
//! // Create a new graph
//! let g = Graph::new(
//!     vertices!["SEA", "DEN", "MKC"],
//!     vec![edge!("SEA" => "DEN", 200), edge!("DEN" => "MKC", 191)],
//! )
//! .expect("Invalid graph");
//!
//! // Search
//! let mut dijkstra = Dijkstra::new(&g);
//! let shortest_path = dijkstra
//!     .search(&"SEA".into(), &"MKC".into())
//!     .expect("Failed to find path");
//! assert_eq!(shortest_path.cost, 391);
//!
//! // One-off queries without keeping the search around
//! let sp = search::shortest_path(&g, &"SEA".into(), &"DEN".into());
//! assert_eq!(sp.map(|sp| sp.cost), Some(200));
//!
//! // Vertices without a connection yield no path
//! assert!(search::shortest_path(&g, &"MKC".into(), &"SEA".into()).is_none());
//!```
//! [`Graph`]: crate::graph::Graph
pub mod constants;
pub mod error;
pub mod graph;
pub mod prelude;
pub mod search;
pub mod statistics;
pub mod util;
