use thiserror::Error;

use crate::constants::Weight;

/// Reasons a graph can not be built or queried.
///
/// Every variant is an invalid argument passed by the caller. Construction
/// never returns a partially built graph.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("graph needs at least one vertex")]
    NoVertices,
    #[error("graph needs at least one edge")]
    NoEdges,
    #[error("vertex {0:?} is not part of the graph")]
    UnknownVertex(String),
    #[error("edge {from:?} -> {to:?} has negative weight {weight}")]
    NegativeWeight {
        from: String,
        to: String,
        weight: Weight,
    },
    #[error("edge {from:?} -> {to:?} has weight {weight} which exceeds {max}")]
    WeightTooLarge {
        from: String,
        to: String,
        weight: Weight,
        max: Weight,
    },
    #[error("edge {from:?} -> {to:?} has weight {weight} but was already added with weight {existing}")]
    ConflictingEdge {
        from: String,
        to: String,
        weight: Weight,
        existing: Weight,
    },
}
