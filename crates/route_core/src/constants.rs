/// Edge weight type
pub type Weight = i64;
/// Largest accepted edge weight. Any path over fewer than `u32::MAX`
/// vertices stays below [`INFINITY`].
pub const MAX_WEIGHT: Weight = i32::MAX as Weight;
/// Tentative distance of a vertex that has not been reached yet
pub const INFINITY: Weight = Weight::MAX;
/// Returned by `Graph::edge_cost` if there is no such edge
pub const NO_EDGE: Weight = -1;
