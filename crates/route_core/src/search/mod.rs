use crate::constants::{Weight, INFINITY};
use crate::graph::{Graph, NodeIndex, Vertex};

use self::dijkstra::Dijkstra;
use self::shortest_path::ShortestPath;

pub mod dijkstra;
pub mod shortest_path;

/// Per vertex working state of a single query.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NodeData {
    pub(crate) distance: Weight,
    pub(crate) visited: bool,
    pub(crate) predecessor: Option<NodeIndex>,
}

impl Default for NodeData {
    fn default() -> Self {
        NodeData {
            distance: INFINITY,
            visited: false,
            predecessor: None,
        }
    }
}

/// Shortest path from `a` to `b`, `None` if `b` can not be reached from `a`
/// or one of them is not part of `g`.
pub fn shortest_path(g: &Graph, a: &Vertex, b: &Vertex) -> Option<ShortestPath> {
    Dijkstra::new(g).search(a, b)
}

/// Follows the predecessor links from `target` back to `source`.
///
/// Returns `None` if `target` was never reached.
pub(crate) fn reconstruct_path(
    g: &Graph,
    target: NodeIndex,
    source: NodeIndex,
    node_data: &[NodeData],
) -> Option<ShortestPath> {
    let cost = node_data.get(target.index())?.distance;
    if cost == INFINITY {
        return None;
    }

    let mut path = vec![g.vertex(target).clone()];
    let mut current = target;
    while current != source {
        current = node_data[current.index()].predecessor?;
        path.push(g.vertex(current).clone());
    }
    path.reverse();
    Some(ShortestPath::new(path, cost))
}

#[cfg(test)]
pub(crate) fn assert_no_path(path: Option<ShortestPath>) {
    assert_eq!(None, path);
}

#[cfg(test)]
pub(crate) fn assert_path(
    expected_path: Vec<&str>,
    expected_cost: Weight,
    path: Option<ShortestPath>,
) {
    assert_eq!(
        Some(ShortestPath::new(
            expected_path.into_iter().map(Vertex::from).collect(),
            expected_cost
        )),
        path
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::test_graphs::generate_airport_graph;

    #[test]
    fn shortest_path_matches_dijkstra() {
        let g = generate_airport_graph();

        for source in g.vertices() {
            for target in g.vertices() {
                assert_eq!(
                    shortest_path(&g, source, target),
                    Dijkstra::new(&g).search(source, target)
                );
            }
        }
        assert_path(
            vec!["ATL", "IND", "DEN"],
            370,
            shortest_path(&g, &"ATL".into(), &"DEN".into()),
        );
        assert_no_path(shortest_path(&g, &"ATL".into(), &"BOS".into()));
    }
}
