use std::collections::BinaryHeap;

use crate::constants::Weight;
use crate::graph::*;
use crate::search::shortest_path::ShortestPath;
use crate::statistics::SearchStats;
use log::{debug, info};

use super::NodeData;

#[derive(Debug)]
pub(crate) struct Candidate {
    pub(crate) node_idx: NodeIndex,
    pub(crate) weight: Weight,
}

impl Candidate {
    pub(crate) fn new(node_idx: NodeIndex, weight: Weight) -> Self {
        Self { node_idx, weight }
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    // Reversed so that the candidate with the lowest weight is at the top of the
    // heap. Equal weights are settled in vertex insertion order.
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .weight
            .cmp(&self.weight)
            .then_with(|| other.node_idx.cmp(&self.node_idx))
    }
}

pub struct Dijkstra<'a> {
    pub stats: SearchStats,
    g: &'a Graph,
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a Graph) -> Self {
        Dijkstra {
            g: graph,
            stats: SearchStats::default(),
        }
    }

    /// Searches the cheapest path from `source` to `target`.
    ///
    /// Returns `None` if either vertex is not part of the graph or `target` is
    /// not reachable from `source`.
    pub fn search(&mut self, source: &Vertex, target: &Vertex) -> Option<ShortestPath> {
        self.stats.init();

        let (Some(source_idx), Some(target_idx)) =
            (self.g.node_index(source), self.g.node_index(target))
        else {
            self.stats.finish();
            debug!("No path: {} or {} is not part of the graph", source, target);
            return None;
        };

        if source_idx == target_idx {
            self.stats.nodes_settled += 1;
            self.stats.finish();
            return Some(ShortestPath::new(vec![source.clone()], 0));
        }

        let node_data = self.run(source_idx, target_idx);
        self.stats.finish();

        let sp = super::reconstruct_path(self.g, target_idx, source_idx, &node_data);
        if sp.is_some() {
            debug!("Path found: {:?}", sp);
            info!(
                "Path found: {:?}/{} vertices settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        } else {
            info!(
                "No path found: {:?}/{} vertices settled",
                self.stats.duration.unwrap_or_default(),
                self.stats.nodes_settled
            );
        }

        sp
    }

    /// Settles vertices in order of their distance from `source` until
    /// `target` is settled or nothing is left to settle.
    fn run(&mut self, source: NodeIndex, target: NodeIndex) -> Vec<NodeData> {
        let mut node_data = vec![NodeData::default(); self.g.num_vertices()];
        node_data[source.index()].distance = 0;

        let mut queue = BinaryHeap::new();
        queue.push(Candidate::new(source, 0));

        while let Some(Candidate { weight, node_idx }) = queue.pop() {
            let current = &mut node_data[node_idx.index()];
            // Stale entry, the vertex was settled through a cheaper candidate
            if current.visited {
                continue;
            }
            current.visited = true;
            self.stats.nodes_settled += 1;

            if node_idx == target {
                break;
            }

            for (next_idx, edge) in self.g.neighbors_outgoing(node_idx) {
                let next = &mut node_data[next_idx.index()];
                if next.visited {
                    continue;
                }

                // Weights are bounded by MAX_WEIGHT, the sum stays below INFINITY
                let new_distance = weight + edge.weight;
                if new_distance < next.distance {
                    next.distance = new_distance;
                    next.predecessor = Some(node_idx);
                    queue.push(Candidate::new(next_idx, new_distance));
                }
            }
        }

        node_data
    }
}
