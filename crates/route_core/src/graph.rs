use crate::constants::{Weight, MAX_WEIGHT, NO_EDGE};
use crate::error::GraphError;
use log::{debug, info};
use rustc_hash::FxHashMap;
use std::fmt;

/// Default integer type for vertex and edge indices
pub type DefaultIdx = u32;

/// Position of a vertex inside a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeIndex(DefaultIdx);

impl NodeIndex {
    /// Indices that do not fit into [`DefaultIdx`] become [`NodeIndex::end`]
    #[inline]
    pub fn new(x: usize) -> Self {
        NodeIndex(DefaultIdx::try_from(x).unwrap_or(DefaultIdx::MAX))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        NodeIndex(DefaultIdx::MAX)
    }
}

/// Position of an edge inside a [`Graph`].
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd, Eq, Ord, Hash)]
pub struct EdgeIndex(DefaultIdx);

impl EdgeIndex {
    /// Indices that do not fit into [`DefaultIdx`] become [`EdgeIndex::end`]
    #[inline]
    pub fn new(x: usize) -> Self {
        EdgeIndex(DefaultIdx::try_from(x).unwrap_or(DefaultIdx::MAX))
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub fn end() -> Self {
        EdgeIndex(DefaultIdx::MAX)
    }
}

/// A vertex is nothing more than its label. Two vertices with the same label
/// are the same vertex.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Vertex {
    label: String,
}

impl Vertex {
    pub fn new(label: impl Into<String>) -> Self {
        Vertex {
            label: label.into(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }
}

impl From<&str> for Vertex {
    fn from(label: &str) -> Self {
        Vertex::new(label)
    }
}

impl From<String> for Vertex {
    fn from(label: String) -> Self {
        Vertex { label }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: Vertex,
    pub destination: Vertex,
    pub weight: Weight,
}

impl Edge {
    pub fn new(source: Vertex, destination: Vertex, weight: Weight) -> Self {
        Edge {
            source,
            destination,
            weight,
        }
    }
}

/// Directed graph with non-negative integer edge weights.
///
/// A `Graph` can only be obtained through [`Graph::new`], which validates the
/// input. Once built it is never modified.
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<Vertex>,
    node_index: FxHashMap<Vertex, NodeIndex>,
    edges: Vec<Edge>,
    // (source, destination) of every entry in `edges`
    endpoints: Vec<(NodeIndex, NodeIndex)>,
    edges_out: Vec<Vec<EdgeIndex>>,
}

impl Graph {
    /// Builds a graph from the given vertices and edges.
    ///
    /// Vertices with the same label are merged and edges that are exact
    /// duplicates of an earlier edge are dropped.
    ///
    /// Fails if
    /// * `vertices` or `edges` is empty
    /// * an edge references a vertex that is not in `vertices`
    /// * an edge has a negative weight or a weight above [`MAX_WEIGHT`]
    /// * two edges connect the same (source, destination) pair with different weights
    pub fn new(
        vertices: impl IntoIterator<Item = Vertex>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError> {
        let vertices = vertices.into_iter();
        let edges = edges.into_iter();

        let mut g = Graph::with_capacity(vertices.size_hint().0, edges.size_hint().0);

        for vertex in vertices {
            g.add_vertex(vertex);
        }
        if g.vertices.is_empty() {
            return Err(GraphError::NoVertices);
        }

        let mut num_input_edges = 0;
        for edge in edges {
            num_input_edges += 1;
            g.add_edge(edge)?;
        }
        if num_input_edges == 0 {
            return Err(GraphError::NoEdges);
        }

        debug!(
            "Dropped {} duplicate edges",
            num_input_edges - g.edges.len()
        );
        info!(
            "Graph has {} vertices and {} edges",
            g.vertices.len(),
            g.edges.len()
        );

        Ok(g)
    }

    fn with_capacity(num_vertices: usize, num_edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(num_vertices),
            node_index: FxHashMap::with_capacity_and_hasher(num_vertices, Default::default()),
            edges: Vec::with_capacity(num_edges),
            endpoints: Vec::with_capacity(num_edges),
            edges_out: Vec::with_capacity(num_vertices),
        }
    }

    /// Adds a vertex unless a vertex with the same label exists already.
    ///
    /// Returns the index of the (new or existing) vertex.
    fn add_vertex(&mut self, vertex: Vertex) -> NodeIndex {
        if let Some(node_idx) = self.node_index.get(&vertex) {
            return *node_idx;
        }

        let node_idx = NodeIndex::new(self.vertices.len());

        assert!(
            NodeIndex::end() != node_idx,
            "Maximum number of vertices for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        // Create new entry in adjacency list for new vertex
        self.edges_out.push(Vec::new());
        self.node_index.insert(vertex.clone(), node_idx);
        self.vertices.push(vertex);

        node_idx
    }

    /// Adds `edge` to the graph.
    ///
    /// If the same edge (including its weight) is already present, nothing is
    /// added and the index of the existing edge is returned.
    fn add_edge(&mut self, edge: Edge) -> Result<EdgeIndex, GraphError> {
        let source = self.require(&edge.source)?;
        let destination = self.require(&edge.destination)?;

        if edge.weight < 0 {
            return Err(GraphError::NegativeWeight {
                from: edge.source.label,
                to: edge.destination.label,
                weight: edge.weight,
            });
        }
        if edge.weight > MAX_WEIGHT {
            return Err(GraphError::WeightTooLarge {
                from: edge.source.label,
                to: edge.destination.label,
                weight: edge.weight,
                max: MAX_WEIGHT,
            });
        }

        for edge_idx in self.edges_out[source.index()].iter() {
            let old_edge = &self.edges[edge_idx.index()];
            if old_edge.destination != edge.destination {
                continue;
            }
            if old_edge.weight != edge.weight {
                return Err(GraphError::ConflictingEdge {
                    from: edge.source.label,
                    to: edge.destination.label,
                    weight: edge.weight,
                    existing: old_edge.weight,
                });
            }
            return Ok(*edge_idx);
        }

        let edge_idx = EdgeIndex::new(self.edges.len());

        assert!(
            EdgeIndex::end() != edge_idx,
            "Maximum number of edges for index type {} exceeded",
            std::any::type_name::<DefaultIdx>()
        );

        self.edges_out[source.index()].push(edge_idx);
        self.endpoints.push((source, destination));
        self.edges.push(edge);

        Ok(edge_idx)
    }

    fn require(&self, vertex: &Vertex) -> Result<NodeIndex, GraphError> {
        self.node_index
            .get(vertex)
            .copied()
            .ok_or_else(|| GraphError::UnknownVertex(vertex.label.clone()))
    }

    /// Returns an iterator over all vertices of the graph
    pub fn vertices(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }

    /// Returns an iterator over all edges of the graph in the order they were
    /// first added
    pub fn edges(&self) -> impl Iterator<Item = &Edge> {
        self.edges.iter()
    }

    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn contains(&self, vertex: &Vertex) -> bool {
        self.node_index.contains_key(vertex)
    }

    pub fn node_index(&self, vertex: &Vertex) -> Option<NodeIndex> {
        self.node_index.get(vertex).copied()
    }

    /// **Panics** if `node_idx` does not belong to this graph
    pub fn vertex(&self, node_idx: NodeIndex) -> &Vertex {
        &self.vertices[node_idx.index()]
    }

    /// Returns the destinations of all edges leaving `vertex`.
    ///
    /// Fails if `vertex` is not part of the graph.
    pub fn adjacent_vertices(
        &self,
        vertex: &Vertex,
    ) -> Result<impl Iterator<Item = &Vertex> + '_, GraphError> {
        let node_idx = self.require(vertex)?;
        Ok(self
            .neighbors_outgoing(node_idx)
            .map(|(_, edge)| &edge.destination))
    }

    /// Returns the edge from `a` to `b` if there is one.
    pub fn edge(&self, a: &Vertex, b: &Vertex) -> Option<&Edge> {
        let node_idx = self.node_index(a)?;
        self.neighbors_outgoing(node_idx)
            .map(|(_, edge)| edge)
            .find(|edge| edge.destination == *b)
    }

    /// Returns the weight of the edge from `a` to `b`, or [`NO_EDGE`] if
    /// there is no such edge or `a` is not part of the graph.
    pub fn edge_cost(&self, a: &Vertex, b: &Vertex) -> Weight {
        self.edge(a, b).map_or(NO_EDGE, |edge| edge.weight)
    }

    /// Iterates over the outgoing edges of `node_idx` together with the index
    /// of their destination.
    pub fn neighbors_outgoing(
        &self,
        node_idx: NodeIndex,
    ) -> impl Iterator<Item = (NodeIndex, &Edge)> + '_ {
        self.edges_out[node_idx.index()].iter().map(move |edge_idx| {
            let (_, destination) = self.endpoints[edge_idx.index()];
            (destination, &self.edges[edge_idx.index()])
        })
    }

    pub fn print_info(&self) {
        println!(
            "Graph:\t#Vertices: {}, #Edges: {}",
            self.vertices.len(),
            self.edges.len()
        );
    }
}

/// Macro to create edges from source to destination with a weight
///
/// edge!("A" => "B", 3) returns the directed edge A -> B
///
/// edge!("A", "B", 3) returns a `Vec` with the two edges A -> B and B -> A
#[macro_export]
macro_rules! edge {
    ($source:expr => $destination:expr, $weight:expr) => {
        $crate::graph::Edge::new($source.into(), $destination.into(), $weight)
    };
    ($source:expr , $destination:expr, $weight:expr) => {
        vec![
            $crate::graph::Edge::new($source.into(), $destination.into(), $weight),
            $crate::graph::Edge::new($destination.into(), $source.into(), $weight),
        ]
    };
}

/// Macro to create a list of vertices from labels
/// vertices!["A", "B", "C"]
#[macro_export]
macro_rules! vertices {
    ($($label:expr),* $(,)?) => {
        vec![$($crate::graph::Vertex::from($label)),*]
    };
}
