use std::fmt;

use crate::{constants::Weight, graph::Vertex};

/// Vertices from source to destination (both inclusive) and the summed
/// weight of the edges in between.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct ShortestPath {
    pub vertices: Vec<Vertex>,
    pub cost: Weight,
}

impl ShortestPath {
    pub fn new(vertices: Vec<Vertex>, cost: Weight) -> Self {
        ShortestPath { vertices, cost }
    }

    pub fn source(&self) -> Option<&Vertex> {
        self.vertices.first()
    }

    pub fn destination(&self) -> Option<&Vertex> {
        self.vertices.last()
    }
}

impl fmt::Display for ShortestPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, vertex) in self.vertices.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{vertex}")?;
        }
        write!(f, "\n{}", self.cost)
    }
}
