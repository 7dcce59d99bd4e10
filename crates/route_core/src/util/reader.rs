//! Reads vertices and edges from plain text files.
//!
//! Both formats are sequences of whitespace separated tokens. A vertex file
//! lists labels, an edge file lists `source destination weight` triples.
//! Line breaks carry no meaning.
use std::path::Path;

use anyhow::{anyhow, Context};
use log::{debug, info};

use crate::constants::Weight;
use crate::graph::{Edge, Graph, Vertex};

pub fn parse_vertices(input: &str) -> Vec<Vertex> {
    input.split_whitespace().map(Vertex::from).collect()
}

pub fn parse_edges(input: &str) -> anyhow::Result<Vec<Edge>> {
    let mut edges = Vec::new();
    let mut tokens = input.split_whitespace();

    while let Some(source) = tokens.next() {
        let n = edges.len() + 1;
        let destination = tokens
            .next()
            .ok_or_else(|| anyhow!("Edge #{n} from {source:?} has no destination"))?;
        let weight = tokens
            .next()
            .ok_or_else(|| anyhow!("Edge #{n} {source:?} -> {destination:?} has no weight"))?;
        let weight: Weight = weight.parse().with_context(|| {
            format!("Edge #{n} {source:?} -> {destination:?} has invalid weight {weight:?}")
        })?;

        edges.push(Edge::new(source.into(), destination.into(), weight));
    }

    Ok(edges)
}

pub fn read_vertices(path: &Path) -> anyhow::Result<Vec<Vertex>> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read vertex file {:?}", path))?;
    let vertices = parse_vertices(&input);
    debug!("Read {} vertices from {:?}", vertices.len(), path);
    Ok(vertices)
}

pub fn read_edges(path: &Path) -> anyhow::Result<Vec<Edge>> {
    let input = std::fs::read_to_string(path)
        .with_context(|| format!("Could not read edge file {:?}", path))?;
    let edges = parse_edges(&input).with_context(|| format!("Malformed edge file {:?}", path))?;
    debug!("Read {} edges from {:?}", edges.len(), path);
    Ok(edges)
}

impl Graph {
    /// Reads the vertex and the edge file and builds a graph from them.
    pub fn from_files(path_to_vertices: &Path, path_to_edges: &Path) -> anyhow::Result<Self> {
        info!(
            "Reading graph from {:?} and {:?}",
            path_to_vertices, path_to_edges
        );

        let vertices = read_vertices(path_to_vertices)?;
        let edges = read_edges(path_to_edges)?;

        let g = Graph::new(vertices, edges).context("Invalid graph")?;
        Ok(g)
    }
}
