use crate::{
    edge,
    graph::{Edge, Graph, Vertex},
    vertices,
};

pub fn generate_simple_graph() -> Graph {
    //           B
    //           |
    // E -> A -> C
    //      |  /
    //      D
    let vertices = vertices!["A", "B", "C", "D", "E"];

    let mut edges: Vec<Edge> = vec![
        edge!("A" => "C", 1),
        edge!("A" => "D", 1),
        edge!("E" => "A", 1),
    ];
    edges.extend(edge!("C", "B", 1));
    edges.extend(edge!("C", "D", 1));

    Graph::new(vertices, edges).expect("simple graph is valid")
}

/// Flight connections between six airports, the same data as
/// `test_data/airports_vertices.txt` and `test_data/airports_edges.txt`.
///
/// Cheapest routes: SEA -> MKC costs 391, LAX -> IND costs 581 and
/// ATL -> DEN costs 370.
pub fn generate_airport_graph() -> Graph {
    let vertices: Vec<Vertex> = vertices!["SEA", "MKC", "DEN", "ATL", "IND", "LAX"];

    let edges = vec![
        edge!("SEA" => "DEN", 200),
        edge!("DEN" => "MKC", 191),
        edge!("SEA" => "MKC", 420),
        edge!("SEA" => "LAX", 150),
        edge!("LAX" => "DEN", 240),
        edge!("MKC" => "IND", 150),
        edge!("LAX" => "ATL", 400),
        edge!("ATL" => "IND", 200),
        edge!("LAX" => "MKC", 450),
        edge!("IND" => "DEN", 170),
        edge!("ATL" => "DEN", 400),
        edge!("ATL" => "MKC", 150),
        edge!("MKC" => "DEN", 230),
        edge!("DEN" => "SEA", 200),
        edge!("IND" => "ATL", 200),
        // listed twice in the data set
        edge!("SEA" => "DEN", 200),
    ];

    Graph::new(vertices, edges).expect("airport graph is valid")
}

pub fn airport_data() -> (std::path::PathBuf, std::path::PathBuf) {
    let dir = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("test_data");
    (
        dir.join("airports_vertices.txt"),
        dir.join("airports_edges.txt"),
    )
}
