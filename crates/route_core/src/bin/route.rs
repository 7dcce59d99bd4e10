use route_core::prelude::*;
use route_core::util::cli;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cfg = cli::parse();
    let g = Graph::from_files(&cfg.vertex_file, &cfg.edge_file)?;

    if cfg.print_info {
        g.print_info();
    }

    for vertex in [&cfg.source, &cfg.destination] {
        if !g.contains(vertex) {
            log::warn!("Vertex {} is not part of the graph", vertex);
        }
    }

    let mut dijkstra = Dijkstra::new(&g);
    match dijkstra.search(&cfg.source, &cfg.destination) {
        Some(sp) => println!("{sp}"),
        None => println!("No path from {} to {}", cfg.source, cfg.destination),
    }

    if cfg.print_info {
        println!("{}", dijkstra.stats);
    }

    Ok(())
}
