use std::path::PathBuf;

use clap::Parser;

use crate::graph::Vertex;

#[derive(Parser)]
#[command(version, about = "Cheapest route between two vertices of a weighted digraph", long_about = None)]
struct Cli {
    /// Path to the file with the vertex labels
    vertex_file: PathBuf,

    /// Path to the file with `source destination weight` triples
    edge_file: PathBuf,

    /// Label of the start vertex
    source: String,

    /// Label of the destination vertex
    destination: String,

    /// Print the number of vertices and edges and the search statistics
    #[arg(short, long, default_value = "false")]
    info: bool,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub vertex_file: PathBuf,
    pub edge_file: PathBuf,
    pub source: Vertex,
    pub destination: Vertex,
    pub print_info: bool,
}

impl From<Cli> for Cfg {
    fn from(cli: Cli) -> Self {
        Cfg {
            vertex_file: cli.vertex_file,
            edge_file: cli.edge_file,
            source: Vertex::new(cli.source),
            destination: Vertex::new(cli.destination),
            print_info: cli.info,
        }
    }
}

pub fn parse() -> Cfg {
    Cli::parse().into()
}

pub fn try_parse_from<I, T>(args: I) -> Result<Cfg, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args).map(Cfg::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_arguments() {
        let cfg = try_parse_from(["route", "v.txt", "e.txt", "SEA", "MKC"]).unwrap();

        assert_eq!(cfg.vertex_file, PathBuf::from("v.txt"));
        assert_eq!(cfg.edge_file, PathBuf::from("e.txt"));
        assert_eq!(cfg.source, Vertex::from("SEA"));
        assert_eq!(cfg.destination, Vertex::from("MKC"));
        assert!(!cfg.print_info);

        let cfg = try_parse_from(["route", "--info", "v.txt", "e.txt", "SEA", "MKC"]).unwrap();
        assert!(cfg.print_info);
    }

    #[test]
    fn missing_destination() {
        assert!(try_parse_from(["route", "v.txt", "e.txt", "SEA"]).is_err());
    }

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
