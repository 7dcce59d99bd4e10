pub mod cli;
pub mod reader;
pub mod test_graphs;
