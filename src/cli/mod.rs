//! CLI argument parsing for graphwalk
//!
//! Global flags: --format, --quiet, --verbose, --log-level, --log-json, --config

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use graphwalk_core::format::OutputFormat;
use graphwalk_core::graph::SearchMode;
use parse::{parse_output_format, parse_search_mode};

/// Graphwalk - reachability and path queries over undirected edge lists
#[derive(Parser, Debug)]
#[command(name = "graphwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(long, global = true, default_value = "human", value_parser = parse_output_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (e.g. "debug", "graphwalk=trace")
    #[arg(long, global = true, env = "GRAPHWALK_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub log_json: bool,

    /// Configuration file (defaults to the graphwalk config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List every node name in the graph
    Nodes {
        /// Edge-list file, one "a b" pair per line
        file: PathBuf,
    },

    /// Print each node with its adjacency list
    Show {
        /// Edge-list file, one "a b" pair per line
        file: PathBuf,
    },

    /// List the immediate neighbors of a node
    Neighbors {
        /// Edge-list file, one "a b" pair per line
        file: PathBuf,

        /// Node name
        name: String,
    },

    /// Check whether two nodes are connected
    Reach {
        /// Edge-list file, one "a b" pair per line
        file: PathBuf,

        /// Start node
        from: String,

        /// Finish node
        to: String,

        /// Frontier discipline: dfs (default) or bfs
        #[arg(long, value_parser = parse_search_mode)]
        mode: Option<SearchMode>,
    },

    /// Find a path between two nodes
    Path {
        /// Edge-list file, one "a b" pair per line
        file: PathBuf,

        /// Start node
        from: String,

        /// Finish node
        to: String,

        /// Frontier discipline: dfs or bfs (bfs yields a shortest path)
        #[arg(long, value_parser = parse_search_mode)]
        mode: Option<SearchMode>,
    },

    /// List every node connected to a start node
    Component {
        /// Edge-list file, one "a b" pair per line
        file: PathBuf,

        /// Start node
        start: String,

        /// Frontier discipline: dfs or bfs
        #[arg(long, value_parser = parse_search_mode)]
        mode: Option<SearchMode>,
    },
}
