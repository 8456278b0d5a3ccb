//! Graphwalk Core Library
//!
//! Undirected graph model with depth-first and breadth-first reachability and
//! path queries, plus the edge-list loader, configuration, and logging used by
//! the `graphwalk` CLI.

pub mod config;
pub mod error;
pub mod format;
pub mod graph;
pub mod loader;
pub mod logging;
