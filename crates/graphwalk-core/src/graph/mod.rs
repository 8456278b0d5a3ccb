//! Graph model and traversal
//!
//! - `model`: the undirected [`Graph`] built from an edge list
//! - `frontier`: stack and queue disciplines for traversal
//! - `search`: DFS/BFS, reachability, and [`SearchTree`] results
//! - `path`: predecessor maps and path reconstruction

pub mod frontier;
pub mod model;
pub mod path;
pub mod search;
pub mod types;

pub use frontier::{Frontier, Queue, Stack};
pub use model::Graph;
pub use path::{reconstruct, Path, Predecessors};
pub use search::{
    all_neighbors, find_path, path_result, reachable, reachable_with, search, search_bfs,
    search_dfs, SearchTree,
};
pub use types::{
    ComponentResult, NeighborsResult, Node, NodeId, PathResult, ReachResult, SearchMode,
    SpanningTreeEntry,
};
