use crate::error::GraphError;
use serde::{Deserialize, Serialize};

/// Dense key assigned to a node name at its first appearance in the edge list.
///
/// Ids are one-to-one with names within a single [`Graph`](super::Graph); all
/// equality and lookup during traversal goes through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named vertex and its adjacency list.
///
/// Neighbors are kept in edge-insertion order. A duplicate edge in the input
/// produces a duplicate entry.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) name: String,
    pub(crate) neighbors: Vec<NodeId>,
}

impl Node {
    pub(crate) fn new(id: NodeId, name: &str) -> Self {
        Node {
            id,
            name: name.to_string(),
            neighbors: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn neighbor_ids(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }
}

// Node identity is its name.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// Frontier discipline for a traversal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMode {
    /// Depth-first: last discovered, first expanded
    Dfs,
    /// Breadth-first: first discovered, first expanded
    #[default]
    Bfs,
}

impl SearchMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchMode::Dfs => "dfs",
            SearchMode::Bfs => "bfs",
        }
    }
}

impl std::str::FromStr for SearchMode {
    type Err = GraphError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(SearchMode::Dfs),
            "bfs" => Ok(SearchMode::Bfs),
            other => Err(GraphError::UnknownMode(other.to_string())),
        }
    }
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Path query result
#[derive(Debug, Clone, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub mode: SearchMode,
    pub found: bool,
    pub nodes: Vec<String>,
    pub path_length: usize,
}

/// Spanning tree entry: `to` was first reached from `from`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpanningTreeEntry {
    pub from: String,
    pub to: String,
    pub hop: usize,
}

/// Connected component of a start node, as discovered by one traversal
#[derive(Debug, Clone, Serialize)]
pub struct ComponentResult {
    pub root: String,
    pub mode: SearchMode,
    /// Reached nodes in discovery order, root first
    pub nodes: Vec<String>,
    pub spanning_tree: Vec<SpanningTreeEntry>,
}

/// One-hop neighbor listing
#[derive(Debug, Clone, Serialize)]
pub struct NeighborsResult {
    pub name: String,
    pub neighbors: Vec<String>,
}

/// Reachability query result
#[derive(Debug, Clone, Serialize)]
pub struct ReachResult {
    pub from: String,
    pub to: String,
    pub mode: SearchMode,
    pub reachable: bool,
}
