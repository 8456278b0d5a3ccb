//! Predecessor tracking and path reconstruction

use std::collections::HashMap;

use crate::graph::model::Graph;
use crate::graph::types::{Node, NodeId};

/// Per-traversal record of where each node was first reached from.
///
/// The start node maps to itself. Presence of a key is the visited marker, so
/// a node is recorded at most once and every chain of predecessors ends at the
/// start.
#[derive(Debug, Clone)]
pub struct Predecessors {
    start: NodeId,
    links: HashMap<NodeId, NodeId>,
}

impl Predecessors {
    /// Map holding only the start sentinel
    pub fn rooted(start: NodeId) -> Self {
        let mut links = HashMap::new();
        links.insert(start, start);
        Predecessors { start, links }
    }

    /// Record `node` as first reached from `from`.
    ///
    /// Returns false without changing anything when `node` is already
    /// recorded or `from` has not been reached itself.
    pub fn record(&mut self, node: NodeId, from: NodeId) -> bool {
        if self.links.contains_key(&node) || !self.links.contains_key(&from) {
            return false;
        }
        self.links.insert(node, from);
        true
    }

    pub fn start(&self) -> NodeId {
        self.start
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.links.contains_key(&node)
    }

    pub fn get(&self, node: NodeId) -> Option<NodeId> {
        self.links.get(&node).copied()
    }

    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

/// Ordered node sequence from start to finish, inclusive. Empty when no path
/// exists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Path<'g> {
    nodes: Vec<&'g Node>,
}

impl<'g> Path<'g> {
    pub fn empty() -> Self {
        Path { nodes: Vec::new() }
    }

    pub fn nodes(&self) -> &[&'g Node] {
        &self.nodes
    }

    pub fn names(&self) -> Vec<&'g str> {
        self.nodes.iter().map(|node| node.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges traversed; zero for empty and single-node paths
    pub fn edge_count(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&'g Node> {
        self.nodes.first().copied()
    }

    pub fn finish(&self) -> Option<&'g Node> {
        self.nodes.last().copied()
    }
}

/// Walk `predecessors` backward from `target` to the start sentinel.
///
/// An unreached target yields an empty path. Only `node -> predecessor` links
/// are followed, so the result is independent of map iteration order.
pub fn reconstruct<'g>(graph: &'g Graph, predecessors: &Predecessors, target: NodeId) -> Path<'g> {
    if !predecessors.contains(target) {
        return Path::empty();
    }

    let mut ids = vec![target];
    let mut current = target;
    while let Some(pred) = predecessors.get(current) {
        if pred == current {
            break;
        }
        ids.push(pred);
        current = pred;
    }
    ids.reverse();

    Path {
        nodes: ids.into_iter().map(|id| graph.get(id)).collect(),
    }
}
