//! Frontier disciplines for traversal
//!
//! The frontier holds discovered-but-not-yet-expanded nodes. The order in
//! which it yields them is the only difference between depth-first and
//! breadth-first search:
//!
//! - [`Vec`] -> stack semantics -> DFS
//! - [`VecDeque`] -> queue semantics -> BFS

use std::collections::VecDeque;

use crate::graph::types::NodeId;

/// Working collection of discovered nodes awaiting expansion
pub trait Frontier {
    /// Create a frontier holding only `start`
    fn seed(start: NodeId) -> Self;

    /// Add a newly discovered node
    fn insert(&mut self, id: NodeId);

    /// Remove the next node to expand
    fn take(&mut self) -> Option<NodeId>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last-in-first-out frontier
pub type Stack = Vec<NodeId>;

/// First-in-first-out frontier
pub type Queue = VecDeque<NodeId>;

impl Frontier for Vec<NodeId> {
    fn seed(start: NodeId) -> Self {
        vec![start]
    }

    fn insert(&mut self, id: NodeId) {
        self.push(id);
    }

    fn take(&mut self) -> Option<NodeId> {
        self.pop()
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl Frontier for VecDeque<NodeId> {
    fn seed(start: NodeId) -> Self {
        VecDeque::from([start])
    }

    fn insert(&mut self, id: NodeId) {
        self.push_back(id);
    }

    fn take(&mut self) -> Option<NodeId> {
        self.pop_front()
    }

    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}
