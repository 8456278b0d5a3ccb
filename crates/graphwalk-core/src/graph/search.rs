//! Depth-first and breadth-first traversal
//!
//! Both searches run one algorithm parameterized by [`Frontier`]. Each call
//! allocates its own frontier and predecessor map and drops them when it
//! returns; nothing is carried between calls.

use std::collections::{HashMap, HashSet};
use std::time::Instant;

use crate::error::Result;
use crate::graph::frontier::{Frontier, Queue, Stack};
use crate::graph::model::Graph;
use crate::graph::path::{reconstruct, Path, Predecessors};
use crate::graph::types::{ComponentResult, Node, NodeId, PathResult, SearchMode, SpanningTreeEntry};
use crate::trace_time;

/// Predecessor map over the whole connected component of a start node
#[derive(Debug, Clone)]
pub struct SearchTree<'g> {
    graph: &'g Graph,
    mode: SearchMode,
    predecessors: Predecessors,
    order: Vec<NodeId>,
}

impl<'g> SearchTree<'g> {
    pub fn mode(&self) -> SearchMode {
        self.mode
    }

    pub fn start(&self) -> &'g Node {
        self.graph.get(self.predecessors.start())
    }

    pub fn predecessors(&self) -> &Predecessors {
        &self.predecessors
    }

    /// True if `name` was reached from the start
    pub fn contains(&self, name: &str) -> bool {
        self.graph
            .id_of(name)
            .is_some_and(|id| self.predecessors.contains(id))
    }

    /// Node from which `name` was first reached; the start is its own predecessor
    pub fn predecessor_of(&self, name: &str) -> Option<&'g Node> {
        let id = self.graph.id_of(name)?;
        self.predecessors.get(id).map(|pred| self.graph.get(pred))
    }

    /// Reached nodes in discovery order, start first
    pub fn reached(&self) -> Vec<&'g Node> {
        self.order.iter().map(|&id| self.graph.get(id)).collect()
    }

    /// Path from the start to `target`.
    ///
    /// Fails with `NodeNotFound` if `target` is not in the graph; returns an
    /// empty path if it is in another component.
    pub fn path_to(&self, target: &str) -> Result<Path<'g>> {
        let target = self.graph.node(target)?;
        Ok(reconstruct(self.graph, &self.predecessors, target.id()))
    }

    /// Spanning tree edges in discovery order, with hop counts from the start
    pub fn spanning_tree(&self) -> Vec<SpanningTreeEntry> {
        let mut hops: HashMap<NodeId, usize> = HashMap::new();
        hops.insert(self.predecessors.start(), 0);

        let mut entries = Vec::with_capacity(self.order.len().saturating_sub(1));
        for &id in self.order.iter().skip(1) {
            let Some(from) = self.predecessors.get(id) else {
                continue;
            };
            // Discovery order guarantees the predecessor's hop is known.
            let hop = hops.get(&from).copied().unwrap_or_default() + 1;
            hops.insert(id, hop);
            entries.push(SpanningTreeEntry {
                from: self.graph.get(from).name().to_string(),
                to: self.graph.get(id).name().to_string(),
                hop,
            });
        }
        entries
    }

    pub fn to_component(&self) -> ComponentResult {
        ComponentResult {
            root: self.start().name().to_string(),
            mode: self.mode,
            nodes: self
                .reached()
                .into_iter()
                .map(|node| node.name().to_string())
                .collect(),
            spanning_tree: self.spanning_tree(),
        }
    }
}

/// Expand from `start` until the frontier is empty, recording predecessors
fn explore<F: Frontier>(graph: &Graph, start: NodeId) -> (Predecessors, Vec<NodeId>) {
    let mut frontier = F::seed(start);
    let mut predecessors = Predecessors::rooted(start);
    let mut order = vec![start];

    while let Some(current) = frontier.take() {
        for &neighbor in graph.get(current).neighbor_ids() {
            if predecessors.record(neighbor, current) {
                order.push(neighbor);
                frontier.insert(neighbor);
            }
        }
    }

    (predecessors, order)
}

/// Stop as soon as `finish` leaves the frontier
fn can_reach<F: Frontier>(graph: &Graph, start: NodeId, finish: NodeId) -> bool {
    let mut frontier = F::seed(start);
    let mut visited = HashSet::from([start]);

    while let Some(current) = frontier.take() {
        if current == finish {
            return true;
        }
        for &neighbor in graph.get(current).neighbor_ids() {
            if visited.insert(neighbor) {
                frontier.insert(neighbor);
            }
        }
    }

    false
}

/// Whether any path connects `start` and `finish`, using a depth-first frontier.
///
/// Fails with `NodeNotFound` before traversing if either name is absent.
pub fn reachable(graph: &Graph, start: &str, finish: &str) -> Result<bool> {
    reachable_with(graph, SearchMode::Dfs, start, finish)
}

/// Reachability test with an explicit frontier discipline
#[tracing::instrument(skip(graph, mode), fields(mode = %mode))]
pub fn reachable_with(
    graph: &Graph,
    mode: SearchMode,
    start: &str,
    finish: &str,
) -> Result<bool> {
    let begin = Instant::now();
    let start = graph.node(start)?.id();
    let finish = graph.node(finish)?.id();

    let found = match mode {
        SearchMode::Dfs => can_reach::<Stack>(graph, start, finish),
        SearchMode::Bfs => can_reach::<Queue>(graph, start, finish),
    };

    trace_time!(begin, "reachable", found = found);
    Ok(found)
}

/// Full traversal from `start` with the given frontier discipline
#[tracing::instrument(skip(graph, mode), fields(mode = %mode))]
pub fn search<'g>(graph: &'g Graph, start: &str, mode: SearchMode) -> Result<SearchTree<'g>> {
    let begin = Instant::now();
    let start = graph.node(start)?.id();

    let (predecessors, order) = match mode {
        SearchMode::Dfs => explore::<Stack>(graph, start),
        SearchMode::Bfs => explore::<Queue>(graph, start),
    };

    trace_time!(begin, "search", reached = order.len());
    Ok(SearchTree {
        graph,
        mode,
        predecessors,
        order,
    })
}

/// Depth-first traversal of the component containing `start`
pub fn search_dfs<'g>(graph: &'g Graph, start: &str) -> Result<SearchTree<'g>> {
    search(graph, start, SearchMode::Dfs)
}

/// Breadth-first traversal of the component containing `start`.
///
/// Paths reconstructed from the result are shortest by edge count.
pub fn search_bfs<'g>(graph: &'g Graph, start: &str) -> Result<SearchTree<'g>> {
    search(graph, start, SearchMode::Bfs)
}

/// Path from `start` to `finish`; empty when they are not connected
pub fn find_path<'g>(
    graph: &'g Graph,
    start: &str,
    finish: &str,
    mode: SearchMode,
) -> Result<Path<'g>> {
    graph.node(start)?;
    graph.node(finish)?;
    search(graph, start, mode)?.path_to(finish)
}

/// [`find_path`] packaged for output
pub fn path_result(
    graph: &Graph,
    start: &str,
    finish: &str,
    mode: SearchMode,
) -> Result<PathResult> {
    let path = find_path(graph, start, finish, mode)?;
    Ok(PathResult {
        from: start.to_string(),
        to: finish.to_string(),
        mode,
        found: !path.is_empty(),
        path_length: path.edge_count(),
        nodes: path.names().into_iter().map(str::to_string).collect(),
    })
}

/// Immediate adjacency of `name`, in edge-insertion order
pub fn all_neighbors<'g>(graph: &'g Graph, name: &str) -> Result<Vec<&'g Node>> {
    let node = graph.node(name)?;
    Ok(graph.neighbors(node).collect())
}
