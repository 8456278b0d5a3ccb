//! Undirected graph keyed by node name

use std::collections::{BTreeSet, HashMap};
use std::fmt;

use crate::error::{GraphError, Result};
use crate::graph::types::{Node, NodeId};

/// Undirected graph built once from an edge list and read-only afterwards.
///
/// Every neighbor reference resolves to a node owned by this graph, and every
/// edge is stored in both endpoints' adjacency lists.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    edges: usize,
}

impl Graph {
    /// Build a graph from edge records.
    ///
    /// Each record must hold exactly two names. A record of any other width
    /// aborts construction with [`GraphError::MalformedInput`], where `record`
    /// is the record's 1-based position.
    pub fn build<I, R, S>(records: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: AsRef<[S]>,
        S: AsRef<str>,
    {
        let mut graph = Graph::default();
        for (position, record) in records.into_iter().enumerate() {
            match record.as_ref() {
                [a, b] => graph.add_edge(a.as_ref(), b.as_ref()),
                fields => {
                    return Err(GraphError::MalformedInput {
                        record: position + 1,
                        fields: fields.len(),
                    })
                }
            }
        }
        tracing::debug!(nodes = graph.len(), edges = graph.edges, "graph_built");
        Ok(graph)
    }

    /// Build a graph from name pairs
    pub fn from_pairs<I, A, B>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut graph = Graph::default();
        for (a, b) in pairs {
            graph.add_edge(a.as_ref(), b.as_ref());
        }
        graph
    }

    fn intern(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, name));
        self.index.insert(name.to_string(), id);
        id
    }

    fn add_edge(&mut self, a: &str, b: &str) {
        let a = self.intern(a);
        let b = self.intern(b);
        // A self-loop lands in its node's list twice, once per endpoint.
        self.nodes[a.0].neighbors.push(b);
        self.nodes[b.0].neighbors.push(a);
        self.edges += 1;
    }

    /// True iff a node with this name was created
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All node names
    pub fn all_names(&self) -> BTreeSet<&str> {
        self.nodes.iter().map(Node::name).collect()
    }

    /// Look up a node id by name
    pub fn id_of(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    /// Look up a node by name, failing with [`GraphError::NodeNotFound`]
    pub fn node(&self, name: &str) -> Result<&Node> {
        self.id_of(name)
            .map(|id| self.get(id))
            .ok_or_else(|| GraphError::node_not_found(name))
    }

    /// Node for an id handed out by this graph
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }

    /// Adjacency of `node`, in edge-insertion order
    pub fn neighbors<'g>(&'g self, node: &'g Node) -> impl Iterator<Item = &'g Node> + 'g {
        node.neighbor_ids().iter().map(move |&id| self.get(id))
    }

    /// All nodes, in order of first appearance
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edge records accepted, duplicates and self-loops included
    pub fn edge_count(&self) -> usize {
        self.edges
    }
}

/// One line per node, sorted by name: `name: neighbor neighbor ...`
impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut nodes: Vec<&Node> = self.nodes.iter().collect();
        nodes.sort_by(|a, b| a.name().cmp(b.name()));
        for node in nodes {
            write!(f, "{}:", node.name())?;
            for neighbor in self.neighbors(node) {
                write!(f, " {}", neighbor.name())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
