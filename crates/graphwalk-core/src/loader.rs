//! Edge-list loading
//!
//! An edge list is line-oriented text where each line names the two endpoints
//! of one undirected edge, separated by whitespace. Nodes are declared
//! implicitly by their first appearance.

use std::fs;
use std::io::Read;
use std::path::Path;
use std::time::Instant;

use crate::config::InputConfig;
use crate::error::{GraphError, Result};
use crate::graph::Graph;
use crate::trace_time;

/// One input line split into whitespace-separated fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeRecord {
    /// 1-based source line number
    pub line: usize,
    pub fields: Vec<String>,
}

impl AsRef<[String]> for EdgeRecord {
    fn as_ref(&self) -> &[String] {
        &self.fields
    }
}

/// Split edge-list text into records, skipping lines per `opts`
pub fn parse_edge_list(text: &str, opts: &InputConfig) -> Vec<EdgeRecord> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !(opts.skip_blank_lines && line.trim().is_empty()))
        .filter(|(_, line)| {
            opts.comment_prefix
                .as_deref()
                .is_none_or(|prefix| !line.trim_start().starts_with(prefix))
        })
        .map(|(index, line)| EdgeRecord {
            line: index + 1,
            fields: line.split_whitespace().map(str::to_string).collect(),
        })
        .collect()
}

/// Build a graph from records, reporting malformed records by source line
pub fn build_graph(records: &[EdgeRecord]) -> Result<Graph> {
    Graph::build::<_, _, String>(records).map_err(|err| match err {
        GraphError::MalformedInput { record, fields } => GraphError::MalformedInput {
            record: records.get(record - 1).map_or(record, |r| r.line),
            fields,
        },
        other => other,
    })
}

/// Read and split an edge list from any reader
pub fn read_edge_list<R: Read>(mut reader: R, opts: &InputConfig) -> Result<Vec<EdgeRecord>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_edge_list(&text, opts))
}

/// Read and split an edge-list file
pub fn load_edge_list(path: &Path, opts: &InputConfig) -> Result<Vec<EdgeRecord>> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => GraphError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => GraphError::Io(e),
    })?;
    Ok(parse_edge_list(&text, opts))
}

/// Load an edge-list file into a graph
#[tracing::instrument(skip(opts), fields(path = %path.display()))]
pub fn load_graph(path: &Path, opts: &InputConfig) -> Result<Graph> {
    let start = Instant::now();
    let records = load_edge_list(path, opts)?;
    let graph = build_graph(&records)?;
    trace_time!(start, "load_graph", nodes = graph.len());
    Ok(graph)
}
