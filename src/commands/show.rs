//! Show command
use crate::cli::{Cli, OutputFormat};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{Graph, Node};

use super::{records_edge, records_header, records_node};

/// Execute the show command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let mut nodes: Vec<&Node> = graph.nodes().collect();
    nodes.sort_by(|a, b| a.name().cmp(b.name()));

    match cli.format {
        OutputFormat::Json => {
            let entries: Vec<serde_json::Value> = nodes
                .iter()
                .map(|node| {
                    let neighbors: Vec<&str> = graph.neighbors(node).map(Node::name).collect();
                    serde_json::json!({
                        "name": node.name(),
                        "neighbors": neighbors,
                    })
                })
                .collect();
            let output = serde_json::json!({
                "nodes": entries,
                "node_count": graph.len(),
                "edge_count": graph.edge_count(),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            print!("{}", graph);
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "show",
                    &[
                        ("nodes", graph.len().to_string()),
                        ("edges", graph.edge_count().to_string()),
                    ],
                )
            );
            for node in &nodes {
                println!("{}", records_node(node.name()));
            }
            for node in &nodes {
                for neighbor in graph.neighbors(node) {
                    println!("{}", records_edge(node.name(), neighbor.name()));
                }
            }
        }
    }

    Ok(())
}
