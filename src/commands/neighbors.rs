//! Neighbors command
use crate::cli::{Cli, OutputFormat};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{all_neighbors, Graph, NeighborsResult};

use super::{records_edge, records_header};

/// Execute the neighbors command
pub fn execute(cli: &Cli, graph: &Graph, name: &str) -> Result<()> {
    let result = NeighborsResult {
        name: name.to_string(),
        neighbors: all_neighbors(graph, name)?
            .into_iter()
            .map(|node| node.name().to_string())
            .collect(),
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            for neighbor in &result.neighbors {
                println!("{}", neighbor);
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "neighbors",
                    &[
                        ("name", result.name.clone()),
                        ("count", result.neighbors.len().to_string()),
                    ],
                )
            );
            for neighbor in &result.neighbors {
                println!("{}", records_edge(&result.name, neighbor));
            }
        }
    }

    Ok(())
}
