//! Reach command
use crate::cli::{Cli, OutputFormat};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{reachable_with, Graph, ReachResult, SearchMode};

use super::records_header;

/// Execute the reach command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str, mode: SearchMode) -> Result<()> {
    let result = ReachResult {
        from: from.to_string(),
        to: to.to_string(),
        mode,
        reachable: reachable_with(graph, mode, from, to)?,
    };

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => {
            if result.reachable {
                println!("{} can reach {}", from, to);
            } else {
                println!("{} cannot reach {}", from, to);
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header(
                    "reach",
                    &[
                        ("from", result.from.clone()),
                        ("to", result.to.clone()),
                        ("search", mode.to_string()),
                        ("reachable", result.reachable.to_string()),
                    ],
                )
            );
        }
    }

    Ok(())
}
