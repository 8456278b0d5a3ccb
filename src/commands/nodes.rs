//! Nodes command
use crate::cli::{Cli, OutputFormat};
use graphwalk_core::error::Result;
use graphwalk_core::graph::Graph;

use super::{records_header, records_node};

/// Execute the nodes command
pub fn execute(cli: &Cli, graph: &Graph) -> Result<()> {
    let names = graph.all_names();

    match cli.format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "count": names.len(),
                "nodes": names,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Human => {
            for name in &names {
                println!("{}", name);
            }
            if !cli.quiet {
                eprintln!("{} nodes", names.len());
            }
        }
        OutputFormat::Records => {
            println!(
                "{}",
                records_header("nodes", &[("count", names.len().to_string())])
            );
            for name in &names {
                println!("{}", records_node(name));
            }
        }
    }

    Ok(())
}
