//! Component command
use crate::cli::{Cli, OutputFormat};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{search, ComponentResult, Graph, SearchMode};

use super::{records_edge, records_header, records_node};

/// Execute the component command
pub fn execute(cli: &Cli, graph: &Graph, start: &str, mode: SearchMode) -> Result<()> {
    let result = search(graph, start, mode)?.to_component();

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => output_human(cli, &result),
        OutputFormat::Records => output_records(&result),
    }

    Ok(())
}

fn output_human(cli: &Cli, result: &ComponentResult) {
    println!("{}", result.root);
    for entry in &result.spanning_tree {
        println!("{} (hop {} via {})", entry.to, entry.hop, entry.from);
    }
    if !cli.quiet {
        println!(
            "({} nodes reachable from {}, {})",
            result.nodes.len(),
            result.root,
            result.mode
        );
    }
}

fn output_records(result: &ComponentResult) {
    println!(
        "{}",
        records_header(
            "component",
            &[
                ("root", result.root.clone()),
                ("search", result.mode.to_string()),
                ("count", result.nodes.len().to_string()),
            ],
        )
    );
    for name in &result.nodes {
        println!("{}", records_node(name));
    }
    for entry in &result.spanning_tree {
        println!("{} hop={}", records_edge(&entry.from, &entry.to), entry.hop);
    }
}
