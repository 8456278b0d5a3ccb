//! Path command
use crate::cli::{Cli, OutputFormat};
use graphwalk_core::error::Result;
use graphwalk_core::graph::{path_result, Graph, PathResult, SearchMode};

use super::{records_edge, records_header, records_node};

/// Execute the path command
pub fn execute(cli: &Cli, graph: &Graph, from: &str, to: &str, mode: SearchMode) -> Result<()> {
    let result = path_result(graph, from, to, mode)?;
    tracing::debug!(found = result.found, length = result.path_length, "path");

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Human => output_human(cli, &result),
        OutputFormat::Records => output_records(&result),
    }

    Ok(())
}

fn output_human(cli: &Cli, result: &PathResult) {
    if !result.found {
        println!("No path from {} to {}", result.from, result.to);
        return;
    }

    println!("{}", result.nodes.join(" -> "));
    if !cli.quiet {
        let unit = if result.path_length == 1 { "hop" } else { "hops" };
        println!("({} {}, {})", result.path_length, unit, result.mode);
    }
}

fn output_records(result: &PathResult) {
    println!(
        "{}",
        records_header(
            "path",
            &[
                ("from", result.from.clone()),
                ("to", result.to.clone()),
                ("search", result.mode.to_string()),
                ("found", result.found.to_string()),
                ("length", result.path_length.to_string()),
            ],
        )
    );
    for name in &result.nodes {
        println!("{}", records_node(name));
    }
    for pair in result.nodes.windows(2) {
        println!("{}", records_edge(&pair[0], &pair[1]));
    }
}
