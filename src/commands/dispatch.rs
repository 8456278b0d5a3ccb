//! Command dispatch logic for graphwalk
use std::path::Path;
use std::time::Instant;

use graphwalk_core::config::WalkConfig;
use graphwalk_core::error::Result;
use graphwalk_core::graph::{Graph, SearchMode};
use graphwalk_core::loader;

use crate::cli::{Cli, Commands};
use crate::commands;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let config = WalkConfig::resolve(cli.config.as_deref())?;

    if cli.verbose {
        tracing::debug!(elapsed = ?start.elapsed(), "resolve_config");
    }

    let load = |file: &Path| -> Result<Graph> {
        let graph = loader::load_graph(file, &config.input)?;
        tracing::debug!(
            elapsed = ?start.elapsed(),
            nodes = graph.len(),
            edges = graph.edge_count(),
            "load_graph"
        );
        Ok(graph)
    };

    match &cli.command {
        Commands::Nodes { file } => commands::nodes::execute(cli, &load(file.as_path())?),

        Commands::Show { file } => commands::show::execute(cli, &load(file.as_path())?),

        Commands::Neighbors { file, name } => {
            commands::neighbors::execute(cli, &load(file.as_path())?, name)
        }

        Commands::Reach {
            file,
            from,
            to,
            mode,
        } => commands::reach::execute(
            cli,
            &load(file.as_path())?,
            from,
            to,
            mode.unwrap_or(SearchMode::Dfs),
        ),

        Commands::Path {
            file,
            from,
            to,
            mode,
        } => commands::path::execute(
            cli,
            &load(file.as_path())?,
            from,
            to,
            mode.unwrap_or(config.search.mode),
        ),

        Commands::Component {
            file,
            start: root,
            mode,
        } => commands::component::execute(
            cli,
            &load(file.as_path())?,
            root,
            mode.unwrap_or(config.search.mode),
        ),
    }
}
