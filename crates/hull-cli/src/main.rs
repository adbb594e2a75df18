//! hull — module-scoped virtual filesystem and agent dispatch harness.
//!
//! The binary is a thin host around `hull-engine`: it owns graph-file
//! persistence and feeds turns or host actions into the engine.

mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("hull_core=debug,hull_actions=debug,hull_engine=debug")
            .init();
    }

    let config = cli.engine_config();
    match cli.command {
        Commands::Catalog { ref name } => commands::catalog::run(name.as_deref(), config)?,
        Commands::Init { ref root, ref graph } => commands::init::run(root, graph)?,
        Commands::Run {
            ref project,
            ref graph,
            ref module,
            ref actions,
        } => commands::run::run(project, graph, module, actions, config).await?,
        Commands::Dispatch {
            ref project,
            ref graph,
            ref module,
            ref kind,
            ref expecting,
            ref defaults,
            ref turn,
        } => {
            commands::dispatch::run(
                project,
                graph,
                module,
                kind,
                expecting.clone(),
                defaults.as_deref(),
                turn,
                config,
            )
            .await?
        }
    }

    Ok(())
}
