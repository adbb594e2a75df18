//! CLI argument and command definitions.

use clap::{Parser, Subcommand};
use hull_core::{EngineConfig, Granularity};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "hull",
    version,
    about = "Module-scoped virtual filesystem engine for LLM agents"
)]
pub struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Address files in fixed-size pages of N lines instead of single lines.
    #[arg(long, global = true)]
    pub page_size: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn engine_config(&self) -> EngineConfig {
        EngineConfig {
            granularity: match self.page_size {
                Some(size) => Granularity::Page { size },
                None => Granularity::Line,
            },
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the command catalog, or one command's declaration.
    Catalog {
        /// Command name to show in detail.
        name: Option<String>,
    },

    /// Create a dependency graph file with a single root module.
    Init {
        /// Root module id.
        #[arg(long, default_value = "main")]
        root: String,
        /// Where to write the graph file.
        #[arg(long, default_value = "graph.json")]
        graph: PathBuf,
    },

    /// Execute host actions from a JSON file against a project.
    Run {
        /// Project root directory holding the flat file namespace.
        #[arg(long)]
        project: PathBuf,
        /// Dependency graph file; rewritten when actions mutate it.
        #[arg(long)]
        graph: PathBuf,
        /// Module on whose behalf the actions run.
        #[arg(long)]
        module: String,
        /// JSON file with an array of `{name, arguments}` actions.
        actions: PathBuf,
    },

    /// Dispatch one raw agent turn from a JSON file.
    Dispatch {
        /// Project root directory holding the flat file namespace.
        #[arg(long)]
        project: PathBuf,
        /// Dependency graph file; rewritten when the turn mutates it.
        #[arg(long)]
        graph: PathBuf,
        /// Module on whose behalf the agent acts.
        #[arg(long)]
        module: String,
        /// Turn kind: reply, action, or branch.
        #[arg(long, default_value = "action")]
        kind: String,
        /// Restrict the agent to these commands (repeatable).
        #[arg(long = "expect")]
        expecting: Vec<String>,
        /// JSON file with host-forced default parameters per command.
        #[arg(long)]
        defaults: Option<PathBuf>,
        /// JSON file containing the raw turn.
        turn: PathBuf,
    },
}
