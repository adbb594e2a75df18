//! CLI subcommand implementations.

pub mod catalog;
pub mod dispatch;
pub mod init;
pub mod run;

use anyhow::Context;
use hull_core::DependencyGraph;
use std::path::Path;

pub(crate) fn load_graph(path: &Path) -> anyhow::Result<DependencyGraph> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read graph file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("malformed graph file {}", path.display()))
}

pub(crate) fn save_graph(path: &Path, graph: &DependencyGraph) -> anyhow::Result<()> {
    let content = serde_json::to_string_pretty(graph)?;
    std::fs::write(path, content)
        .with_context(|| format!("cannot write graph file {}", path.display()))?;
    Ok(())
}

pub(crate) fn load_json(path: &Path) -> anyhow::Result<serde_json::Value> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("malformed JSON in {}", path.display()))
}
