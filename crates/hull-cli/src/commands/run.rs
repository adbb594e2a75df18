use anyhow::Context;
use hull_core::EngineConfig;
use hull_engine::{Engine, HostAction};
use std::path::Path;

pub async fn run(
    project: &Path,
    graph_path: &Path,
    module: &str,
    actions_path: &Path,
    config: EngineConfig,
) -> anyhow::Result<()> {
    let mut graph = super::load_graph(graph_path)?;
    let actions: Vec<HostAction> = serde_json::from_value(super::load_json(actions_path)?)
        .with_context(|| format!("malformed actions file {}", actions_path.display()))?;

    let engine = Engine::new(config);
    let report = engine
        .run_host_actions(project, module, &mut graph, &actions)
        .await
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    println!("{}", report.output);
    if report.graph_mutated {
        super::save_graph(graph_path, &graph)?;
        eprintln!("Updated graph written to {}", graph_path.display());
    }

    Ok(())
}
