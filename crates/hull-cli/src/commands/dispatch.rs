use anyhow::Context;
use hull_core::EngineConfig;
use hull_engine::{DispatchRequest, Engine, TurnKind};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::Path;

#[allow(clippy::too_many_arguments)]
pub async fn run(
    project: &Path,
    graph_path: &Path,
    module: &str,
    kind: &str,
    expecting: Vec<String>,
    defaults_path: Option<&Path>,
    turn_path: &Path,
    config: EngineConfig,
) -> anyhow::Result<()> {
    let graph = super::load_graph(graph_path)?;
    let kind: TurnKind = kind.parse().map_err(|e| anyhow::anyhow!("{e}"))?;
    let turn = super::load_json(turn_path)?;

    let default_params: HashMap<String, Map<String, Value>> = match defaults_path {
        Some(path) => serde_json::from_value(super::load_json(path)?)
            .with_context(|| format!("malformed defaults file {}", path.display()))?,
        None => HashMap::new(),
    };

    let engine = Engine::new(config);
    let outcome = engine
        .dispatch(DispatchRequest {
            kind,
            project_root: project.to_path_buf(),
            module: module.to_string(),
            graph,
            expecting,
            default_params,
            turn,
        })
        .await;

    if let Some(graph) = &outcome.graph {
        super::save_graph(graph_path, graph)?;
        eprintln!("Updated graph written to {}", graph_path.display());
    }
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
