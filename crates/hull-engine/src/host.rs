//! Host-initiated direct execution, outside any agent turn.

use crate::dispatcher::Engine;
use hull_actions::{builtin, ActionContext};
use hull_core::{validate_arguments, violation_messages, DependencyGraph, EngineError};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::path::Path;

/// One host-supplied command invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostAction {
    pub name: String,
    #[serde(default)]
    pub arguments: Map<String, Value>,
}

/// Outcome of a host action batch.
#[derive(Debug, Clone, Serialize)]
pub struct HostReport {
    /// Concatenated result text of every action, in order.
    pub output: String,
    /// Whether any action mutated the graph.
    pub graph_mutated: bool,
}

impl Engine {
    /// Execute an ordered list of host actions against the graph.
    ///
    /// Unlike [`Engine::dispatch`] there is no recovery boundary here: any
    /// failure is returned as a hard error, since it indicates host misuse
    /// rather than an agent mistake. Actions preceding the failing one will
    /// already have taken effect.
    pub async fn run_host_actions(
        &self,
        project_root: &Path,
        module: &str,
        graph: &mut DependencyGraph,
        actions: &[HostAction],
    ) -> Result<HostReport, EngineError> {
        let mut entries: Vec<String> = Vec::new();
        let mut graph_mutated = false;

        for host_action in actions {
            let name = host_action.name.as_str();
            if name == builtin::answer::NAME {
                return Err(EngineError::Protocol(
                    "`answer` is not a host-invokable command.".to_string(),
                ));
            }
            let action = self
                .catalog()
                .get(name)
                .ok_or_else(|| EngineError::Protocol(format!("Unknown command `{name}`.")))?;

            let report = validate_arguments(&host_action.arguments, &action.declaration())?;
            let violations = violation_messages(&report);
            if !violations.is_empty() {
                return Err(EngineError::Validation(format!(
                    "Call to `{name}` rejected: {}.",
                    violations.join("; ")
                )));
            }

            let mut ctx = ActionContext {
                project_root,
                module,
                graph: &mut *graph,
                editor: self.editor(),
            };
            let outcome = action.execute(&host_action.arguments, &mut ctx).await?;
            graph_mutated |= outcome.graph_mutated;
            entries.extend(outcome.entries);
        }

        Ok(HostReport {
            output: entries.join("\n"),
            graph_mutated,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull_core::EngineConfig;
    use serde_json::json;
    use tempfile::TempDir;

    fn sample_graph() -> DependencyGraph {
        DependencyGraph::with_root("main")
    }

    fn action(name: &str, arguments: Value) -> HostAction {
        HostAction {
            name: name.to_string(),
            arguments: arguments.as_object().cloned().unwrap(),
        }
    }

    #[tokio::test]
    async fn test_batch_concatenates_output_and_accumulates_mutation() {
        let dir = TempDir::new().unwrap();
        let engine = Engine::new(EngineConfig::default());
        let mut graph = sample_graph();

        let report = engine
            .run_host_actions(
                dir.path(),
                "main",
                &mut graph,
                &[
                    action("write", json!({"module": ".", "path": "a.txt", "content": "x"})),
                    action("no_op", json!({})),
                    action("list", json!({"module": "."})),
                ],
            )
            .await
            .unwrap();

        assert!(report.graph_mutated);
        assert!(report.output.contains("Content successfully written to `main/a.txt`."));
        assert!(report.output.contains("Successfully done nothing."));
        assert!(report.output.contains("Contents of module `main`"));
        assert!(graph.has_file("main", "a.txt"));
    }

    #[tokio::test]
    async fn test_mutation_flag_survives_later_actions() {
        let dir = TempDir::new().unwrap();
        let engine = Engine::new(EngineConfig::default());
        let mut graph = sample_graph();

        let report = engine
            .run_host_actions(
                dir.path(),
                "main",
                &mut graph,
                &[
                    action("write", json!({"module": ".", "path": "a.txt", "content": "x"})),
                    action("no_op", json!({})),
                ],
            )
            .await
            .unwrap();
        assert!(report.graph_mutated);
    }

    #[tokio::test]
    async fn test_unknown_command_is_a_hard_error() {
        let dir = TempDir::new().unwrap();
        let engine = Engine::new(EngineConfig::default());
        let mut graph = sample_graph();

        let err = engine
            .run_host_actions(dir.path(), "main", &mut graph, &[action("launch", json!({}))])
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_answer_is_not_host_invokable() {
        let dir = TempDir::new().unwrap();
        let engine = Engine::new(EngineConfig::default());
        let mut graph = sample_graph();

        let err = engine
            .run_host_actions(
                dir.path(),
                "main",
                &mut graph,
                &[action("answer", json!({"answer": "yes"}))],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Protocol(_)));
    }

    #[tokio::test]
    async fn test_validation_failures_are_hard_errors() {
        let dir = TempDir::new().unwrap();
        let engine = Engine::new(EngineConfig::default());
        let mut graph = sample_graph();

        let err = engine
            .run_host_actions(
                dir.path(),
                "main",
                &mut graph,
                &[action("read", json!({"module": "."}))],
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
        assert!(err.to_string().contains("`path`"));
    }
}
