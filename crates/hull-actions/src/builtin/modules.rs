//! Module introspection and creation commands.

use crate::builtin::parse_params;
use crate::traits::{Action, ActionContext, ActionOutcome};
use async_trait::async_trait;
use hull_core::{CommandDecl, EngineError, Schema, GLOBAL_MODULE};
use serde::Deserialize;
use serde_json::{Map, Value};

fn join_or_none(items: &[String]) -> String {
    if items.is_empty() {
        "[none]".to_string()
    } else {
        items.join("`, `")
    }
}

pub struct QueryModulesAction;

#[async_trait]
impl Action for QueryModulesAction {
    fn name(&self) -> &str {
        "query_modules"
    }
    fn description(&self) -> &str {
        "List all existing modules, filtered into three subcategories: (1) children of the current module, (2) dependencies of the current module, (3) all other modules"
    }
    fn declaration(&self) -> CommandDecl {
        CommandDecl::new(self.name(), self.description(), Schema::object(vec![], &[]))
    }

    async fn execute(
        &self,
        _arguments: &Map<String, Value>,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, EngineError> {
        let dependencies = ctx.graph.dependencies_of(ctx.module);
        let children = ctx.graph.children_of(ctx.module);
        Ok(ActionOutcome::message(format!(
            "Current module: `{}`\nDependencies of current module: `{}`\nChildren of current module: `{}`\nAll modules: `{}`",
            ctx.module,
            join_or_none(dependencies),
            join_or_none(children),
            ctx.graph.modules.join("`, `"),
        )))
    }
}

#[derive(Debug, Deserialize)]
struct CreateModuleParams {
    module_name: String,
    dependencies: Vec<String>,
}

pub struct CreateModuleAction;

#[async_trait]
impl Action for CreateModuleAction {
    fn name(&self) -> &str {
        "create_module"
    }
    fn description(&self) -> &str {
        "Create a new module and explicitly declare its dependencies"
    }
    fn declaration(&self) -> CommandDecl {
        CommandDecl::new(
            self.name(),
            self.description(),
            Schema::object(
                vec![
                    (
                        "dependencies",
                        Schema::array(Schema::string()).describe(
                            "Dependencies may ONLY include (1) the current module, or (2) any dependencies of the current module; allowed to be an empty array",
                        ),
                    ),
                    (
                        "module_name",
                        Schema::string()
                            .describe("Must not clash with any existing module names"),
                    ),
                ],
                &["module_name", "dependencies"],
            ),
        )
    }

    async fn execute(
        &self,
        arguments: &Map<String, Value>,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, EngineError> {
        let params: CreateModuleParams = parse_params(arguments)?;
        let name = params.module_name.trim().to_string();

        if name.is_empty() {
            return Err(EngineError::Validation(
                "Module name missing or empty.".to_string(),
            ));
        }
        if name == GLOBAL_MODULE || ctx.graph.contains(&name) {
            return Err(EngineError::Validation(format!(
                "There is already a module named `{name}`."
            )));
        }

        let dependencies: Vec<String> =
            params.dependencies.iter().map(|d| d.trim().to_string()).collect();
        // Restricting dependencies to the caller's own capability set keeps
        // the graph acyclic: nothing reachable from the new module can
        // reach back to it.
        for dependency in &dependencies {
            let legal = dependency == ctx.module
                || ctx.graph.children_of(ctx.module).iter().any(|c| c == dependency)
                || ctx.graph.dependencies_of(ctx.module).iter().any(|d| d == dependency);
            if !legal {
                return Err(EngineError::Validation(format!(
                    "Invalid dependency module `{dependency}`."
                )));
            }
        }

        ctx.graph.add_module(name.clone(), dependencies, ctx.module);
        tracing::debug!(module = %name, parent = %ctx.module, "created module");
        Ok(ActionOutcome::new(
            vec![format!("Successfully created module `{name}`.")],
            true,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::test_support::{args, sample_graph};
    use crate::segment::SegmentEditor;
    use hull_core::Granularity;
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_query_modules_snapshot() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "parser",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let outcome = QueryModulesAction.execute(&Map::new(), &mut ctx).await.unwrap();
        let text = &outcome.entries[0];
        assert!(text.contains("Current module: `parser`"));
        assert!(text.contains("Dependencies of current module: `util`"));
        assert!(text.contains("Children of current module: `[none]`"));
        assert!(text.contains("All modules: `main`, `util`, `parser`"));
        assert!(!outcome.graph_mutated);
    }

    #[tokio::test]
    async fn test_create_module_registers_child_once() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "parser",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let outcome = CreateModuleAction
            .execute(
                &args(json!({"module_name": "lexer", "dependencies": ["util", "parser"]})),
                &mut ctx,
            )
            .await
            .unwrap();
        assert!(outcome.graph_mutated);
        assert_eq!(
            outcome.entries,
            vec!["Successfully created module `lexer`.".to_string()]
        );

        assert!(graph.contains("lexer"));
        let registered: Vec<_> =
            graph.children_of("parser").iter().filter(|c| *c == "lexer").collect();
        assert_eq!(registered.len(), 1);
        assert!(graph.children_of("lexer").is_empty());
        assert!(graph.files_of("lexer").is_empty());
        assert_eq!(
            graph.dependencies_of("lexer"),
            ["util".to_string(), "parser".to_string()]
        );
    }

    #[tokio::test]
    async fn test_create_module_rejects_out_of_capability_dependency() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        let mut ctx = ActionContext {
            project_root: dir.path(),
            // parser can see util, but not main
            module: "parser",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let err = CreateModuleAction
            .execute(
                &args(json!({"module_name": "lexer", "dependencies": ["main"]})),
                &mut ctx,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Validation(_)));
        assert!(err.to_string().contains("`main`"));
        assert!(!graph.contains("lexer"));
    }

    #[tokio::test]
    async fn test_create_module_rejects_duplicate_and_reserved_names() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "main",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        for name in ["util", "global", "   "] {
            let err = CreateModuleAction
                .execute(
                    &args(json!({"module_name": name, "dependencies": []})),
                    &mut ctx,
                )
                .await
                .unwrap_err();
            assert!(matches!(err, EngineError::Validation(_)), "name `{name}`");
        }
    }
}
