//! Write and append commands.
//!
//! Both address exactly one writable (module, path) pair; the file is
//! created on first use and registered in the graph, which is the only
//! mutation these commands can cause.

use crate::builtin::{parse_params, MODULE_DESCRIPTION_W, PATH_DESCRIPTION_W};
use crate::store;
use crate::traits::{Action, ActionContext, ActionOutcome};
use async_trait::async_trait;
use hull_core::{resolve_write_target, CommandDecl, EngineError, Schema};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct WriteParams {
    module: String,
    path: String,
    content: String,
}

#[derive(Clone, Copy)]
enum WriteMode {
    Overwrite,
    Append,
}

fn write_parameters(content_description: &str) -> Schema {
    Schema::object(
        vec![
            ("module", Schema::string().describe(MODULE_DESCRIPTION_W)),
            ("path", Schema::string().describe(PATH_DESCRIPTION_W)),
            ("content", Schema::string().describe(content_description)),
        ],
        &["module", "path", "content"],
    )
}

async fn run_write(
    mode: WriteMode,
    arguments: &Map<String, Value>,
    ctx: &mut ActionContext<'_>,
) -> Result<ActionOutcome, EngineError> {
    let params: WriteParams = parse_params(arguments)?;
    let target = resolve_write_target(ctx.graph, ctx.module, &params.module)?;
    let path = params.path.trim().to_string();

    match mode {
        WriteMode::Overwrite => {
            store::write(ctx.project_root, &target, &path, &params.content).await?
        }
        WriteMode::Append => {
            store::append(ctx.project_root, &target, &path, &params.content).await?
        }
    }

    let graph_mutated = ctx.graph.register_file(&target, &path);
    if graph_mutated {
        tracing::debug!(module = %target, path = %path, "registered new file");
    }

    let verb = match mode {
        WriteMode::Overwrite => "written",
        WriteMode::Append => "appended",
    };
    Ok(ActionOutcome::new(
        vec![format!("Content successfully {verb} to `{target}/{path}`.")],
        graph_mutated,
    ))
}

pub struct WriteAction;

#[async_trait]
impl Action for WriteAction {
    fn name(&self) -> &str {
        "write"
    }
    fn description(&self) -> &str {
        "Write file"
    }
    fn declaration(&self) -> CommandDecl {
        CommandDecl::new(
            self.name(),
            self.description(),
            write_parameters("Content to write to the file"),
        )
    }

    async fn execute(
        &self,
        arguments: &Map<String, Value>,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, EngineError> {
        run_write(WriteMode::Overwrite, arguments, ctx).await
    }
}

pub struct AppendAction;

#[async_trait]
impl Action for AppendAction {
    fn name(&self) -> &str {
        "append"
    }
    fn description(&self) -> &str {
        "Append to file"
    }
    fn declaration(&self) -> CommandDecl {
        CommandDecl::new(
            self.name(),
            self.description(),
            write_parameters("Content to append to the file"),
        )
    }

    async fn execute(
        &self,
        arguments: &Map<String, Value>,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, EngineError> {
        run_write(WriteMode::Append, arguments, ctx).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::test_support::{args, sample_graph};
    use crate::segment::SegmentEditor;
    use hull_core::{Granularity, GLOBAL_MODULE};
    use serde_json::json;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_write_to_global_from_any_module() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "parser",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let outcome = WriteAction
            .execute(
                &args(json!({"module": "global", "path": "notes.txt", "content": "hello"})),
                &mut ctx,
            )
            .await
            .unwrap();

        assert!(outcome.graph_mutated);
        let stored = std::fs::read_to_string(dir.path().join("global.notes.txt")).unwrap();
        assert_eq!(stored, "hello");
        assert!(graph.has_file(GLOBAL_MODULE, "notes.txt"));
    }

    #[tokio::test]
    async fn test_rewrite_of_known_file_does_not_mutate_graph() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        graph.register_file("main", "notes.txt");
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "main",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let outcome = WriteAction
            .execute(
                &args(json!({"module": ".", "path": "notes.txt", "content": "v2"})),
                &mut ctx,
            )
            .await
            .unwrap();
        assert!(!outcome.graph_mutated);
        assert_eq!(graph.files_of("main"), ["notes.txt".to_string()]);
    }

    #[tokio::test]
    async fn test_write_dot_targets_caller() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "util",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let outcome = WriteAction
            .execute(
                &args(json!({"module": ".", "path": "out.txt", "content": "x"})),
                &mut ctx,
            )
            .await
            .unwrap();
        assert_eq!(
            outcome.entries,
            vec!["Content successfully written to `util/out.txt`.".to_string()]
        );
        assert!(dir.path().join("util.out.txt").exists());
    }

    #[tokio::test]
    async fn test_write_to_dependency_is_denied() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "parser",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let err = WriteAction
            .execute(
                &args(json!({"module": "util", "path": "x.txt", "content": ""})),
                &mut ctx,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::Permission(_)));
        assert!(!dir.path().join("util.x.txt").exists());
    }

    #[tokio::test]
    async fn test_write_to_unknown_module_is_not_found() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "main",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let err = WriteAction
            .execute(
                &args(json!({"module": "ghost", "path": "x.txt", "content": ""})),
                &mut ctx,
            )
            .await
            .unwrap_err();
        assert!(matches!(err, EngineError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_append_creates_then_extends() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "main",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let first = AppendAction
            .execute(
                &args(json!({"module": ".", "path": "log.txt", "content": "one\n"})),
                &mut ctx,
            )
            .await
            .unwrap();
        assert!(first.graph_mutated);

        let second = AppendAction
            .execute(
                &args(json!({"module": ".", "path": "log.txt", "content": "two\n"})),
                &mut ctx,
            )
            .await
            .unwrap();
        assert!(!second.graph_mutated);

        let stored = std::fs::read_to_string(dir.path().join("main.log.txt")).unwrap();
        assert_eq!(stored, "one\ntwo\n");
    }
}
