//! Read commands — full-file and paginated variants.

use crate::builtin::{
    parse_params, resolve_read_paths, ReadSetup, MODULE_DESCRIPTION_R, PATH_DESCRIPTION_R,
};
use crate::store;
use crate::traits::{Action, ActionContext, ActionOutcome};
use async_trait::async_trait;
use hull_core::{CommandDecl, EngineError, Schema};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct ReadParams {
    module: String,
    path: String,
}

fn read_parameters() -> Schema {
    Schema::object(
        vec![
            ("module", Schema::string().describe(MODULE_DESCRIPTION_R)),
            ("path", Schema::string().describe(PATH_DESCRIPTION_R)),
        ],
        &["module", "path"],
    )
}

pub struct ReadAction;

#[async_trait]
impl Action for ReadAction {
    fn name(&self) -> &str {
        "read"
    }
    fn description(&self) -> &str {
        "Read file(s)"
    }
    fn declaration(&self) -> CommandDecl {
        CommandDecl::new(self.name(), self.description(), read_parameters())
    }

    async fn execute(
        &self,
        arguments: &Map<String, Value>,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, EngineError> {
        let params: ReadParams = parse_params(arguments)?;
        let paths = match resolve_read_paths(ctx.graph, ctx.module, &params.module, &params.path)? {
            ReadSetup::Empty(message) => return Ok(ActionOutcome::message(message)),
            ReadSetup::Matches(paths) => paths,
        };

        let mut entries = Vec::with_capacity(paths.len());
        for (module, path) in &paths {
            let content = store::read(ctx.project_root, module, path).await?;
            entries.push(format!("Contents of file `{module}/{path}`:\n{content}"));
        }
        Ok(ActionOutcome::new(entries, false))
    }
}

pub struct ReadPaginatedAction;

#[async_trait]
impl Action for ReadPaginatedAction {
    fn name(&self) -> &str {
        "read_paginated"
    }
    fn description(&self) -> &str {
        "Read file(s), segmented into individually numbered pages"
    }
    fn declaration(&self) -> CommandDecl {
        CommandDecl::new(self.name(), self.description(), read_parameters())
    }

    async fn execute(
        &self,
        arguments: &Map<String, Value>,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, EngineError> {
        let params: ReadParams = parse_params(arguments)?;
        let paths = match resolve_read_paths(ctx.graph, ctx.module, &params.module, &params.path)? {
            ReadSetup::Empty(message) => return Ok(ActionOutcome::message(message)),
            ReadSetup::Matches(paths) => paths,
        };

        let mut entries = Vec::new();
        for (module, path) in &paths {
            let content = store::read(ctx.project_root, module, path).await?;
            for (index, segment) in ctx.editor.segments(&content).iter().enumerate() {
                entries.push(format!("Page {index} of file `{module}/{path}`:\n{segment}"));
            }
        }
        Ok(ActionOutcome::new(entries, false))
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

    async fn seed(dir: &TempDir, module: &str, path: &str, content: &str) {
        store::write(dir.path(), module, path, content).await.unwrap();
    }

    #[tokio::test]
    async fn test_read_single_file() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        graph.register_file("main", "notes.txt");
        seed(&dir, "main", "notes.txt", "hello\nworld\n").await;
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "main",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let outcome = ReadAction
            .execute(&args(json!({"module": ".", "path": "notes.txt"})), &mut ctx)
            .await
            .unwrap();
        assert_eq!(outcome.entries.len(), 1);
        assert!(outcome.entries[0].starts_with("Contents of file `main/notes.txt`:"));
        assert!(outcome.entries[0].contains("hello\nworld\n"));
    }

    #[tokio::test]
    async fn test_read_wildcard_spans_readable_modules() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        graph.register_file("parser", "p.txt");
        graph.register_file("util", "u.txt");
        seed(&dir, "parser", "p.txt", "p\n").await;
        seed(&dir, "util", "u.txt", "u\n").await;
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "parser",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let outcome = ReadAction
            .execute(&args(json!({"module": "*", "path": "*.txt"})), &mut ctx)
            .await
            .unwrap();
        // parser's own file first, then its dependency's
        assert_eq!(outcome.entries.len(), 2);
        assert!(outcome.entries[0].contains("`parser/p.txt`"));
        assert!(outcome.entries[1].contains("`util/u.txt`"));
    }

    #[tokio::test]
    async fn test_read_zero_matches_is_a_message() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "main",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let outcome = ReadAction
            .execute(&args(json!({"module": ".", "path": "*.toml"})), &mut ctx)
            .await
            .unwrap();
        assert_eq!(
            outcome.entries,
            vec!["No files matched the pattern `./*.toml`.".to_string()]
        );
    }

    #[tokio::test]
    async fn test_read_paginated_emits_one_entry_per_page() {
        let dir = TempDir::new().unwrap();
        let mut graph = sample_graph();
        graph.register_file("main", "lines.txt");
        seed(&dir, "main", "lines.txt", "a\nb\nc\n").await;
        let mut ctx = ActionContext {
            project_root: dir.path(),
            module: "main",
            graph: &mut graph,
            editor: SegmentEditor::new(Granularity::Line),
        };

        let outcome = ReadPaginatedAction
            .execute(&args(json!({"module": ".", "path": "lines.txt"})), &mut ctx)
            .await
            .unwrap();
        assert_eq!(outcome.entries.len(), 3);
        assert!(outcome.entries[0].starts_with("Page 0 of file `main/lines.txt`:"));
        assert!(outcome.entries[2].starts_with("Page 2 of file `main/lines.txt`:"));
    }

    #[tokio::test]
    async fn test_read_paginated_pages_reassemble_exactly() {
        let content = "a\nb\nc\nd\ne\nf\ng";
        for size in 1..=4 {
            let dir = TempDir::new().unwrap();
            let mut graph = sample_graph();
            graph.register_file("main", "doc.txt");
            seed(&dir, "main", "doc.txt", content).await;
            let editor = SegmentEditor::new(Granularity::Page { size });
            let mut ctx = ActionContext {
                project_root: dir.path(),
                module: "main",
                graph: &mut graph,
                editor,
            };

            let outcome = ReadPaginatedAction
                .execute(&args(json!({"module": ".", "path": "doc.txt"})), &mut ctx)
                .await
                .unwrap();

            let reassembled: String = outcome
                .entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    let header = format!("Page {index} of file `main/doc.txt`:\n");
                    entry.strip_prefix(&header).unwrap().to_string()
                })
                .collect();
            assert_eq!(reassembled, content, "page size {size}");
        }
    }
}
