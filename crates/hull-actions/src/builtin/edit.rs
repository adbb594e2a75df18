//! Edit command — bounded range replacement inside one file.

use crate::builtin::{parse_params, MODULE_DESCRIPTION_W, PATH_DESCRIPTION_W};
use crate::store;
use crate::traits::{Action, ActionContext, ActionOutcome};
use async_trait::async_trait;
use hull_core::{resolve_write_target, CommandDecl, EngineError, Schema};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct EditParams {
    module: String,
    path: String,
    new_lines: Vec<String>,
    start_line: i64,
    end_line: i64,
}

pub struct EditAction;

#[async_trait]
impl Action for EditAction {
    fn name(&self) -> &str {
        "edit"
    }
    fn description(&self) -> &str {
        "Rewrite specified segment(s) of a file. If you select to rewrite segments in the range [start_line, end_line] (inclusive), then the content you supply will directly replace these segments without modifying any other part of the file. **It is crucial that you take great care to provide the correct indices, and provide content that correctly replaces the existing content of this range only.** Otherwise, you may unintentionally erase existing content or leave erroneous content in the file; either case could cause text to be illegible or cause code to not compile. The content you provide does not need to have the same number of lines as the content being replaced."
    }
    fn declaration(&self) -> CommandDecl {
        CommandDecl::new(
            self.name(),
            self.description(),
            Schema::object(
                vec![
                    ("module", Schema::string().describe(MODULE_DESCRIPTION_W)),
                    ("path", Schema::string().describe(PATH_DESCRIPTION_W)),
                    (
                        "new_lines",
                        Schema::array(Schema::string())
                            .describe("Content that will replace the specified segment range"),
                    ),
                    (
                        "start_line",
                        Schema::integer().describe("First segment to be replaced by your edit"),
                    ),
                    (
                        "end_line",
                        Schema::integer().describe(
                            "Last segment (inclusive) to be replaced by your edit; if set to -1, it is treated as the same value as start_line",
                        ),
                    ),
                ],
                &["module", "path", "new_lines", "start_line", "end_line"],
            ),
        )
    }

    async fn execute(
        &self,
        arguments: &Map<String, Value>,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, EngineError> {
        let params: EditParams = parse_params(arguments)?;
        let target = resolve_write_target(ctx.graph, ctx.module, &params.module)?;
        let path = params.path.trim();

        if !ctx.graph.has_file(&target, path) {
            return Err(EngineError::NotFound(format!(
                "Module `{target}` does not contain file `{path}`."
            )));
        }

        let start = params.start_line;
        let end = if params.end_line == -1 {
            start
        } else {
            params.end_line
        };
        let name = format!("{target}/{path}");
        // Malformed ranges are rejected here, before the file is touched.
        if start < 0 || start > end {
            return Err(EngineError::Range(format!(
                "Invalid segment range [{start}, {end}] for file `{name}`."
            )));
        }

        let content = store::read(ctx.project_root, &target, path).await?;
        let updated =
            ctx.editor
                .replace_range(&name, &content, start, end, &params.new_lines.join("\n"))?;
        store::write(ctx.project_root, &target, path, &updated).await?;
        tracing::debug!(file = %name, start, end, "replaced segment range");

        Ok(ActionOutcome::message(format!(
            "Successfully edited segments {start}-{end} of `{name}`."
        )))
    }
}
