//! List command — enumerate files in the selected module(s).

use crate::builtin::{parse_params, MODULE_DESCRIPTION_R};
use crate::traits::{Action, ActionContext, ActionOutcome};
use async_trait::async_trait;
use hull_core::{resolve_selector, AccessMode, CommandDecl, EngineError, Schema, Selector};
use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
struct ListParams {
    module: String,
}

pub struct ListAction;

#[async_trait]
impl Action for ListAction {
    fn name(&self) -> &str {
        "list"
    }
    fn description(&self) -> &str {
        "List files in specified module(s)"
    }
    fn declaration(&self) -> CommandDecl {
        CommandDecl::new(
            self.name(),
            self.description(),
            Schema::object(
                vec![("module", Schema::string().describe(MODULE_DESCRIPTION_R))],
                &["module"],
            ),
        )
    }

    async fn execute(
        &self,
        arguments: &Map<String, Value>,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, EngineError> {
        let params: ListParams = parse_params(arguments)?;
        let module_arg = params.module.trim();

        let selector = Selector::parse(module_arg);
        let targets = resolve_selector(ctx.graph, ctx.module, &selector, AccessMode::Read)?;
        if targets.is_empty() {
            return Ok(ActionOutcome::message(format!(
                "No modules matched the pattern `{module_arg}`."
            )));
        }

        let entries = targets
            .iter()
            .map(|target| {
                let files = ctx.graph.files_of(target);
                if files.is_empty() {
                    format!("Module `{target}` is empty.")
                } else {
                    format!("Contents of module `{target}`:\n{}", files.join("\n"))
                }
            })
            .collect();
        Ok(ActionOutcome::new(entries, false))
    }
}
