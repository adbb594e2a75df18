//! No-op command.

use crate::traits::{Action, ActionContext, ActionOutcome};
use async_trait::async_trait;
use hull_core::{CommandDecl, EngineError, Schema};
use serde_json::{Map, Value};

pub struct NoOpAction;

#[async_trait]
impl Action for NoOpAction {
    fn name(&self) -> &str {
        "no_op"
    }
    fn description(&self) -> &str {
        "Does nothing"
    }
    fn declaration(&self) -> CommandDecl {
        CommandDecl::new(self.name(), self.description(), Schema::object(vec![], &[]))
    }

    async fn execute(
        &self,
        _arguments: &Map<String, Value>,
        _ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, EngineError> {
        Ok(ActionOutcome::message("Successfully done nothing."))
    }
}
