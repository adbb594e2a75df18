//! Action trait definition and common execution types.

use crate::segment::SegmentEditor;
use async_trait::async_trait;
use hull_core::{CommandDecl, DependencyGraph, EngineError};
use serde_json::{Map, Value};
use std::path::Path;

/// Context provided to actions during execution.
///
/// The graph is the caller's in-memory snapshot; actions that change it
/// report the fact through [`ActionOutcome::graph_mutated`] so the caller
/// can persist the new value.
pub struct ActionContext<'a> {
    /// Directory holding the flat file namespace.
    pub project_root: &'a Path,
    /// The module on whose behalf the command runs.
    pub module: &'a str,
    /// The dependency graph snapshot for this call.
    pub graph: &'a mut DependencyGraph,
    /// Segment partitioning shared by paginated reads and range edits.
    pub editor: SegmentEditor,
}

/// Result of one executed action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    /// One entry per result message, in discovery order.
    pub entries: Vec<String>,
    /// Whether the dependency graph changed and must be re-persisted.
    pub graph_mutated: bool,
}

impl ActionOutcome {
    pub fn new(entries: Vec<String>, graph_mutated: bool) -> Self {
        Self {
            entries,
            graph_mutated,
        }
    }

    /// A single non-mutating result message.
    pub fn message(text: impl Into<String>) -> Self {
        Self::new(vec![text.into()], false)
    }
}

/// Trait implemented by every uniform command.
///
/// The `answer` pseudo-command is deliberately not an `Action`: it yields
/// a boolean for external control flow and is handled by the dispatcher.
#[async_trait]
pub trait Action: Send + Sync {
    /// Machine-readable command name (e.g. "read").
    fn name(&self) -> &str;

    /// Description advertised to the agent.
    fn description(&self) -> &str;

    /// The full command declaration, schema included.
    fn declaration(&self) -> CommandDecl;

    /// Execute the command with the given arguments.
    async fn execute(
        &self,
        arguments: &Map<String, Value>,
        ctx: &mut ActionContext<'_>,
    ) -> Result<ActionOutcome, EngineError>;
}

// Compile-time check: Action must be object-safe
const _: () = {
    fn _assert_object_safe(_: &dyn Action) {}
};
