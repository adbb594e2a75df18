//! Turn-level dispatch.
//!
//! The dispatcher is the single recovery boundary between the agent and
//! the host: every shape violation and every error raised by the layers
//! beneath it is converted into a conversational error entry plus an
//! agent-error flag. Nothing below this boundary reaches the host as an
//! error.

use hull_actions::{builtin, ActionCatalog, ActionContext, SegmentEditor};
use hull_core::{
    validate_arguments, violation_messages, DependencyGraph, EngineConfig, EngineError, Turn,
    TurnPart,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// What the host expects from the agent this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnKind {
    /// Free text only; forwarded with no side effect.
    Reply,
    /// One function call, executed against the graph and file store.
    Action,
    /// Like `Action`, but used with `answer` to yield a boolean.
    Branch,
}

impl std::str::FromStr for TurnKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reply" => Ok(TurnKind::Reply),
            "action" => Ok(TurnKind::Action),
            "branch" => Ok(TurnKind::Branch),
            other => Err(EngineError::Protocol(format!(
                "Invalid turn kind `{other}`."
            ))),
        }
    }
}

/// One dispatch call: everything the engine needs to process a raw turn.
///
/// The graph is an owned snapshot; it comes back in the outcome only when
/// an action mutated it, at which point the caller persists the new value.
#[derive(Debug)]
pub struct DispatchRequest {
    pub kind: TurnKind,
    pub project_root: PathBuf,
    /// The module on whose behalf the agent acts.
    pub module: String,
    pub graph: DependencyGraph,
    /// Command names the agent may call; empty means every catalog entry
    /// except `answer`.
    pub expecting: Vec<String>,
    /// Host-forced parameter overrides per command name. These win over
    /// whatever the agent supplied.
    pub default_params: HashMap<String, Map<String, Value>>,
    /// The raw agent output, as received.
    pub turn: Value,
}

/// Result of a dispatch. Never an error: agent mistakes are reported via
/// `agent_error` and a synthesized context entry.
#[derive(Debug, Serialize)]
pub struct DispatchOutcome {
    /// New transcript entries: the agent turn (when parseable) followed by
    /// result or error entries.
    pub context: Vec<Turn>,
    pub agent_error: bool,
    /// The graph snapshot, present only when an action mutated it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph: Option<DependencyGraph>,
    /// The boolean produced by `answer`, for branch turns.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<bool>,
}

fn fault(turn: Option<Turn>, reason: &str) -> DispatchOutcome {
    let mut context: Vec<Turn> = turn.into_iter().collect();
    context.push(Turn::user_text(format!("Error: {reason}")));
    DispatchOutcome {
        context,
        agent_error: true,
        graph: None,
        answer: None,
    }
}

struct Dispatched {
    entries: Vec<String>,
    graph_mutated: bool,
    answer: Option<bool>,
}

/// The catalog/config bundle. Holds no per-call state, so one engine can
/// serve any number of sequential dispatches.
pub struct Engine {
    catalog: ActionCatalog,
    config: EngineConfig,
}

impl Engine {
    /// An engine with every built-in command registered.
    pub fn new(config: EngineConfig) -> Self {
        Self {
            catalog: ActionCatalog::with_builtins(),
            config,
        }
    }

    /// An engine over a custom catalog.
    pub fn with_catalog(catalog: ActionCatalog, config: EngineConfig) -> Self {
        Self { catalog, config }
    }

    /// The full catalog, for external tool advertisement.
    pub fn catalog(&self) -> &ActionCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub(crate) fn editor(&self) -> SegmentEditor {
        SegmentEditor::new(self.config.granularity)
    }

    /// Process one agent turn to completion.
    pub async fn dispatch(&self, request: DispatchRequest) -> DispatchOutcome {
        let DispatchRequest {
            kind,
            project_root,
            module,
            mut graph,
            expecting,
            default_params,
            turn,
        } = request;

        let parsed: Turn = match serde_json::from_value(turn) {
            Ok(parsed) => parsed,
            Err(_) => return fault(None, "No content found in turn."),
        };

        let dispatched = self
            .try_dispatch(
                kind,
                &project_root,
                &module,
                &mut graph,
                &expecting,
                &default_params,
                &parsed,
            )
            .await;

        match dispatched {
            Ok(done) => {
                let mut context = vec![parsed];
                context.extend(done.entries.into_iter().map(Turn::user_text));
                DispatchOutcome {
                    context,
                    agent_error: false,
                    graph: done.graph_mutated.then_some(graph),
                    answer: done.answer,
                }
            }
            Err(error) => {
                tracing::debug!(%error, module, "agent turn rejected");
                fault(Some(parsed), &error.to_string())
            }
        }
    }

    async fn try_dispatch(
        &self,
        kind: TurnKind,
        project_root: &Path,
        module: &str,
        graph: &mut DependencyGraph,
        expecting: &[String],
        default_params: &HashMap<String, Map<String, Value>>,
        turn: &Turn,
    ) -> Result<Dispatched, EngineError> {
        if turn.parts.is_empty() {
            return Err(EngineError::Protocol("No content found in turn.".to_string()));
        }

        let mut call: Option<(&str, &Map<String, Value>)> = None;
        let mut text_seen = false;
        for part in &turn.parts {
            match part {
                TurnPart::FunctionCall { name, arguments } => {
                    if call.is_some() {
                        return Err(EngineError::Protocol(
                            "Only one function may be called per turn.".to_string(),
                        ));
                    }
                    call = Some((name, arguments));
                }
                TurnPart::Text { .. } => {
                    if text_seen {
                        return Err(EngineError::Protocol(
                            "Only one text part may be provided per turn.".to_string(),
                        ));
                    }
                    text_seen = true;
                }
            }
        }

        if kind == TurnKind::Reply {
            if !text_seen {
                return Err(EngineError::Protocol(
                    "No text content found in reply.".to_string(),
                ));
            }
            return Ok(Dispatched {
                entries: Vec::new(),
                graph_mutated: false,
                answer: None,
            });
        }

        let Some((name, agent_arguments)) = call else {
            return Err(EngineError::Protocol(
                "No function call found in turn.".to_string(),
            ));
        };

        let default_allowlist;
        let expecting = if expecting.is_empty() {
            default_allowlist = self.catalog.default_allowlist();
            default_allowlist.as_slice()
        } else {
            expecting
        };
        if !expecting.iter().any(|allowed| allowed == name) {
            return Err(EngineError::Protocol(format!(
                "Agent was supposed to call one of the following functions: `{}`, but instead attempted to call `{name}`.",
                expecting.join("`, `")
            )));
        }

        // Host-forced parameters win over whatever the agent supplied.
        let mut arguments = agent_arguments.clone();
        if let Some(overrides) = default_params.get(name) {
            for (key, value) in overrides {
                arguments.insert(key.clone(), value.clone());
            }
        }

        let decl = self
            .catalog
            .declaration(name)
            .ok_or_else(|| EngineError::Protocol(format!("Unknown command `{name}`.")))?;
        let report = validate_arguments(&arguments, &decl)?;
        let violations = violation_messages(&report);
        if !violations.is_empty() {
            return Err(EngineError::Validation(format!(
                "Call to `{name}` rejected: {}.",
                violations.join("; ")
            )));
        }

        if name == builtin::answer::NAME {
            let answer = builtin::answer::parse(&arguments)?;
            return Ok(Dispatched {
                entries: Vec::new(),
                graph_mutated: false,
                answer: Some(answer),
            });
        }

        let action = self
            .catalog
            .get(name)
            .ok_or_else(|| EngineError::Protocol(format!("Unknown command `{name}`.")))?;
        let mut ctx = ActionContext {
            project_root,
            module,
            graph,
            editor: self.editor(),
        };
        let outcome = action.execute(&arguments, &mut ctx).await?;
        tracing::debug!(
            command = name,
            entries = outcome.entries.len(),
            mutated = outcome.graph_mutated,
            "action executed"
        );
        Ok(Dispatched {
            entries: outcome.entries,
            graph_mutated: outcome.graph_mutated,
            answer: None,
        })
    }
}
