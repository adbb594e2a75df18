//! Capability checks and selector resolution over the dependency graph.
//!
//! Access is derived from graph edges, not OS permissions: a module may
//! always touch itself and `global`, write to its children, and read from
//! its dependencies. All functions here are pure.

use crate::error::EngineError;
use crate::graph::{DependencyGraph, GLOBAL_MODULE};

/// Whether a selector is being resolved for reading or writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessMode {
    Read,
    Write,
}

/// A module selector as written by the agent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// A literal module id.
    Module(String),
    /// `.` — the calling module.
    Current,
    /// `.children` — every module owned by the caller.
    Children,
    /// `.dependencies` — every read-only dependency of the caller.
    Dependencies,
    /// `*` — everything the caller can touch in the given mode.
    Wildcard,
}

impl Selector {
    /// Parse a raw selector string. Leading/trailing whitespace is ignored;
    /// anything that is not a symbolic form is a literal module id.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "." => Selector::Current,
            ".children" => Selector::Children,
            ".dependencies" => Selector::Dependencies,
            "*" => Selector::Wildcard,
            other => Selector::Module(other.to_string()),
        }
    }
}

/// `module` may read `target`.
pub fn can_read(graph: &DependencyGraph, module: &str, target: &str) -> bool {
    module == target
        || target == GLOBAL_MODULE
        || graph.children_of(module).iter().any(|c| c == target)
        || graph.dependencies_of(module).iter().any(|d| d == target)
}

/// `module` may write `target`. Write access implies read access.
pub fn can_write(graph: &DependencyGraph, module: &str, target: &str) -> bool {
    module == target || target == GLOBAL_MODULE || graph.children_of(module).iter().any(|c| c == target)
}

/// Expand a selector into the concrete modules it denotes for `module`.
///
/// Literal ids are validated to exist and then access-checked; symbolic
/// groups are within the caller's capability by construction, except
/// `.dependencies`, which is read-only. Wildcard expansion always contains
/// the caller and `global`, even when the graph has no other edges.
pub fn resolve_selector(
    graph: &DependencyGraph,
    module: &str,
    selector: &Selector,
    mode: AccessMode,
) -> Result<Vec<String>, EngineError> {
    match selector {
        Selector::Current => Ok(vec![module.to_string()]),
        Selector::Children => Ok(graph.children_of(module).to_vec()),
        Selector::Dependencies => match mode {
            AccessMode::Read => Ok(graph.dependencies_of(module).to_vec()),
            AccessMode::Write => Err(EngineError::Permission(
                "Dependency modules are read-only.".to_string(),
            )),
        },
        Selector::Wildcard => {
            let mut targets = vec![module.to_string(), GLOBAL_MODULE.to_string()];
            targets.extend(graph.children_of(module).iter().cloned());
            if mode == AccessMode::Read {
                targets.extend(graph.dependencies_of(module).iter().cloned());
            }
            Ok(targets)
        }
        Selector::Module(target) => {
            if target != GLOBAL_MODULE && !graph.contains(target) {
                return Err(EngineError::NotFound(format!(
                    "Module `{target}` does not exist."
                )));
            }
            let allowed = match mode {
                AccessMode::Read => can_read(graph, module, target),
                AccessMode::Write => can_write(graph, module, target),
            };
            if !allowed {
                let verb = match mode {
                    AccessMode::Read => "view the contents of",
                    AccessMode::Write => "write to",
                };
                return Err(EngineError::Permission(format!(
                    "Module `{module}` does not have permission to {verb} module `{target}`."
                )));
            }
            Ok(vec![target.clone()])
        }
    }
}

/// Resolve the single module a write-capable command addresses.
///
/// `.` is substituted with the caller; symbolic group selectors are not
/// valid write addresses. The target must already exist (or be `global`)
/// and be writable by the caller.
pub fn resolve_write_target(
    graph: &DependencyGraph,
    module: &str,
    raw: &str,
) -> Result<String, EngineError> {
    let raw = raw.trim();
    let literal = if raw == "." { module } else { raw };
    match Selector::parse(literal) {
        Selector::Module(target) => {
            if target != GLOBAL_MODULE && !graph.contains(&target) {
                return Err(EngineError::NotFound(format!(
                    "Module `{target}` does not exist."
                )));
            }
            if !can_write(graph, module, &target) {
                return Err(EngineError::Permission(format!(
                    "Module `{module}` does not have permission to write to module `{target}`."
                )));
            }
            Ok(target)
        }
        Selector::Dependencies => Err(EngineError::Permission(
            "Dependency modules are read-only.".to_string(),
        )),
        _ => Err(EngineError::NotFound(format!(
            "Module `{raw}` does not exist."
        ))),
    }
}
