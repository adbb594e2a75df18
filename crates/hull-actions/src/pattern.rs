//! Wildcard path patterns over the flat namespace.
//!
//! Patterns support a single metacharacter, `*`, which matches any
//! sequence; everything else is literal. Matching is always against the
//! whole path.

use hull_core::{DependencyGraph, EngineError};
use regex::Regex;

/// Compile a path pattern into a full-match regex.
pub fn compile_pattern(pattern: &str) -> Result<Regex, EngineError> {
    let translated = pattern
        .split('*')
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(".*");
    Regex::new(&format!("^(?:{translated})$")).map_err(|e| {
        EngineError::Validation(format!("Invalid path pattern `{pattern}`: {e}"))
    })
}

/// Enumerate registered files matching `pattern` across `targets`,
/// preserving target order and, within a target, registration order.
pub fn enumerate_files(
    graph: &DependencyGraph,
    targets: &[String],
    pattern: &Regex,
) -> Vec<(String, String)> {
    let mut matches = Vec::new();
    for target in targets {
        for file in graph.files_of(target) {
            if pattern.is_match(file) {
                matches.push((target.clone(), file.clone()));
            }
        }
    }
    matches
}
