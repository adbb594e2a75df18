//! Built-in command implementations.

pub mod answer;
pub mod edit;
pub mod list;
pub mod modules;
pub mod no_op;
pub mod read;
pub mod write;

use crate::catalog::ActionCatalog;
use crate::pattern::{compile_pattern, enumerate_files};
use hull_core::{resolve_selector, AccessMode, DependencyGraph, EngineError, Selector};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Shared parameter wording, kept identical across command declarations.
pub(crate) const MODULE_DESCRIPTION_R: &str = "Module name argument. Can be the name of any module that you have read-access to. Can also be one of the following special keywords: `.dependencies` denotes all dependencies of the current module; `.children` denotes all children of the current module; `.` denotes the current module; `*` denotes all modules that you have read-access to.";

pub(crate) const MODULE_DESCRIPTION_W: &str = "Module name argument. Can be the name of any module that you have write-access to. Use `.` to denote the current module.";

pub(crate) const PATH_DESCRIPTION_R: &str = "Name of the file. This argument supports the `*` wildcard, so patterns like `*.txt` may be used.";

pub(crate) const PATH_DESCRIPTION_W: &str = "Name of the file. Wildcards not supported.";

/// Register all built-in commands into a catalog.
pub fn register_all(catalog: &mut ActionCatalog) {
    catalog.register(Arc::new(no_op::NoOpAction));
    catalog.register(Arc::new(list::ListAction));
    catalog.register(Arc::new(read::ReadAction));
    catalog.register(Arc::new(read::ReadPaginatedAction));
    catalog.register(Arc::new(write::WriteAction));
    catalog.register(Arc::new(write::AppendAction));
    catalog.register(Arc::new(edit::EditAction));
    catalog.register(Arc::new(modules::QueryModulesAction));
    catalog.register(Arc::new(modules::CreateModuleAction));
}

/// Deserialize an argument object into a typed parameter struct.
pub(crate) fn parse_params<T: DeserializeOwned>(
    arguments: &Map<String, Value>,
) -> Result<T, EngineError> {
    serde_json::from_value(Value::Object(arguments.clone()))
        .map_err(|e| EngineError::Validation(format!("Invalid parameters: {e}")))
}

/// Outcome of read-mode (module selector, path pattern) resolution.
pub(crate) enum ReadSetup {
    /// Matched (module, path) pairs in discovery order.
    Matches(Vec<(String, String)>),
    /// Nothing matched; the message is a normal result, not an error.
    Empty(String),
}

/// Resolve a read-mode selector and path pattern into concrete files.
pub(crate) fn resolve_read_paths(
    graph: &DependencyGraph,
    module: &str,
    module_arg: &str,
    path_arg: &str,
) -> Result<ReadSetup, EngineError> {
    let module_arg = module_arg.trim();
    let path_arg = path_arg.trim();

    let selector = Selector::parse(module_arg);
    let targets = resolve_selector(graph, module, &selector, AccessMode::Read)?;
    if targets.is_empty() {
        return Ok(ReadSetup::Empty(format!(
            "No modules matched the pattern `{module_arg}`."
        )));
    }

    let pattern = compile_pattern(path_arg)?;
    let matches = enumerate_files(graph, &targets, &pattern);
    if matches.is_empty() {
        return Ok(ReadSetup::Empty(format!(
            "No files matched the pattern `{module_arg}/{path_arg}`."
        )));
    }
    Ok(ReadSetup::Matches(matches))
}

#[cfg(test)]
pub(crate) mod test_support {
    use hull_core::DependencyGraph;
    use serde_json::{Map, Value};

    /// A small fixture: `main` owns `util`; `parser` depends on `util`.
    pub(crate) fn sample_graph() -> DependencyGraph {
        let mut graph = DependencyGraph::with_root("main");
        graph.add_module("util", Vec::new(), "main");
        graph.add_module("parser", vec!["util".to_string()], "main");
        graph
    }

    pub(crate) fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().expect("test args must be an object")
    }
}
