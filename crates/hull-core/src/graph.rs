//! Dependency graph data model: modules, ownership, and the file registry.
//!
//! The graph is a value owned by the caller. The engine receives a snapshot
//! per call and hands it back when an operation mutated it; persistence is
//! entirely the caller's concern.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The implicit shared module, universally readable and writable.
///
/// It never has to appear in the module roster; files written to it are
/// still registered under its name.
pub const GLOBAL_MODULE: &str = "global";

/// Modules plus their dependency/ownership/file relations.
///
/// `modules` preserves creation order. The three maps are kept total over
/// the roster by the mutators below; edges are immutable once a module has
/// been created, and modules are never deleted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DependencyGraph {
    pub modules: Vec<String>,
    pub dependencies: HashMap<String, Vec<String>>,
    pub children: HashMap<String, Vec<String>>,
    pub files: HashMap<String, Vec<String>>,
}

impl DependencyGraph {
    /// Bootstrap a graph containing a single root module with no edges.
    pub fn with_root(root: impl Into<String>) -> Self {
        let root = root.into();
        let mut graph = Self::default();
        graph.modules.push(root.clone());
        graph.dependencies.insert(root.clone(), Vec::new());
        graph.children.insert(root.clone(), Vec::new());
        graph.files.insert(root, Vec::new());
        graph
    }

    /// Whether `id` appears in the module roster.
    ///
    /// [`GLOBAL_MODULE`] is implicit and deliberately not part of the roster.
    pub fn contains(&self, id: &str) -> bool {
        self.modules.iter().any(|m| m == id)
    }

    /// Read-only dependencies of `id`.
    pub fn dependencies_of(&self, id: &str) -> &[String] {
        self.dependencies.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Owned (read/write) children of `id`.
    pub fn children_of(&self, id: &str) -> &[String] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Files registered under `id`.
    pub fn files_of(&self, id: &str) -> &[String] {
        self.files.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether `path` is registered under `module`.
    pub fn has_file(&self, module: &str, path: &str) -> bool {
        self.files_of(module).iter().any(|f| f == path)
    }

    /// Append a new module with the given dependency edges and register it
    /// as a child of `parent`. Keeps all three relation maps total.
    ///
    /// Capability checks (name uniqueness, dependency subset rule) belong to
    /// the `create_module` action; this only maintains graph shape.
    pub fn add_module(&mut self, id: impl Into<String>, dependencies: Vec<String>, parent: &str) {
        let id = id.into();
        self.modules.push(id.clone());
        self.dependencies.insert(id.clone(), dependencies);
        self.children.insert(id.clone(), Vec::new());
        self.files.insert(id.clone(), Vec::new());
        self.children.entry(parent.to_string()).or_default().push(id);
    }

    /// Register `path` under `module`, returning true if it was new.
    pub fn register_file(&mut self, module: &str, path: &str) -> bool {
        let files = self.files.entry(module.to_string()).or_default();
        if files.iter().any(|f| f == path) {
            return false;
        }
        files.push(path.to_string());
        true
    }
}
