//! Action catalog: the immutable registry of invokable commands.

use crate::builtin;
use crate::traits::Action;
use hull_core::CommandDecl;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of commands, keyed by name, preserving registration order.
///
/// The catalog doubles as the tool-advertisement source: `declarations`
/// covers every advertised command including the `answer` pseudo-command,
/// while lookup and the default allowlist cover only executable actions.
#[derive(Clone, Default)]
pub struct ActionCatalog {
    actions: HashMap<String, Arc<dyn Action>>,
    order: Vec<String>,
}

impl ActionCatalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a catalog with every built-in command registered.
    pub fn with_builtins() -> Self {
        let mut catalog = Self::new();
        builtin::register_all(&mut catalog);
        catalog
    }

    /// Register an action. Replaces any existing action with the same name.
    pub fn register(&mut self, action: Arc<dyn Action>) {
        let name = action.name().to_string();
        if !self.order.contains(&name) {
            self.order.push(name.clone());
        }
        self.actions.insert(name, action);
    }

    /// Get an action by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Action>> {
        self.actions.get(name).cloned()
    }

    /// Whether an executable action with this name exists.
    pub fn has(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    /// Executable action names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Command names an agent may call when the host supplies no
    /// allowlist: every action, never `answer`.
    pub fn default_allowlist(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Declaration for any advertised command, `answer` included.
    pub fn declaration(&self, name: &str) -> Option<CommandDecl> {
        if name == builtin::answer::NAME {
            return Some(builtin::answer::declaration());
        }
        self.actions.get(name).map(|action| action.declaration())
    }

    /// All advertised declarations, in registration order, `answer` last.
    pub fn declarations(&self) -> Vec<CommandDecl> {
        let mut decls: Vec<CommandDecl> = self
            .order
            .iter()
            .filter_map(|name| self.actions.get(name))
            .map(|action| action.declaration())
            .collect();
        decls.push(builtin::answer::declaration());
        decls
    }

    /// JSON advertisement of every declaration, for external tool listing.
    pub fn definitions(&self) -> Vec<Value> {
        self.declarations().iter().map(CommandDecl::to_value).collect()
    }
}
