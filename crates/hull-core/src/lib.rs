//! hull-core: dependency graph, access control, command schemas, argument
//! validation, and turn types for the module-scoped virtual filesystem.

pub mod access;
pub mod config;
pub mod error;
pub mod graph;
pub mod schema;
pub mod turn;
pub mod validate;

pub use access::{can_read, can_write, resolve_selector, resolve_write_target, AccessMode, Selector};
pub use config::{EngineConfig, Granularity};
pub use error::EngineError;
pub use graph::{DependencyGraph, GLOBAL_MODULE};
pub use schema::{CommandDecl, Schema, SchemaKind};
pub use turn::{Role, Turn, TurnPart};
pub use validate::{validate_arguments, violation_messages, ParamCheck, Validity};
