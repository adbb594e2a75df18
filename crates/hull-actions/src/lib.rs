//! hull-actions: flat file store, path patterns, segment editor, and the
//! built-in command implementations (list, read, write, append, edit,
//! query_modules, create_module, no_op).

pub mod builtin;
pub mod catalog;
pub mod pattern;
pub mod segment;
pub mod store;
pub mod traits;

pub use builtin::register_all;
pub use catalog::ActionCatalog;
pub use segment::SegmentEditor;
pub use traits::{Action, ActionContext, ActionOutcome};
