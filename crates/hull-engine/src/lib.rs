//! hull-engine: the agent-turn dispatcher and host-initiated execution
//! entry points.

pub mod dispatcher;
pub mod host;

pub use dispatcher::{DispatchOutcome, DispatchRequest, Engine, TurnKind};
pub use host::{HostAction, HostReport};
