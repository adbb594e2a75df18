//! Error types for the hull engine.

/// Engine-wide error taxonomy.
///
/// Every failure below the dispatcher boundary is one of these variants;
/// the dispatcher converts them into conversational error turns, while the
/// host-initiated entry point surfaces them unchanged.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Unknown module or target, or a missing file where one was required
    #[error("Not found: {0}")]
    NotFound(String),

    /// Access control denial
    #[error("Permission denied: {0}")]
    Permission(String),

    /// Bad enum/type, missing required parameter, or malformed schema
    #[error("Invalid arguments: {0}")]
    Validation(String),

    /// Malformed turn shape or a disallowed command name
    #[error("Protocol violation: {0}")]
    Protocol(String),

    /// Inverted or out-of-bounds segment range
    #[error("Invalid range: {0}")]
    Range(String),

    /// I/O error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
