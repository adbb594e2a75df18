//! The `answer` pseudo-command.
//!
//! Advertised in the catalog like any other command, but handled by the
//! dispatcher instead of the uniform action contract: it terminates a
//! branch turn with a boolean rather than producing context entries.

use hull_core::{CommandDecl, EngineError, Schema};
use serde_json::{Map, Value};

pub const NAME: &str = "answer";

pub fn declaration() -> CommandDecl {
    CommandDecl::new(
        NAME,
        "Answer either `yes` or `no`",
        Schema::object(
            vec![("answer", Schema::string().one_of(["yes", "no"]))],
            &["answer"],
        ),
    )
}

/// Parse the enumerated answer into a boolean. Surrounding whitespace and
/// casing are tolerated; anything else is a validation failure.
pub fn parse(arguments: &Map<String, Value>) -> Result<bool, EngineError> {
    let raw = arguments
        .get("answer")
        .and_then(Value::as_str)
        .ok_or_else(|| EngineError::Validation("Answer is missing or empty.".to_string()))?;

    match raw.trim().to_ascii_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        "" => Err(EngineError::Validation(
            "Answer is missing or empty.".to_string(),
        )),
        _ => Err(EngineError::Validation(
            "Answer must be either `yes` or `no`.".to_string(),
        )),
    }
}
