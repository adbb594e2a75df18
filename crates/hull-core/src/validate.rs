//! Recursive structural validation of call arguments against a command
//! schema.
//!
//! The validator never rejects on its own authority: it reports a
//! three-valued verdict per top-level parameter and leaves policy to the
//! caller. Security-sensitive callers (the dispatcher, the host entry
//! point) treat [`Validity::Unknown`] as reject-worthy.

use crate::error::EngineError;
use crate::schema::{CommandDecl, Schema, SchemaKind};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Verdict for one parameter. `Unknown` marks keys present in the
/// arguments but absent from the schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Validity {
    Valid,
    Invalid,
    Unknown,
}

/// Per-parameter result of [`validate_arguments`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamCheck {
    pub exists: bool,
    pub validity: Validity,
}

/// Validate `args` against a command declaration.
///
/// Returns an entry for every parameter that appears either in the schema
/// or in the arguments. Missing optional parameters are valid; missing
/// required parameters are invalid. The only fatal case is a declaration
/// whose top-level schema is not an object.
pub fn validate_arguments(
    args: &Map<String, Value>,
    decl: &CommandDecl,
) -> Result<BTreeMap<String, ParamCheck>, EngineError> {
    let SchemaKind::Object { properties, required } = &decl.parameters.kind else {
        return Err(EngineError::Validation(format!(
            "Top-level parameter schema for `{}` must be an object.",
            decl.name
        )));
    };

    let mut report = BTreeMap::new();

    for (name, schema) in properties {
        let check = match args.get(name) {
            None => ParamCheck {
                exists: false,
                validity: if required.contains(name) {
                    Validity::Invalid
                } else {
                    Validity::Valid
                },
            },
            Some(value) => ParamCheck {
                exists: true,
                validity: if check_value(value, schema) {
                    Validity::Valid
                } else {
                    Validity::Invalid
                },
            },
        };
        report.insert(name.clone(), check);
    }

    for key in args.keys() {
        if properties.iter().all(|(name, _)| name != key) {
            report.insert(
                key.clone(),
                ParamCheck {
                    exists: true,
                    validity: Validity::Unknown,
                },
            );
        }
    }

    Ok(report)
}

/// Human-readable rejection reasons for a report, empty when every
/// declared parameter checks out and nothing undeclared was supplied.
pub fn violation_messages(report: &BTreeMap<String, ParamCheck>) -> Vec<String> {
    report
        .iter()
        .filter_map(|(name, check)| match (check.exists, check.validity) {
            (false, Validity::Invalid) => Some(format!("required parameter `{name}` is missing")),
            (true, Validity::Invalid) => {
                Some(format!("parameter `{name}` does not match its declared schema"))
            }
            (true, Validity::Unknown) => {
                Some(format!("parameter `{name}` is not declared for this command"))
            }
            _ => None,
        })
        .collect()
}

/// Recursive value-vs-schema check. Order matters: nullability first, then
/// enum membership, then the shape of the declared type.
fn check_value(value: &Value, schema: &Schema) -> bool {
    if value.is_null() {
        return schema.nullable;
    }
    if !schema.enum_values.is_empty() && !schema.enum_values.contains(value) {
        return false;
    }
    match &schema.kind {
        SchemaKind::String => value.is_string(),
        // serde_json keeps booleans out of Value::Number, so `true` can
        // never satisfy an integer/number schema; integral check rules out
        // floats like 5.5.
        SchemaKind::Integer => value.as_i64().is_some() || value.as_u64().is_some(),
        SchemaKind::Number => value.is_number(),
        SchemaKind::Boolean => value.is_boolean(),
        SchemaKind::Array { items } => match value {
            Value::Array(elements) => items
                .as_ref()
                .map_or(true, |item| elements.iter().all(|e| check_value(e, item))),
            _ => false,
        },
        SchemaKind::Object { properties, required } => match value {
            Value::Object(fields) => {
                required.iter().all(|key| fields.contains_key(key))
                    && properties
                        .iter()
                        .all(|(key, sub)| fields.get(key).map_or(true, |v| check_value(v, sub)))
            }
            _ => false,
        },
    }
}
