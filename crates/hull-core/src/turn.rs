//! Turn and part types: the minimal structural contract with the agent.
//!
//! A turn is an ordered sequence of parts, each either free text or one
//! structured function call. The engine appends result turns to an
//! externally owned transcript; nothing here is persisted by the core.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// The autonomous caller whose output is being dispatched.
    Agent,
    /// Context synthesized by the engine (results, error messages).
    User,
}

fn default_role() -> Role {
    Role::Agent
}

/// One part of a turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum TurnPart {
    #[serde(rename = "text")]
    Text { text: String },

    #[serde(rename = "function_call")]
    FunctionCall {
        name: String,
        #[serde(default)]
        arguments: Map<String, Value>,
    },
}

/// A single exchange unit of text and/or one function call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    #[serde(default = "default_role")]
    pub role: Role,
    pub parts: Vec<TurnPart>,
}

impl Turn {
    /// An engine-synthesized text entry (results, errors).
    pub fn user_text(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            parts: vec![TurnPart::Text { text: text.into() }],
        }
    }

    /// An agent turn from parts, mostly useful in tests and hosts.
    pub fn agent(parts: Vec<TurnPart>) -> Self {
        Self {
            role: Role::Agent,
            parts,
        }
    }

    /// Concatenated text content of this turn.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .filter_map(|part| match part {
                TurnPart::Text { text } => Some(text.as_str()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_part_serialization_is_tagged() {
        let part = TurnPart::Text {
            text: "hello".to_string(),
        };
        let json = serde_json::to_string(&part).unwrap();
        assert!(json.contains("\"type\":\"text\""));

        let call = TurnPart::FunctionCall {
            name: "list".to_string(),
            arguments: Map::new(),
        };
        let json = serde_json::to_string(&call).unwrap();
        assert!(json.contains("\"type\":\"function_call\""));
        assert!(json.contains("\"name\":\"list\""));
    }

    #[test]
    fn test_turn_round_trip() {
        let turn = Turn::agent(vec![TurnPart::FunctionCall {
            name: "read".to_string(),
            arguments: json!({"module": ".", "path": "*.txt"})
                .as_object()
                .cloned()
                .unwrap(),
        }]);
        let json = serde_json::to_string(&turn).unwrap();
        let parsed: Turn = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, turn);
    }

    #[test]
    fn test_role_defaults_to_agent() {
        let turn: Turn =
            serde_json::from_str(r#"{"parts":[{"type":"text","text":"hi"}]}"#).unwrap();
        assert_eq!(turn.role, Role::Agent);
        assert_eq!(turn.text(), "hi");
    }

    #[test]
    fn test_missing_call_arguments_default_empty() {
        let turn: Turn =
            serde_json::from_str(r#"{"parts":[{"type":"function_call","name":"no_op"}]}"#)
                .unwrap();
        match &turn.parts[0] {
            TurnPart::FunctionCall { name, arguments } => {
                assert_eq!(name, "no_op");
                assert!(arguments.is_empty());
            }
            _ => panic!("expected function call part"),
        }
    }

    #[test]
    fn test_user_text_constructor() {
        let turn = Turn::user_text("Error: nope");
        assert_eq!(turn.role, Role::User);
        assert_eq!(turn.text(), "Error: nope");
    }
}
