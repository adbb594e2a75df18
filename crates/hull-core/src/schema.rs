//! Command parameter schemas.
//!
//! The schema tree is a closed variant type rather than free-form JSON: it
//! is the single source of truth both for validating agent-supplied
//! arguments and for advertising the command to the model, via
//! [`CommandDecl::to_value`].

use serde_json::{json, Map, Value};

/// One node of a parameter schema.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    pub kind: SchemaKind,
    pub nullable: bool,
    /// Closed set of admissible values; empty means unconstrained.
    pub enum_values: Vec<Value>,
    pub description: Option<String>,
}

/// The closed set of schema shapes the engine understands.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaKind {
    String,
    Integer,
    Number,
    Boolean,
    Array {
        /// Element schema; `None` admits any array.
        items: Option<Box<Schema>>,
    },
    Object {
        /// Declared properties in authoring order.
        properties: Vec<(String, Schema)>,
        required: Vec<String>,
    },
}

impl Schema {
    fn of(kind: SchemaKind) -> Self {
        Self {
            kind,
            nullable: false,
            enum_values: Vec::new(),
            description: None,
        }
    }

    pub fn string() -> Self {
        Self::of(SchemaKind::String)
    }

    pub fn integer() -> Self {
        Self::of(SchemaKind::Integer)
    }

    pub fn number() -> Self {
        Self::of(SchemaKind::Number)
    }

    pub fn boolean() -> Self {
        Self::of(SchemaKind::Boolean)
    }

    pub fn array(items: Schema) -> Self {
        Self::of(SchemaKind::Array {
            items: Some(Box::new(items)),
        })
    }

    pub fn object(properties: Vec<(&str, Schema)>, required: &[&str]) -> Self {
        Self::of(SchemaKind::Object {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required: required.iter().map(|r| r.to_string()).collect(),
        })
    }

    pub fn describe(mut self, text: impl Into<String>) -> Self {
        self.description = Some(text.into());
        self
    }

    pub fn one_of<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.enum_values = values.into_iter().map(|v| Value::String(v.into())).collect();
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Look up a declared property of an object schema.
    pub fn property(&self, name: &str) -> Option<&Schema> {
        match &self.kind {
            SchemaKind::Object { properties, .. } => properties
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, schema)| schema),
            _ => None,
        }
    }

    fn type_name(&self) -> &'static str {
        match self.kind {
            SchemaKind::String => "string",
            SchemaKind::Integer => "integer",
            SchemaKind::Number => "number",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Array { .. } => "array",
            SchemaKind::Object { .. } => "object",
        }
    }

    /// Project the schema into the JSON shape used for tool advertisement.
    pub fn to_value(&self) -> Value {
        let mut map = Map::new();
        map.insert("type".to_string(), json!(self.type_name()));
        if let Some(description) = &self.description {
            map.insert("description".to_string(), json!(description));
        }
        if !self.enum_values.is_empty() {
            map.insert("enum".to_string(), Value::Array(self.enum_values.clone()));
        }
        if self.nullable {
            map.insert("nullable".to_string(), json!(true));
        }
        match &self.kind {
            SchemaKind::Array { items: Some(items) } => {
                map.insert("items".to_string(), items.to_value());
            }
            SchemaKind::Object { properties, required } => {
                let props: Map<String, Value> = properties
                    .iter()
                    .map(|(name, schema)| (name.clone(), schema.to_value()))
                    .collect();
                map.insert("properties".to_string(), Value::Object(props));
                map.insert("required".to_string(), json!(required));
            }
            _ => {}
        }
        Value::Object(map)
    }
}

/// A command declaration: name, description, and its parameter schema.
///
/// Declarations are built once at engine construction and never change.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandDecl {
    pub name: String,
    pub description: String,
    pub parameters: Schema,
}

impl CommandDecl {
    pub fn new(name: impl Into<String>, description: impl Into<String>, parameters: Schema) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            parameters,
        }
    }

    /// The JSON advertisement for this command.
    pub fn to_value(&self) -> Value {
        json!({
            "name": self.name,
            "description": self.description,
            "parameters": self.parameters.to_value(),
        })
    }
}
