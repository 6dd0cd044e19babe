//! Typed tool declarations.
//!
//! Each tool describes its parameters once; the same declaration drives
//! both the wire-format tool list advertised to the model and the
//! schema-driven argument coercion pass.

use serde_json::{json, Map, Value};

/// The type a declared parameter is expected to carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Free-form text.
    String,
    /// Integer, e.g. a record identifier.
    Integer,
    /// ISO-8601 datetime.
    DateTime,
}

/// One declared parameter.
#[derive(Debug, Clone)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub required: bool,
    pub description: &'static str,
}

/// Immutable declaration of a tool: name, description and parameter schema.
///
/// Defined once at process start and shared read-only by all requests.
#[derive(Debug, Clone)]
pub struct ToolDeclaration {
    pub name: &'static str,
    pub description: &'static str,
    pub params: &'static [ParamSpec],
}

impl ToolDeclaration {
    /// Look up the declared kind of a field, if the tool declares it.
    pub fn kind_of(&self, field: &str) -> Option<ParamKind> {
        self.params
            .iter()
            .find(|p| p.name == field)
            .map(|p| p.kind)
    }

    /// Render the declaration in the wire format advertised to the model.
    pub fn to_wire(&self) -> Value {
        let mut properties = Map::new();
        let mut required = Vec::new();

        for param in self.params {
            let mut spec = Map::new();
            match param.kind {
                ParamKind::String => {
                    spec.insert("type".to_string(), json!("string"));
                }
                ParamKind::Integer => {
                    spec.insert("type".to_string(), json!("integer"));
                }
                ParamKind::DateTime => {
                    spec.insert("type".to_string(), json!("string"));
                    spec.insert("format".to_string(), json!("date-time"));
                }
            }
            spec.insert("description".to_string(), json!(param.description));
            properties.insert(param.name.to_string(), Value::Object(spec));

            if param.required {
                required.push(json!(param.name));
            }
        }

        let mut parameters = Map::new();
        parameters.insert("type".to_string(), json!("object"));
        parameters.insert("properties".to_string(), Value::Object(properties));
        if !required.is_empty() {
            parameters.insert("required".to_string(), Value::Array(required));
        }
        parameters.insert("additionalProperties".to_string(), json!(false));

        json!({
            "type": "function",
            "name": self.name,
            "description": self.description,
            "parameters": Value::Object(parameters),
        })
    }
}
