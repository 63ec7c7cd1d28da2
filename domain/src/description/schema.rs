//! Structured output contract for the generative-text backend

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};

/// Name of the single field the description backend must return
pub const PROPERTY_DESCRIPTION_FIELD: &str = "propertyDescription";

/// One named string field of a structured response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputField {
    pub name: String,
    pub description: String,
}

/// The shape a structured completion must conform to
///
/// Every field is a required string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSchema {
    pub name: String,
    pub fields: Vec<OutputField>,
}

impl OutputSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.fields.push(OutputField {
            name: name.into(),
            description: description.into(),
        });
        self
    }

    /// Contract for the property description generator
    pub fn property_description() -> Self {
        Self::new("generatePropertyDescriptionOutput").with_field(
            PROPERTY_DESCRIPTION_FIELD,
            "A compelling description of the property.",
        )
    }

    /// Render as a JSON Schema object
    pub fn to_json_schema(&self) -> Value {
        let mut properties = Map::new();
        for field in &self.fields {
            properties.insert(
                field.name.clone(),
                json!({ "type": "string", "description": field.description }),
            );
        }
        let required: Vec<&str> = self.fields.iter().map(|f| f.name.as_str()).collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }

    /// Read `field` from a structured result as a non-blank string
    pub fn extract<'a>(&self, result: &'a Value, field: &str) -> Option<&'a str> {
        result
            .get(field)
            .and_then(Value::as_str)
            .filter(|s| !s.trim().is_empty())
    }
}
