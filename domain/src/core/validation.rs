//! Field-keyed validation errors shared by every form-shaped input

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Per-field validation messages
///
/// Holds at most one message per field, keyed by the field's wire name
/// (`propertyFeatures`, `email`, ...), so a form can annotate each input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    fields: BTreeMap<String, String>,
}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a message for `field`. The first message recorded for a field wins.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.fields.entry(field.into()).or_insert_with(|| message.into());
    }

    /// Record a message when `field` is empty. Whitespace counts as content.
    pub fn require(&mut self, field: &str, value: &str, message: &str) {
        if value.is_empty() {
            self.add(field, message);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields.get(field).map(String::as_str)
    }

    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Field names with errors, in sorted order
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`
    pub fn into_result<T>(self, value: T) -> Result<T, Self> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, message)| format!("{}: {}", field, message))
            .collect();
        write!(f, "Invalid input ({})", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_flags_only_empty_values() {
        let mut errors = ValidationErrors::new();
        errors.require("name", "", "Name is required");
        errors.require("subject", "   ", "Subject is required");
        errors.require("message", "hello", "Message is required");

        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get("name"), Some("Name is required"));
        assert!(!errors.contains("subject"));
        assert!(!errors.contains("message"));
    }

    #[test]
    fn test_first_message_wins() {
        let mut errors = ValidationErrors::new();
        errors.add("email", "Email is required");
        errors.add("email", "Invalid email address");
        assert_eq!(errors.get("email"), Some("Email is required"));
    }

    #[test]
    fn test_into_result() {
        assert_eq!(ValidationErrors::new().into_result(7), Ok(7));

        let mut errors = ValidationErrors::new();
        errors.add("name", "Name is required");
        assert!(errors.into_result(7).is_err());
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let mut errors = ValidationErrors::new();
        errors.add("propertyFeatures", "Features are required");
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json["propertyFeatures"], "Features are required");
    }

    #[test]
    fn test_display_lists_fields() {
        let mut errors = ValidationErrors::new();
        errors.add("b", "second");
        errors.add("a", "first");
        assert_eq!(errors.to_string(), "Invalid input (a: first; b: second)");
    }
}
