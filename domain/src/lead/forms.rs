//! Inquiry and contact form value objects

use crate::core::validation::ValidationErrors;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Loose structural check: something@something.tld, no whitespace
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

fn check_contact_fields(errors: &mut ValidationErrors, name: &str, email: &str, message: &str) {
    errors.require("name", name, "Name is required");
    if !is_valid_email(email) {
        errors.add("email", "Invalid email address");
    }
    errors.require("message", message, "Message is required");
}

/// A visitor's question about a specific listing
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InquiryForm {
    pub property_id: String,
    pub property_title: String,
    pub name: String,
    pub email: String,
    pub message: String,
}

impl InquiryForm {
    pub fn validate(self) -> Result<Lead, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_contact_fields(&mut errors, &self.name, &self.email, &self.message);
        errors.into_result(Lead::Inquiry(self))
    }
}

/// A general message from the contact page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(self) -> Result<Lead, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        check_contact_fields(&mut errors, &self.name, &self.email, &self.message);
        errors.require("subject", &self.subject, "Subject is required");
        errors.into_result(Lead::Contact(self))
    }
}

/// A validated form submission, ready for hand-off
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Lead {
    Inquiry(InquiryForm),
    Contact(ContactForm),
}

impl Lead {
    pub fn kind(&self) -> &'static str {
        match self {
            Lead::Inquiry(_) => "inquiry",
            Lead::Contact(_) => "contact",
        }
    }

    pub fn email(&self) -> &str {
        match self {
            Lead::Inquiry(form) => &form.email,
            Lead::Contact(form) => &form.email,
        }
    }

    /// Canned acknowledgement shown to the visitor
    pub fn acknowledgement(&self) -> &'static str {
        match self {
            Lead::Inquiry(_) => "Thank you for your inquiry! We will get back to you shortly.",
            Lead::Contact(_) => "Thank you for your message! We will be in touch soon.",
        }
    }
}
