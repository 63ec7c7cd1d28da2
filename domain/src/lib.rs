//! Domain layer for estate
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Catalog
//!
//! A fixed, read-only collection of [`Property`] records answering filtered
//! queries ([`FilterCriteria`]), single-record lookups and distinct-type
//! listings. All queries are pure functions of catalog and criteria.
//!
//! ## Description requests
//!
//! Free-text property facts ([`DescriptionRequest`]) are validated into a
//! [`ValidatedRequest`], rendered through [`PromptTemplate`], and answered by a
//! generative-text backend under an [`OutputSchema`] contract.
//!
//! ## Leads
//!
//! Inquiry and contact forms validated into a [`Lead`] for hand-off.

pub mod config;
pub mod core;
pub mod description;
pub mod lead;
pub mod prompt;
pub mod property;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat, Severity};
pub use crate::core::{error::CatalogError, validation::ValidationErrors};
pub use description::{
    DescriptionRequest, GeneratedDescription, OutputField, OutputSchema,
    PROPERTY_DESCRIPTION_FIELD, RequestPhase, ValidatedRequest,
};
pub use lead::{ContactForm, InquiryForm, Lead};
pub use prompt::PromptTemplate;
pub use property::{
    Catalog, FilterCriteria, Image, ImageAsset, ImageLibrary, Property, PropertyId, PropertyType,
};
