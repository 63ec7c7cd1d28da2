//! Core domain concepts shared across all subdomains.
//!
//! - [`error::CatalogError`]: catalog lookup and load errors
//! - [`validation::ValidationErrors`]: field-keyed form validation messages

pub mod error;
pub mod validation;
