//! Application layer for estate
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_GENERATION_TIMEOUT, GenerationParams};
pub use ports::{
    catalog_source::{CatalogSource, CatalogSourceError},
    lead_sink::{LeadSink, NoLeadSink},
    progress::{GenerationProgress, NoProgress},
    text_generator::{GenerationError, TextGenerator},
};
pub use use_cases::browse_catalog::{BrowseCatalogUseCase, BrowseError, LoadCatalogError};
pub use use_cases::generate_description::{GenerateDescriptionError, GenerateDescriptionUseCase};
pub use use_cases::submit_lead::{Acknowledgement, SubmitLeadError, SubmitLeadUseCase};
