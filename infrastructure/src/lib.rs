//! Infrastructure layer for estate
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod fixtures;
pub mod logging;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileConfig, FileGeminiConfig, FileGeneratorConfig, FileLeadsConfig,
    FileOutputConfig,
};
pub use fixtures::{FixtureCatalog, embedded_library, parse_manifest};
pub use logging::{JsonlLeadLog, TracingLeadSink};
pub use providers::GeminiTextGenerator;
