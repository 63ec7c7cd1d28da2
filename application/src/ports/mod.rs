//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod catalog_source;
pub mod lead_sink;
pub mod progress;
pub mod text_generator;
