//! Presentation layer for estate
//!
//! This crate contains CLI definitions, output formatters,
//! presentation-side sorting and progress reporters.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{
    Cli, Command, ContactArgs, DescribeArgs, InquireArgs, ListArgs, OutputFormat,
};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::sort::SortOrder;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
