//! Presentation-level configuration
//!
//! Output format and color settings, resolved from the CLI flag and the
//! `[output]` config section.

use estate_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Output configuration for the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Text,
            color: true,
        }
    }
}

impl OutputConfig {
    /// CLI flag wins over the config file, which wins over the default
    pub fn resolve(
        cli_format: Option<OutputFormat>,
        file_format: Option<OutputFormat>,
        color: bool,
    ) -> Self {
        Self {
            format: cli_format.or(file_format).unwrap_or_default(),
            color,
        }
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        let config = OutputConfig::resolve(None, None, true);
        assert_eq!(config.format, OutputFormat::Text);

        let config = OutputConfig::resolve(None, Some(OutputFormat::Json), true);
        assert!(config.is_json());

        let config = OutputConfig::resolve(Some(OutputFormat::Text), Some(OutputFormat::Json), false);
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.color);
    }
}
