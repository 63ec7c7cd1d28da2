//! Generator configuration from TOML (`[generator]` section)

use estate_application::GenerationParams;
use estate_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default model for description generation
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Description generator settings
///
/// # Example
///
/// ```toml
/// [generator]
/// model = "gemini-2.5-flash"
/// timeout_secs = 30
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeneratorConfig {
    /// Model name passed to the backend
    pub model: String,
    /// Upper bound on one backend call, in seconds
    pub timeout_secs: u64,
}

impl Default for FileGeneratorConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            timeout_secs: 30,
        }
    }
}

impl FileGeneratorConfig {
    pub fn to_generation_params(&self) -> GenerationParams {
        GenerationParams::default().with_timeout(Duration::from_secs(self.timeout_secs))
    }

    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        if self.timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::ZeroValue {
                    field: "generator.timeout_secs".to_string(),
                },
                "generator.timeout_secs: must be greater than zero",
            ));
        }
        if self.model.trim().is_empty() {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::EmptyValue {
                    field: "generator.model".to_string(),
                },
                "generator.model: model name cannot be empty",
            ));
        }
        issues
    }
}
