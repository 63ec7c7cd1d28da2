//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod generator;
mod leads;
mod output;
mod providers;

pub use generator::{DEFAULT_MODEL, FileGeneratorConfig};
pub use leads::FileLeadsConfig;
pub use output::FileOutputConfig;
pub use providers::{FileGeminiConfig, FileProvidersConfig};

use estate_domain::{ConfigIssue, ConfigIssueCode};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Description generator settings
    pub generator: FileGeneratorConfig,
    /// Backend credentials and endpoints
    pub providers: FileProvidersConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Lead hand-off
    pub leads: FileLeadsConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// A missing API key is only a warning: browsing and lead submission
    /// work without one.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.generator.validate();

        if self.providers.gemini.resolve_api_key().is_none() {
            let env_var = self.providers.gemini.api_key_env.clone();
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::MissingApiKey {
                    env_var: env_var.clone(),
                },
                format!(
                    "providers.gemini: no API key configured and ${} is unset; `describe` will fail",
                    env_var
                ),
            ));
        }

        issues
    }
}
