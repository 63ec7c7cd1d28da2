//! Configuration file loading for estate
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `ESTATE_*` environment variables
//! 2. `--config <path>` specified file
//! 3. Project root: `./estate.toml` or `./.estate.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/estate/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    DEFAULT_MODEL, FileConfig, FileGeminiConfig, FileGeneratorConfig, FileLeadsConfig,
    FileOutputConfig, FileProvidersConfig,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
