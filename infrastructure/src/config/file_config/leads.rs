//! Lead hand-off configuration from TOML (`[leads]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where validated inquiries and contact messages go
///
/// Without `log_path`, leads are only written to the diagnostic log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLeadsConfig {
    /// Append-only JSONL file receiving one line per lead
    pub log_path: Option<PathBuf>,
}
