//! JSONL file writer for validated leads.
//!
//! Each [`Lead`] is serialized as a single JSON line carrying its `kind`
//! and a `timestamp`, appended to the file via a buffered writer.

use estate_application::ports::lead_sink::LeadSink;
use estate_domain::Lead;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::warn;

/// Lead sink that appends one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes on `Drop`.
pub struct JsonlLeadLog {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlLeadLog {
    /// Open `path` for appending.
    ///
    /// Creates the file (and parent directories) if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create lead log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open lead log file {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the log file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// One JSON line for `lead`, stamped with the current UTC time
fn encode(lead: &Lead) -> Result<String, serde_json::Error> {
    let mut record = serde_json::to_value(lead)?;
    if let serde_json::Value::Object(map) = &mut record {
        map.insert(
            "timestamp".to_string(),
            serde_json::Value::String(
                chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            ),
        );
    }
    serde_json::to_string(&record)
}

impl LeadSink for JsonlLeadLog {
    fn record(&self, lead: &Lead) {
        let line = match encode(lead) {
            Ok(line) => line,
            Err(e) => {
                warn!(
                    kind = lead.kind(),
                    "Could not serialize lead for {}: {}",
                    self.path.display(),
                    e
                );
                return;
            }
        };

        // A panic in another writer leaves the buffer intact; keep appending.
        let mut writer = self.writer.lock().unwrap_or_else(|poisoned| {
            warn!(
                "Lead log writer for {} was poisoned, recovering",
                self.path.display()
            );
            PoisonError::into_inner(poisoned)
        });

        if let Err(e) = writeln!(writer, "{}", line).and_then(|_| writer.flush()) {
            warn!("Could not write lead to {}: {}", self.path.display(), e);
        }
    }
}

impl Drop for JsonlLeadLog {
    fn drop(&mut self) {
        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        let _ = writer.flush();
    }
}
