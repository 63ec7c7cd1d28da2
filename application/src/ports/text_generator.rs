//! Text generator port
//!
//! Defines the interface for talking to a generative-text backend.

use async_trait::async_trait;
use estate_domain::OutputSchema;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while completing a prompt
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Authentication failed: {0}")]
    AuthenticationFailed(String),

    #[error("Rate limited by the backend")]
    RateLimited,

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Timed out after {}", display_duration(.0))]
    Timeout(Duration),

    #[error("Request cancelled")]
    Cancelled,

    #[error("Not configured: {0}")]
    NotConfigured(String),
}

impl GenerationError {
    /// Whether resubmitting the same request later could succeed
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            GenerationError::ConnectionError(_)
                | GenerationError::RateLimited
                | GenerationError::Timeout(_)
        )
    }
}

/// Whole seconds as `30s`, anything finer as milliseconds (`250ms`, `1500ms`)
fn display_duration(duration: &Duration) -> String {
    if duration.subsec_nanos() == 0 {
        format!("{}s", duration.as_secs())
    } else {
        format!("{}ms", duration.as_millis())
    }
}

/// Capability for structured prompt completion
///
/// The backend receives a finished prompt and must answer with a JSON object
/// shaped by `schema`. Implementations (adapters) live in the infrastructure
/// layer; they neither retry nor cache.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Short identifier of the backend, used in logs
    fn name(&self) -> &str;

    /// Complete `prompt`, returning the structured result object
    async fn complete(&self, prompt: &str, schema: &OutputSchema) -> Result<Value, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transient_errors() {
        assert!(GenerationError::Timeout(Duration::from_secs(30)).is_transient());
        assert!(GenerationError::RateLimited.is_transient());
        assert!(GenerationError::ConnectionError("reset".to_string()).is_transient());
        assert!(!GenerationError::MalformedResponse("{}".to_string()).is_transient());
        assert!(!GenerationError::Cancelled.is_transient());
    }

    #[test]
    fn test_timeout_display() {
        assert_eq!(
            GenerationError::Timeout(Duration::from_secs(30)).to_string(),
            "Timed out after 30s"
        );
        assert_eq!(
            GenerationError::Timeout(Duration::from_millis(250)).to_string(),
            "Timed out after 250ms"
        );
        assert_eq!(
            GenerationError::Timeout(Duration::from_millis(1500)).to_string(),
            "Timed out after 1500ms"
        );
    }
}
