//! Generation parameters: description pipeline control.
//!
//! [`GenerationParams`] groups the static parameters that bound a single
//! outbound call made by
//! [`GenerateDescriptionUseCase`](crate::use_cases::generate_description::GenerateDescriptionUseCase).

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default bound on one generative-text call
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Outbound call control parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Upper bound on a single backend call. Exceeding it fails the request.
    pub timeout: Duration,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_GENERATION_TIMEOUT,
        }
    }
}

impl GenerationParams {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}
