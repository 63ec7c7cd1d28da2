//! Lifecycle of a single description request

use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a description request is in its lifecycle.
///
/// `Received -> Validating -> {Invalid | Dispatching} -> {Generated | ServiceFailed}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestPhase {
    Received,
    Validating,
    Invalid,
    Dispatching,
    Generated,
    ServiceFailed,
}

impl RequestPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            RequestPhase::Invalid | RequestPhase::Generated | RequestPhase::ServiceFailed
        )
    }

    /// Whether `next` is a legal successor of `self`
    pub fn can_transition_to(&self, next: RequestPhase) -> bool {
        matches!(
            (self, next),
            (RequestPhase::Received, RequestPhase::Validating)
                | (RequestPhase::Validating, RequestPhase::Invalid)
                | (RequestPhase::Validating, RequestPhase::Dispatching)
                | (RequestPhase::Dispatching, RequestPhase::Generated)
                | (RequestPhase::Dispatching, RequestPhase::ServiceFailed)
        )
    }
}

impl fmt::Display for RequestPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RequestPhase::Received => "received",
            RequestPhase::Validating => "validating",
            RequestPhase::Invalid => "invalid",
            RequestPhase::Dispatching => "dispatching",
            RequestPhase::Generated => "generated",
            RequestPhase::ServiceFailed => "service_failed",
        };
        write!(f, "{}", name)
    }
}
