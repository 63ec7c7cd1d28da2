//! Progress notification port
//!
//! Defines the interface for observing a description request as it moves
//! through its lifecycle.

use estate_domain::RequestPhase;

/// Callback for lifecycle updates during description generation
///
/// Implementations live in the presentation layer (spinner, web UI, ...).
pub trait GenerationProgress: Send + Sync {
    /// Called on every phase transition, terminal phases included
    fn on_phase(&self, phase: RequestPhase);

    /// Called just before the backend call with the backend's name
    fn on_dispatch(&self, _backend: &str) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl GenerationProgress for NoProgress {
    fn on_phase(&self, _phase: RequestPhase) {}
}
