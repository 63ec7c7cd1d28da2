//! Application-level configuration.
//!
//! - [`GenerationParams`]: bounds on the outbound generative-text call

pub mod generation_params;

pub use generation_params::{DEFAULT_GENERATION_TIMEOUT, GenerationParams};
