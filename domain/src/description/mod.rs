//! Description subdomain
//!
//! Input validation, the structured output contract and the request
//! lifecycle for the generated property description feature. The prompt
//! itself lives in [`crate::prompt`].

pub mod phase;
pub mod request;
pub mod schema;

pub use phase::RequestPhase;
pub use request::{DescriptionRequest, GeneratedDescription, ValidatedRequest};
pub use schema::{OutputField, OutputSchema, PROPERTY_DESCRIPTION_FIELD};
