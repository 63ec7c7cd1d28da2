//! Domain error types

use crate::property::PropertyId;
use thiserror::Error;

/// Catalog-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Property not found: {0}")]
    NotFound(PropertyId),

    #[error("Duplicate property id: {0}")]
    DuplicateId(PropertyId),

    #[error("Invalid property {id}: {reason}")]
    InvalidProperty { id: PropertyId, reason: String },
}

impl CatalogError {
    /// Check if this error is an ordinary lookup miss
    pub fn is_not_found(&self) -> bool {
        matches!(self, CatalogError::NotFound(_))
    }
}
