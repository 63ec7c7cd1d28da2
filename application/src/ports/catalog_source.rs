//! Catalog source port
//!
//! Where the property records come from. The catalog is loaded once at
//! startup and never written back.

use estate_domain::Property;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogSourceError {
    #[error("Failed to read catalog data: {0}")]
    Unreadable(String),
}

/// Supplies the full, ordered list of properties
pub trait CatalogSource: Send + Sync {
    fn load(&self) -> Result<Vec<Property>, CatalogSourceError>;
}
