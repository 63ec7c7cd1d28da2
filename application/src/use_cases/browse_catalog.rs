//! Browse Catalog use case
//!
//! The boundary page-rendering code consumes: list with criteria, get by id,
//! list distinct types. Backed by a [`Catalog`] loaded once from a
//! [`CatalogSource`] and shared read-only afterwards.

use crate::ports::catalog_source::{CatalogSource, CatalogSourceError};
use estate_domain::{Catalog, CatalogError, FilterCriteria, Property, PropertyId, PropertyType};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors from loading the catalog at startup
#[derive(Error, Debug)]
pub enum LoadCatalogError {
    #[error(transparent)]
    Source(#[from] CatalogSourceError),

    #[error(transparent)]
    Invalid(#[from] CatalogError),
}

/// Errors from a catalog query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrowseError {
    #[error("Property not found: {0}")]
    NotFound(PropertyId),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Use case for read-only catalog queries
#[derive(Clone)]
pub struct BrowseCatalogUseCase {
    catalog: Arc<Catalog>,
}

impl BrowseCatalogUseCase {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Load and validate the catalog from `source`
    pub fn load(source: &dyn CatalogSource) -> Result<Self, LoadCatalogError> {
        let catalog = Catalog::new(source.load()?)?;
        info!(properties = catalog.len(), "Catalog loaded");
        Ok(Self::new(Arc::new(catalog)))
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Properties matching `criteria`, in catalog order.
    ///
    /// `None` and an empty criteria both return the whole catalog.
    pub fn list(&self, criteria: Option<&FilterCriteria>) -> Vec<Property> {
        let result: Vec<Property> = match criteria {
            Some(criteria) => self.catalog.list(criteria).into_iter().cloned().collect(),
            None => self.catalog.all().to_vec(),
        };
        debug!(
            ?criteria,
            matched = result.len(),
            total = self.catalog.len(),
            "Listed properties"
        );
        result
    }

    /// Promoted properties for the home page
    pub fn featured(&self) -> Vec<Property> {
        self.list(Some(&FilterCriteria::new().featured_only()))
    }

    /// A single property; a miss is [`BrowseError::NotFound`]
    pub fn show(&self, id: &str) -> Result<Property, BrowseError> {
        match self.catalog.get(id) {
            Ok(property) => Ok(property.clone()),
            Err(e) if e.is_not_found() => {
                debug!(id, "Property lookup missed");
                Err(BrowseError::NotFound(PropertyId::new(id)))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Whether `id` names a property in the catalog
    pub fn contains(&self, id: &str) -> bool {
        self.catalog.find(id).is_some()
    }

    /// Distinct types present in the catalog
    pub fn property_types(&self) -> Vec<PropertyType> {
        self.catalog.property_types()
    }
}
