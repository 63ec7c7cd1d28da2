//! Catalog Query Engine
//!
//! The catalog is a fixed, ordered collection of [`Property`] records loaded
//! once at startup. Queries are linear scans over that collection; with a
//! catalog in the tens-to-hundreds of records no index is needed.

use super::criteria::FilterCriteria;
use super::entities::{Property, PropertyId, PropertyType};
use crate::core::error::CatalogError;
use std::collections::HashSet;

/// Read-only, insertion-ordered property collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    properties: Vec<Property>,
}

impl Catalog {
    /// Build a catalog, enforcing the record invariants.
    ///
    /// Ids must be unique, every property needs at least one image, and
    /// price, bedrooms, bathrooms and sqft must be strictly positive.
    pub fn new(properties: Vec<Property>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(properties.len());
        for property in &properties {
            if !seen.insert(&property.id) {
                return Err(CatalogError::DuplicateId(property.id.clone()));
            }
            Self::check_record(property)?;
        }
        Ok(Self { properties })
    }

    fn check_record(property: &Property) -> Result<(), CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidProperty {
            id: property.id.clone(),
            reason: reason.to_string(),
        };

        if property.id.as_str().trim().is_empty() {
            return Err(invalid("id must not be empty"));
        }
        if property.images.is_empty() {
            return Err(invalid("at least one image is required"));
        }
        if property.price == 0 {
            return Err(invalid("price must be positive"));
        }
        if property.bedrooms == 0 {
            return Err(invalid("bedrooms must be positive"));
        }
        if property.bathrooms == 0 {
            return Err(invalid("bathrooms must be positive"));
        }
        if property.sqft == 0 {
            return Err(invalid("sqft must be positive"));
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    /// Every property, in catalog order
    pub fn all(&self) -> &[Property] {
        &self.properties
    }

    /// Properties satisfying every constraint in `criteria`, in catalog order.
    ///
    /// Never fails: contradictory criteria (e.g. `min_price > max_price`)
    /// simply yield an empty result.
    pub fn list(&self, criteria: &FilterCriteria) -> Vec<&Property> {
        self.properties
            .iter()
            .filter(|p| criteria.matches(p))
            .collect()
    }

    /// Look up a single property. A miss is an ordinary outcome.
    pub fn find(&self, id: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.id.as_str() == id)
    }

    /// Like [`find`](Self::find), but reports a miss as [`CatalogError::NotFound`]
    pub fn get(&self, id: &str) -> Result<&Property, CatalogError> {
        self.find(id)
            .ok_or_else(|| CatalogError::NotFound(PropertyId::new(id)))
    }

    /// Distinct types actually present, in order of first appearance.
    ///
    /// Lets a filter UI offer only values that can match something.
    pub fn property_types(&self) -> Vec<PropertyType> {
        let mut types = Vec::new();
        for property in &self.properties {
            if !types.contains(&property.property_type) {
                types.push(property.property_type);
            }
        }
        types
    }
}
