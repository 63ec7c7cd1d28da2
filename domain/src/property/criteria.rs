//! Filter criteria for catalog queries

use super::entities::{Property, PropertyType};
use serde::{Deserialize, Serialize};

/// A set of optional constraints over the catalog (Value Object)
///
/// Every constraint is independent and all supplied constraints must hold.
/// An absent constraint imposes no filter, so `FilterCriteria::default()`
/// matches every property.
///
/// `featured` only narrows when `true`; `false` means "featured or not".
/// Price bounds are inclusive. `beds` and `baths` are "N or more" lower
/// bounds, not exact matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FilterCriteria {
    pub featured: bool,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub property_type: Option<PropertyType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub beds: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baths: Option<u32>,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Builder Methods ====================

    pub fn featured_only(mut self) -> Self {
        self.featured = true;
        self
    }

    pub fn with_type(mut self, property_type: PropertyType) -> Self {
        self.property_type = Some(property_type);
        self
    }

    pub fn with_min_price(mut self, min_price: u64) -> Self {
        self.min_price = Some(min_price);
        self
    }

    pub fn with_max_price(mut self, max_price: u64) -> Self {
        self.max_price = Some(max_price);
        self
    }

    pub fn with_beds(mut self, beds: u32) -> Self {
        self.beds = Some(beds);
        self
    }

    pub fn with_baths(mut self, baths: u32) -> Self {
        self.baths = Some(baths);
        self
    }

    // ==================== Queries ====================

    /// True when no constraint is set
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether `property` satisfies every supplied constraint.
    ///
    /// Short-circuits on the first failing dimension.
    pub fn matches(&self, property: &Property) -> bool {
        (!self.featured || property.featured)
            && self
                .property_type
                .is_none_or(|t| property.property_type == t)
            && self.min_price.is_none_or(|min| property.price >= min)
            && self.max_price.is_none_or(|max| property.price <= max)
            && self.beds.is_none_or(|beds| property.bedrooms >= beds)
            && self.baths.is_none_or(|baths| property.bathrooms >= baths)
    }
}
