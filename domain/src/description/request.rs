//! Description request value objects

use crate::core::validation::ValidationErrors;
use serde::{Deserialize, Serialize};

pub const FEATURES_FIELD: &str = "propertyFeatures";
pub const LOCATION_FIELD: &str = "propertyLocation";
pub const PARKS_FIELD: &str = "proximityToParks";
pub const NEIGHBORHOOD_FIELD: &str = "neighborhoodQuality";

/// Raw, unvalidated input for the description generator
///
/// Field names on the wire match the admin form (`propertyFeatures`, ...).
/// Missing required fields deserialize as empty strings so that validation,
/// not deserialization, reports them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DescriptionRequest {
    pub property_features: String,
    pub property_location: String,
    pub proximity_to_parks: Option<String>,
    pub neighborhood_quality: Option<String>,
}

impl DescriptionRequest {
    pub fn new(features: impl Into<String>, location: impl Into<String>) -> Self {
        Self {
            property_features: features.into(),
            property_location: location.into(),
            proximity_to_parks: None,
            neighborhood_quality: None,
        }
    }

    pub fn with_proximity_to_parks(mut self, parks: impl Into<String>) -> Self {
        self.proximity_to_parks = Some(parks.into());
        self
    }

    pub fn with_neighborhood_quality(mut self, quality: impl Into<String>) -> Self {
        self.neighborhood_quality = Some(quality.into());
        self
    }

    /// Check required fields and normalize optional ones.
    ///
    /// Features and location must be non-empty; whitespace counts as content.
    /// Optional fields accept any value; only an empty string is treated as
    /// absent.
    pub fn validate(self) -> Result<ValidatedRequest, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require(FEATURES_FIELD, &self.property_features, "Features are required");
        errors.require(LOCATION_FIELD, &self.property_location, "Location is required");

        errors.into_result(ValidatedRequest {
            features: self.property_features,
            location: self.property_location,
            proximity_to_parks: non_empty(self.proximity_to_parks),
            neighborhood_quality: non_empty(self.neighborhood_quality),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// A description request that passed validation
///
/// Only obtainable through [`DescriptionRequest::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidatedRequest {
    #[serde(rename = "propertyFeatures")]
    features: String,
    #[serde(rename = "propertyLocation")]
    location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    proximity_to_parks: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    neighborhood_quality: Option<String>,
}

impl ValidatedRequest {
    pub fn features(&self) -> &str {
        &self.features
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn proximity_to_parks(&self) -> Option<&str> {
        self.proximity_to_parks.as_deref()
    }

    pub fn neighborhood_quality(&self) -> Option<&str> {
        self.neighborhood_quality.as_deref()
    }
}

/// Marketing copy returned by the generator, passed through verbatim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedDescription {
    pub description: String,
}

impl GeneratedDescription {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.description
    }

    pub fn into_inner(self) -> String {
        self.description
    }
}

impl std::fmt::Display for GeneratedDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description)
    }
}
