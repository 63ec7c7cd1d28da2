//! Property entity and its value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable identifier of a [`Property`] (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(String);

impl PropertyId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PropertyId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for PropertyId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Kind of dwelling. The set is closed; the catalog never holds anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum PropertyType {
    Villa,
    House,
    Apartment,
    Townhouse,
    Cottage,
    Penthouse,
}

impl PropertyType {
    /// Every variant, in declaration order
    pub const ALL: [PropertyType; 6] = [
        PropertyType::Villa,
        PropertyType::House,
        PropertyType::Apartment,
        PropertyType::Townhouse,
        PropertyType::Cottage,
        PropertyType::Penthouse,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyType::Villa => "Villa",
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Townhouse => "Townhouse",
            PropertyType::Cottage => "Cottage",
            PropertyType::Penthouse => "Penthouse",
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PropertyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PropertyType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Invalid PropertyType: {}", s))
    }
}

/// Reference to a picture of a property.
///
/// `hint` is a short style/search hint for the image ("modern villa"),
/// `description` doubles as alt text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub id: String,
    pub url: String,
    pub hint: String,
    pub description: String,
}

impl Image {
    pub const FALLBACK_ID: &'static str = "fallback";

    /// The record substituted for an unknown image id
    pub fn placeholder() -> Self {
        Self {
            id: Self::FALLBACK_ID.to_string(),
            url: "https://picsum.photos/seed/error/800/600".to_string(),
            hint: "image".to_string(),
            description: "Placeholder image".to_string(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.id == Self::FALLBACK_ID
    }
}

/// A listed property (Entity)
///
/// Immutable once loaded into a [`Catalog`](super::Catalog). Prices are whole
/// dollars. The first image is the cover image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub id: PropertyId,
    pub title: String,
    pub address: String,
    pub description: String,
    pub price: u64,
    pub bedrooms: u32,
    pub bathrooms: u32,
    pub sqft: u32,
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub featured: bool,
    pub images: Vec<Image>,
}

impl Property {
    /// Cover image, if the property has any images at all
    pub fn cover_image(&self) -> Option<&Image> {
        self.images.first()
    }

    /// Price per square foot, rounded to the nearest dollar
    pub fn price_per_sqft(&self) -> u64 {
        if self.sqft == 0 {
            return 0;
        }
        let sqft = u64::from(self.sqft);
        (self.price + sqft / 2) / sqft
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_type_parse_is_case_insensitive() {
        assert_eq!("villa".parse::<PropertyType>(), Ok(PropertyType::Villa));
        assert_eq!(" Penthouse ".parse::<PropertyType>(), Ok(PropertyType::Penthouse));
        assert!("Castle".parse::<PropertyType>().is_err());
    }

    #[test]
    fn test_property_type_display_round_trips() {
        for t in PropertyType::ALL {
            assert_eq!(t.to_string().parse::<PropertyType>(), Ok(t));
        }
    }

    #[test]
    fn test_property_serializes_type_field() {
        let property = Property {
            id: "9".into(),
            title: "Test".to_string(),
            address: "1 Test St".to_string(),
            description: "desc".to_string(),
            price: 100,
            bedrooms: 1,
            bathrooms: 1,
            sqft: 10,
            property_type: PropertyType::Cottage,
            featured: false,
            images: vec![Image::placeholder()],
        };
        let json = serde_json::to_value(&property).unwrap();
        assert_eq!(json["type"], "Cottage");
        assert_eq!(json["id"], "9");
    }

    #[test]
    fn test_price_per_sqft_rounds() {
        let mut property = Property {
            id: "1".into(),
            title: String::new(),
            address: String::new(),
            description: String::new(),
            price: 1_200_000,
            bedrooms: 5,
            bathrooms: 6,
            sqft: 5500,
            property_type: PropertyType::Villa,
            featured: true,
            images: vec![],
        };
        // 218.18...
        assert_eq!(property.price_per_sqft(), 218);
        property.price = 450_000;
        property.sqft = 1500;
        assert_eq!(property.price_per_sqft(), 300);
    }

    #[test]
    fn test_placeholder_image() {
        let image = Image::placeholder();
        assert!(image.is_placeholder());
        assert_eq!(image.description, "Placeholder image");
    }
}
