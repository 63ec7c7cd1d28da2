//! Static fixture catalog

use super::images::{embedded_library, resolve_logged};
use estate_application::ports::catalog_source::{CatalogSource, CatalogSourceError};
use estate_domain::{ImageLibrary, Property, PropertyType};

/// One fixture row; images are given by id and resolved at load time
struct FixtureRow {
    id: &'static str,
    title: &'static str,
    price: u64,
    address: &'static str,
    bedrooms: u32,
    bathrooms: u32,
    sqft: u32,
    property_type: PropertyType,
    description: &'static str,
    featured: bool,
    image_ids: &'static [&'static str],
}

const FIXTURES: &[FixtureRow] = &[
    FixtureRow {
        id: "1",
        title: "Modern Luxury Villa",
        price: 1_200_000,
        address: "123 Elegance Drive, Beverly Hills, CA",
        bedrooms: 5,
        bathrooms: 6,
        sqft: 5500,
        property_type: PropertyType::Villa,
        description: "A stunning example of modern architecture, this luxury villa offers unparalleled comfort and style. Featuring an open-plan living space, a gourmet kitchen, and breathtaking views, it's an oasis of tranquility.",
        featured: true,
        image_ids: &["prop1_main", "prop1_living", "prop1_kitchen"],
    },
    FixtureRow {
        id: "2",
        title: "Cozy Suburban Family Home",
        price: 750_000,
        address: "456 Serenity Lane, Suburbia, TX",
        bedrooms: 4,
        bathrooms: 3,
        sqft: 3200,
        property_type: PropertyType::House,
        description: "The perfect family home nestled in a quiet, friendly neighborhood. With a spacious backyard, a newly renovated kitchen, and close proximity to top-rated schools, this house has it all.",
        featured: true,
        image_ids: &["prop2_main", "prop2_bedroom"],
    },
    FixtureRow {
        id: "3",
        title: "Downtown High-Rise Apartment",
        price: 980_000,
        address: "789 Central Ave, Metropolis, NY",
        bedrooms: 2,
        bathrooms: 2,
        sqft: 1800,
        property_type: PropertyType::Apartment,
        description: "Experience city living at its finest in this sleek high-rise apartment. Floor-to-ceiling windows offer spectacular city views, and building amenities include a gym, pool, and 24-hour concierge.",
        featured: true,
        image_ids: &["prop3_main", "prop3_balcony"],
    },
    FixtureRow {
        id: "4",
        title: "Charming Brick Townhouse",
        price: 820_000,
        address: "101 Heritage Row, Old Town, VA",
        bedrooms: 3,
        bathrooms: 3,
        sqft: 2400,
        property_type: PropertyType::Townhouse,
        description: "A beautifully maintained historic townhouse that blends classic charm with modern updates. Features original hardwood floors, a private patio, and a location that's steps away from shops and cafes.",
        featured: true,
        image_ids: &["prop4_main"],
    },
    FixtureRow {
        id: "5",
        title: "Rustic Countryside Cottage",
        price: 450_000,
        address: "222 Meadow Path, Countryside, VT",
        bedrooms: 2,
        bathrooms: 1,
        sqft: 1500,
        property_type: PropertyType::Cottage,
        description: "Escape the hustle and bustle in this charming countryside cottage. Surrounded by nature, it offers a peaceful retreat with a cozy fireplace and a large garden perfect for relaxation.",
        featured: false,
        image_ids: &["prop5_main"],
    },
    FixtureRow {
        id: "6",
        title: "Sleek Urban Penthouse",
        price: 2_500_000,
        address: "99 Skyview Terrace, Penthouse 50, Urban Core, FL",
        bedrooms: 3,
        bathrooms: 4,
        sqft: 4000,
        property_type: PropertyType::Penthouse,
        description: "The pinnacle of luxury living, this penthouse boasts panoramic city and ocean views from every room. With a private rooftop pool, state-of-the-art technology, and bespoke finishes, this is a truly one-of-a-kind residence.",
        featured: false,
        image_ids: &["prop6_main"],
    },
];

/// [`CatalogSource`] serving the built-in sample listings
pub struct FixtureCatalog {
    images: ImageLibrary,
}

impl FixtureCatalog {
    /// Fixture catalog resolving images against the embedded manifest
    pub fn new() -> Result<Self, CatalogSourceError> {
        let images =
            embedded_library().map_err(|e| CatalogSourceError::Unreadable(e.to_string()))?;
        Ok(Self { images })
    }

    /// Fixture catalog resolving images against `images`
    pub fn with_images(images: ImageLibrary) -> Self {
        Self { images }
    }
}

impl CatalogSource for FixtureCatalog {
    fn load(&self) -> Result<Vec<Property>, CatalogSourceError> {
        Ok(FIXTURES
            .iter()
            .map(|row| Property {
                id: row.id.into(),
                title: row.title.to_string(),
                address: row.address.to_string(),
                description: row.description.to_string(),
                price: row.price,
                bedrooms: row.bedrooms,
                bathrooms: row.bathrooms,
                sqft: row.sqft,
                property_type: row.property_type,
                featured: row.featured,
                images: row
                    .image_ids
                    .iter()
                    .map(|id| resolve_logged(&self.images, id))
                    .collect(),
            })
            .collect())
    }
}
