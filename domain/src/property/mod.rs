//! Property subdomain
//!
//! Entities, filter criteria, the catalog query engine and image lookup.

pub mod catalog;
pub mod criteria;
pub mod entities;
pub mod image;

pub use catalog::Catalog;
pub use criteria::FilterCriteria;
pub use entities::{Image, Property, PropertyId, PropertyType};
pub use image::{ImageAsset, ImageLibrary};
