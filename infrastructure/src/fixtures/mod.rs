//! Fixture data: the static sample catalog and its image manifest.

mod catalog;
mod images;

pub use catalog::FixtureCatalog;
pub use images::{embedded_library, parse_manifest};
