//! Image asset lookup keyed by image id

use super::entities::Image;
use serde::{Deserialize, Serialize};

/// One entry of an image manifest, in the manifest's own field names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageAsset {
    pub id: String,
    pub description: String,
    pub image_url: String,
    pub image_hint: String,
}

impl From<&ImageAsset> for Image {
    fn from(asset: &ImageAsset) -> Self {
        Image {
            id: asset.id.clone(),
            url: asset.image_url.clone(),
            hint: asset.image_hint.clone(),
            description: asset.description.clone(),
        }
    }
}

/// Registry resolving image ids to [`Image`] references
#[derive(Debug, Clone, Default)]
pub struct ImageLibrary {
    assets: Vec<ImageAsset>,
}

impl ImageLibrary {
    pub fn new(assets: Vec<ImageAsset>) -> Self {
        Self { assets }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.assets.iter().any(|a| a.id == id)
    }

    /// The image registered under `id`, if any
    pub fn lookup(&self, id: &str) -> Option<Image> {
        self.assets.iter().find(|a| a.id == id).map(Image::from)
    }

    /// The image registered under `id`, or [`Image::placeholder`] when unknown.
    ///
    /// An unknown id never fails the caller.
    pub fn resolve(&self, id: &str) -> Image {
        self.lookup(id).unwrap_or_else(Image::placeholder)
    }
}
