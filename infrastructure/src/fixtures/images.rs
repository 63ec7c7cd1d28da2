//! Image registry backed by the embedded placeholder manifest

use estate_domain::{Image, ImageAsset, ImageLibrary};
use tracing::warn;

const PLACEHOLDER_MANIFEST: &str = include_str!("placeholder-images.json");

/// Parse an image manifest (a JSON array of `{id, description, imageUrl, imageHint}`)
pub fn parse_manifest(json: &str) -> Result<ImageLibrary, serde_json::Error> {
    let assets: Vec<ImageAsset> = serde_json::from_str(json)?;
    Ok(ImageLibrary::new(assets))
}

/// The manifest compiled into the binary
pub fn embedded_library() -> Result<ImageLibrary, serde_json::Error> {
    parse_manifest(PLACEHOLDER_MANIFEST)
}

/// Resolve `id`, logging when the placeholder has to stand in
pub fn resolve_logged(library: &ImageLibrary, id: &str) -> Image {
    if !library.contains(id) {
        warn!(image_id = id, "Unknown image id, using placeholder");
    }
    library.resolve(id)
}
