use std::path::Path;

use crate::foundation::error::EquicubeResult;
use crate::source::buffer::SourceImage;

/// Decode a panorama file (any format enabled in `image`) into a [`SourceImage`].
///
/// Codec errors surface unchanged as [`EquicubeError::Decode`](crate::EquicubeError::Decode).
pub fn load_source(path: impl AsRef<Path>) -> EquicubeResult<SourceImage> {
    let img = image::open(path.as_ref())?;
    SourceImage::from_dynamic_image(img)
}

/// Decode encoded panorama bytes into a [`SourceImage`].
pub fn decode_source(bytes: &[u8]) -> EquicubeResult<SourceImage> {
    let img = image::load_from_memory(bytes)?;
    SourceImage::from_dynamic_image(img)
}

#[cfg(test)]
#[path = "../../tests/unit/source/decode.rs"]
mod tests;
