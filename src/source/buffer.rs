use crate::foundation::error::{EquicubeError, EquicubeResult};

/// Decoded equirectangular panorama: RGBA8, tightly packed, row-major, top row first.
///
/// Construction validates the 2:1 aspect ratio and the buffer length, so every `SourceImage` is a
/// usable projection input. The pixels are immutable after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl SourceImage {
    /// Wrap straight-alpha RGBA8 bytes.
    ///
    /// Fails with [`EquicubeError::InvalidAspectRatio`] unless `width == 2 * height` and
    /// `height >= 1`, and with [`EquicubeError::Validation`] if `data` is not `width * height * 4`
    /// bytes long.
    pub fn from_rgba8(width: u32, height: u32, data: Vec<u8>) -> EquicubeResult<Self> {
        validate_dimensions(width, height)?;
        let expected = rgba8_len(width, height)?;
        if data.len() != expected {
            return Err(EquicubeError::validation(format!(
                "source pixel data is {} bytes, expected {expected} for {width}x{height} RGBA8",
                data.len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Take ownership of an [`image::RgbaImage`] without copying.
    pub fn from_rgba_image(img: image::RgbaImage) -> EquicubeResult<Self> {
        let (width, height) = img.dimensions();
        Self::from_rgba8(width, height, img.into_raw())
    }

    /// Convert any decoded image to RGBA8.
    pub fn from_dynamic_image(img: image::DynamicImage) -> EquicubeResult<Self> {
        validate_dimensions(img.width(), img.height())?;
        Self::from_rgba_image(img.into_rgba8())
    }

    /// Width in pixels (always `2 * height`).
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA8 bytes, top row first.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// RGBA8 value at `(x, y)`, top row first. `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(read_px(&self.data, self.width, x, y))
    }

    /// Convert to the projection frame by reversing the row order.
    ///
    /// The projection math works in a frame whose `y` axis grows downward, so its latitude `+π/2`
    /// maps to row 0 of the projection frame. Reversing rows here makes that row the
    /// panorama's bottom row, which keeps every face upright. Rows are reversed here and nowhere
    /// else.
    pub fn into_projection_frame(self) -> ProjectionSource {
        let stride = self.width as usize * 4;
        let mut data = self.data;
        let rows = self.height as usize;
        for top in 0..rows / 2 {
            let bottom = rows - 1 - top;
            let (head, tail) = data.split_at_mut(bottom * stride);
            head[top * stride..(top + 1) * stride].swap_with_slice(&mut tail[..stride]);
        }
        ProjectionSource {
            width: self.width,
            height: self.height,
            data,
        }
    }
}

/// Equirectangular pixels in the projection frame (rows reversed relative to [`SourceImage`]).
///
/// Produced only by [`SourceImage::into_projection_frame`]. Shared read-only by all face tasks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectionSource {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) data: Vec<u8>,
}

impl ProjectionSource {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// RGBA8 value at `(x, y)` in projection-frame rows. Callers guarantee bounds.
    #[inline]
    pub(crate) fn px(&self, x: u32, y: u32) -> [u8; 4] {
        read_px(&self.data, self.width, x, y)
    }
}

pub(crate) fn validate_dimensions(width: u32, height: u32) -> EquicubeResult<()> {
    if height == 0 || u64::from(width) != 2 * u64::from(height) {
        return Err(EquicubeError::InvalidAspectRatio { width, height });
    }
    Ok(())
}

pub(crate) fn rgba8_len(width: u32, height: u32) -> EquicubeResult<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .ok_or_else(|| EquicubeError::validation(format!("{width}x{height} RGBA8 overflows usize")))
}

#[inline]
fn read_px(data: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = (y as usize * width as usize + x as usize) * 4;
    [data[i], data[i + 1], data[i + 2], data[i + 3]]
}

#[cfg(test)]
#[path = "../../tests/unit/source/buffer.rs"]
mod tests;
