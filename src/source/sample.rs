use crate::foundation::math::{lerp, round_to_u8, wrap};
use crate::source::buffer::ProjectionSource;

/// Resampling filter used when reading the panorama.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SampleFilter {
    /// Closest source pixel. Blocky, but never mixes colors.
    Nearest,
    /// Weighted average of the four closest pixels.
    #[default]
    Bilinear,
}

impl std::str::FromStr for SampleFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nearest" => Ok(Self::Nearest),
            "bilinear" => Ok(Self::Bilinear),
            other => Err(format!("unknown sample filter '{other}'")),
        }
    }
}

impl ProjectionSource {
    /// Sample at continuous pixel coordinates, pixel centers at integers.
    ///
    /// `sx` wraps modulo the width (longitude is cyclic); `sy` clamps to `[0, height - 1]`.
    /// Both must be finite.
    pub fn sample(&self, sx: f64, sy: f64, filter: SampleFilter) -> [u8; 4] {
        let sx = wrap(sx, f64::from(self.width));
        let sy = sy.clamp(0.0, f64::from(self.height - 1));
        match filter {
            SampleFilter::Nearest => self.sample_nearest(sx, sy),
            SampleFilter::Bilinear => self.sample_bilinear(sx, sy),
        }
    }

    fn sample_nearest(&self, sx: f64, sy: f64) -> [u8; 4] {
        let x = (sx.round() as u32) % self.width;
        let y = sy.round() as u32;
        self.px(x, y)
    }

    fn sample_bilinear(&self, sx: f64, sy: f64) -> [u8; 4] {
        let x0f = sx.floor();
        let y0f = sy.floor();
        let fx = sx - x0f;
        let fy = sy - y0f;

        let x0 = (x0f as u32).min(self.width - 1);
        let x1 = (x0 + 1) % self.width;
        let y0 = (y0f as u32).min(self.height - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let p00 = self.px(x0, y0);
        let p10 = self.px(x1, y0);
        let p01 = self.px(x0, y1);
        let p11 = self.px(x1, y1);

        let mut out = [0u8; 4];
        for c in 0..4 {
            let top = lerp(f64::from(p00[c]), f64::from(p10[c]), fx);
            let bottom = lerp(f64::from(p01[c]), f64::from(p11[c]), fx);
            out[c] = round_to_u8(lerp(top, bottom, fy));
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/source/sample.rs"]
mod tests;
