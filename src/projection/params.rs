use std::f64::consts::{FRAC_PI_4, PI};

use crate::foundation::error::{EquicubeError, EquicubeResult};

/// Per-run projection parameters shared by all six faces.
///
/// Derived once from the source width and the overlap margin; only the face orientation differs
/// between faces.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ProjectionParams {
    /// Source width in pixels.
    pub source_width: u32,
    /// Sphere radius in source pixels, `W / 2π`.
    pub radius: f64,
    /// Extra pixels added beyond the exact 90° face.
    pub overlap_margin: f64,
    /// Half of the face extent on the tangent plane, in source pixels.
    pub half_diagonal: f64,
    /// Field of view of every face, in radians. Always `>= π/2`.
    pub field_of_view: f64,
    /// Width and height of every face, in pixels.
    pub face_size: u32,
}

impl ProjectionParams {
    /// Derive parameters from the source width and an overlap margin in pixels.
    pub fn derive(source_width: u32, overlap_margin: f64) -> EquicubeResult<Self> {
        if source_width == 0 {
            return Err(EquicubeError::validation("source width must be > 0"));
        }
        if !overlap_margin.is_finite() || overlap_margin < 0.0 {
            return Err(EquicubeError::validation(format!(
                "overlap margin must be finite and >= 0, got {overlap_margin}"
            )));
        }

        let radius = f64::from(source_width) / (2.0 * PI);
        let half_diagonal = FRAC_PI_4.tan() * radius + overlap_margin;
        let field_of_view = 2.0 * (half_diagonal / radius).atan();
        let face_size = (2.0 * half_diagonal).round().max(1.0) as u32;

        Ok(Self {
            source_width,
            radius,
            overlap_margin,
            half_diagonal,
            field_of_view,
            face_size,
        })
    }

    /// Field of view in degrees, as consumed by skybox renderers.
    pub fn field_of_view_degrees(&self) -> f64 {
        self.field_of_view.to_degrees()
    }

    /// `tan(fov / 2)`, the tangent-plane half extent of a face at unit distance.
    pub fn half_extent(&self) -> f64 {
        (self.field_of_view / 2.0).tan()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/params.rs"]
mod tests;
