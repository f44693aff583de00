//! Gnomonic inverse projection: destination pixel → equirectangular source coordinate.
//!
//! Frame conventions:
//! - camera space is x right, y down, z forward;
//! - pitch rotates about the camera x axis (positive looks up), then yaw about the world y axis
//!   (positive turns right);
//! - latitude `φ = asin(y / |d|)` therefore grows downward, and source rows are addressed in the
//!   projection frame (see [`SourceImage::into_projection_frame`](crate::SourceImage::into_projection_frame)).

use std::f64::consts::{FRAC_PI_2, PI, TAU};

use crate::foundation::math::Vec3;
use crate::projection::orientation::{FaceId, FaceOrientation};
use crate::projection::params::ProjectionParams;

/// Directions shorter than this fall back to the face's forward axis.
pub(crate) const MIN_DIRECTION_LENGTH: f64 = 1e-12;

/// Continuous source coordinate in projection-frame pixels, pixel centers at integers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SourceCoord {
    /// Horizontal position, `[0, W)` before wrapping.
    pub x: f64,
    /// Vertical position, `[0, H]` before clamping.
    pub y: f64,
}

impl SourceCoord {
    /// Whether both components are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Per-view projection state, computed once per face and reused for every pixel.
#[derive(Clone, Copy, Debug)]
pub struct FaceProjector {
    out_half_w: f64,
    out_half_h: f64,
    extent_x: f64,
    extent_y: f64,
    yaw_sin: f64,
    yaw_cos: f64,
    pitch_sin: f64,
    pitch_cos: f64,
    axis: Vec3,
    src_w: f64,
    src_h: f64,
}

impl FaceProjector {
    /// Projector for an arbitrary view.
    ///
    /// `fov` is the horizontal field of view in radians; the vertical extent follows from the
    /// output aspect ratio so pixels stay square.
    pub fn new(
        orientation: FaceOrientation,
        fov: f64,
        out_width: u32,
        out_height: u32,
        source_width: u32,
        source_height: u32,
    ) -> Self {
        let out_half_w = f64::from(out_width) / 2.0;
        let out_half_h = f64::from(out_height) / 2.0;
        let extent_x = (fov / 2.0).tan();
        let extent_y = extent_x * f64::from(out_height) / f64::from(out_width);
        let (yaw_sin, yaw_cos) = orientation.yaw_deg.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = orientation.pitch_deg.to_radians().sin_cos();
        let axis = Vec3::FORWARD
            .rotate_x(pitch_sin, pitch_cos)
            .rotate_y(yaw_sin, yaw_cos);

        Self {
            out_half_w,
            out_half_h,
            extent_x,
            extent_y,
            yaw_sin,
            yaw_cos,
            pitch_sin,
            pitch_cos,
            axis,
            src_w: f64::from(source_width),
            src_h: f64::from(source_height),
        }
    }

    /// Projector for one cube face of a run.
    pub fn for_face(face: FaceId, params: &ProjectionParams, source_height: u32) -> Self {
        Self::new(
            face.orientation(),
            params.field_of_view,
            params.face_size,
            params.face_size,
            params.source_width,
            source_height,
        )
    }

    /// Source coordinate sampled by destination pixel `(px, py)`, taken at the pixel center.
    #[inline]
    pub fn project(&self, px: u32, py: u32) -> SourceCoord {
        let u = (f64::from(px) + 0.5 - self.out_half_w) / self.out_half_w * self.extent_x;
        let v = (f64::from(py) + 0.5 - self.out_half_h) / self.out_half_h * self.extent_y;
        let world = Vec3::new(u, v, 1.0)
            .rotate_x(self.pitch_sin, self.pitch_cos)
            .rotate_y(self.yaw_sin, self.yaw_cos);
        self.direction_to_source(world)
    }

    pub(crate) fn direction_to_source(&self, dir: Vec3) -> SourceCoord {
        let mut len = dir.length();
        let dir = if len < MIN_DIRECTION_LENGTH {
            len = 1.0;
            self.axis
        } else {
            dir
        };

        let mut lambda = dir.x.atan2(dir.z);
        if lambda >= PI {
            lambda -= TAU;
        }
        let phi = (dir.y / len).clamp(-1.0, 1.0).asin();

        SourceCoord {
            x: (lambda + PI) / TAU * self.src_w,
            y: (FRAC_PI_2 - phi) / PI * self.src_h,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/gnomonic.rs"]
mod tests;
