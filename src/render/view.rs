use crate::foundation::error::{EquicubeError, EquicubeResult};
use crate::projection::gnomonic::FaceProjector;
use crate::projection::orientation::FaceOrientation;
use crate::render::face::{FaceFault, FaceImage, fill_rows};
use crate::source::buffer::ProjectionSource;
use crate::source::sample::SampleFilter;

/// Render one rectilinear view of the panorama with an arbitrary orientation.
///
/// `fov_deg` is the horizontal field of view and must lie in `(0°, 180°)`. The vertical field of
/// view follows from `width / height`.
#[tracing::instrument(skip(source), fields(src_w = source.width(), src_h = source.height()))]
pub fn render_view(
    source: &ProjectionSource,
    yaw_deg: f64,
    pitch_deg: f64,
    fov_deg: f64,
    width: u32,
    height: u32,
    filter: SampleFilter,
) -> EquicubeResult<FaceImage> {
    if !(fov_deg > 0.0 && fov_deg < 180.0) {
        return Err(EquicubeError::validation(format!(
            "view fov_deg must be in (0, 180), got {fov_deg}"
        )));
    }
    if !yaw_deg.is_finite() || !pitch_deg.is_finite() {
        return Err(EquicubeError::validation(format!(
            "view orientation must be finite, got yaw {yaw_deg} pitch {pitch_deg}"
        )));
    }
    if width == 0 || height == 0 {
        return Err(EquicubeError::validation(format!(
            "view size must be at least 1x1, got {width}x{height}"
        )));
    }

    let projector = FaceProjector::new(
        FaceOrientation { yaw_deg, pitch_deg },
        fov_deg.to_radians(),
        width,
        height,
        source.width(),
        source.height(),
    );
    let mut out = FaceImage::try_alloc(width, height).map_err(view_error)?;
    fill_rows(&projector, source, filter, &mut out, || false).map_err(view_error)?;
    Ok(out)
}

fn view_error(fault: FaceFault) -> EquicubeError {
    match fault {
        FaceFault::Failed(msg) => EquicubeError::Other(anyhow::anyhow!("view render failed: {msg}")),
        FaceFault::Stopped => EquicubeError::Cancelled,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/view.rs"]
mod tests;
