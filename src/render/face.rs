use crate::foundation::cancel::StopSignal;
use crate::foundation::error::{EquicubeError, EquicubeResult};
use crate::projection::gnomonic::FaceProjector;
use crate::projection::orientation::FaceId;
use crate::projection::params::ProjectionParams;
use crate::source::buffer::{ProjectionSource, rgba8_len};
use crate::source::sample::SampleFilter;

/// A rendered face (or view) as RGBA8 pixels.
///
/// Straight alpha, tightly packed, row-major, top row first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaceImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// RGBA8 bytes.
    pub data: Vec<u8>,
}

impl FaceImage {
    /// Allocate a zeroed buffer, reporting allocation failure instead of aborting.
    pub(crate) fn try_alloc(width: u32, height: u32) -> Result<Self, FaceFault> {
        let len = rgba8_len(width, height).map_err(|e| FaceFault::Failed(e.to_string()))?;
        let mut data = Vec::new();
        data.try_reserve_exact(len).map_err(|e| {
            FaceFault::Failed(format!("cannot allocate {width}x{height} face: {e}"))
        })?;
        data.resize(len, 0);
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// RGBA8 value at `(x, y)`. `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y as usize * self.width as usize + x as usize) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }

    /// Copy into an [`image::RgbaImage`].
    pub fn to_rgba_image(&self) -> EquicubeResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.data.clone()).ok_or_else(|| {
            EquicubeError::validation(format!(
                "face buffer is {} bytes, too short for {}x{}",
                self.data.len(),
                self.width,
                self.height
            ))
        })
    }
}

/// Why a face task ended without a result.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FaceFault {
    /// Unrecoverable numeric or resource fault.
    Failed(String),
    /// The run was cancelled or another face failed first.
    Stopped,
}

impl std::fmt::Display for FaceFault {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FaceFault::Failed(msg) => f.write_str(msg),
            FaceFault::Stopped => f.write_str("stopped"),
        }
    }
}

/// Everything a face task reads. Shared read-only across tasks.
pub struct FaceJob<'a> {
    /// Face being rendered.
    pub face: FaceId,
    /// Run parameters, identical for every face.
    pub params: &'a ProjectionParams,
    /// Panorama in the projection frame.
    pub source: &'a ProjectionSource,
    stop: &'a StopSignal<'a>,
}

impl<'a> FaceJob<'a> {
    pub(crate) fn new(
        face: FaceId,
        params: &'a ProjectionParams,
        source: &'a ProjectionSource,
        stop: &'a StopSignal<'a>,
    ) -> Self {
        Self {
            face,
            params,
            source,
            stop,
        }
    }

    /// Whether the task should stop at the next convenient point (cancellation or batch abort).
    pub fn should_stop(&self) -> bool {
        self.stop.should_stop()
    }
}

/// Computes the pixels of one face.
///
/// Implementations must write only into `out`, must not retain references to the job, and
/// should poll [`FaceJob::should_stop`] at least once per row. A panic inside `render_face` is
/// caught by the dispatcher and reported as a compute failure of that face.
pub trait FaceRenderer: Sync {
    /// Fill `out` (already sized `face_size × face_size`) for `job.face`.
    fn render_face(&self, job: &FaceJob<'_>, out: &mut FaceImage) -> Result<(), FaceFault>;
}

/// The production renderer: gnomonic inverse projection with the configured filter.
#[derive(Clone, Copy, Debug, Default)]
pub struct GnomonicRenderer {
    /// Resampling filter.
    pub filter: SampleFilter,
}

impl GnomonicRenderer {
    /// Renderer using `filter`.
    pub fn new(filter: SampleFilter) -> Self {
        Self { filter }
    }
}

impl FaceRenderer for GnomonicRenderer {
    fn render_face(&self, job: &FaceJob<'_>, out: &mut FaceImage) -> Result<(), FaceFault> {
        let projector = FaceProjector::for_face(job.face, job.params, job.source.height());
        fill_rows(&projector, job.source, self.filter, out, || job.should_stop())
    }
}

/// Project and sample every pixel of `out`, polling `should_stop` before each row.
pub(crate) fn fill_rows(
    projector: &FaceProjector,
    source: &ProjectionSource,
    filter: SampleFilter,
    out: &mut FaceImage,
    should_stop: impl Fn() -> bool,
) -> Result<(), FaceFault> {
    let stride = out.width as usize * 4;
    for (py, row) in out.data.chunks_exact_mut(stride).enumerate() {
        if should_stop() {
            return Err(FaceFault::Stopped);
        }
        let py = py as u32;
        for (px, dst) in row.chunks_exact_mut(4).enumerate() {
            let px = px as u32;
            let at = projector.project(px, py);
            if !at.is_finite() {
                return Err(FaceFault::Failed(format!(
                    "non-finite source coordinate ({}, {}) at pixel ({px}, {py})",
                    at.x, at.y
                )));
            }
            dst.copy_from_slice(&source.sample(at.x, at.y, filter));
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/face.rs"]
mod tests;
