use std::panic::{AssertUnwindSafe, catch_unwind};
use std::time::{Duration, Instant};

use rayon::prelude::*;

use crate::config::CubemapConfig;
use crate::foundation::cancel::{CancelToken, StopSignal};
use crate::foundation::error::{EquicubeError, EquicubeResult};
use crate::projection::orientation::FaceId;
use crate::projection::params::ProjectionParams;
use crate::render::cubemap::Cubemap;
use crate::render::face::{FaceFault, FaceImage, FaceJob, FaceRenderer, GnomonicRenderer};
use crate::source::buffer::{ProjectionSource, SourceImage};

/// Diagnostics for one conversion. Not part of the functional result.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CubemapStats {
    /// Worker threads in the pool.
    pub workers: usize,
    /// Wall-clock time from dispatch to join.
    pub elapsed: Duration,
}

/// Convert an equirectangular panorama into six cube faces.
///
/// Uses the built-in gnomonic renderer with `config.filter` and no external cancellation. See
/// [`process_image_with`] for the full contract.
pub fn process_image(source: SourceImage, config: &CubemapConfig) -> EquicubeResult<Cubemap> {
    process_image_with(
        source,
        config,
        &CancelToken::new(),
        &GnomonicRenderer::new(config.filter),
    )
}

/// Convert an equirectangular panorama into six cube faces with an explicit cancellation token
/// and face renderer.
///
/// Steps:
/// 1. validate `config` and derive [`ProjectionParams`] once;
/// 2. move the source into the projection frame (the one-time row reversal);
/// 3. render the six faces on a pool of `config.worker_count()` threads;
/// 4. assemble the faces in canonical order.
///
/// All or nothing: either all six faces are returned, or exactly one error. The first failing face
/// stops the others at their next row; cancellation does the same and yields
/// [`EquicubeError::Cancelled`].
#[tracing::instrument(
    skip_all,
    fields(width = source.width(), height = source.height(), overlap = config.overlap_margin)
)]
pub fn process_image_with<R: FaceRenderer>(
    source: SourceImage,
    config: &CubemapConfig,
    cancel: &CancelToken,
    renderer: &R,
) -> EquicubeResult<Cubemap> {
    config.validate()?;
    let params = ProjectionParams::derive(source.width(), config.overlap_margin)?;
    let source = source.into_projection_frame();
    render_cubemap(&source, &params, config.worker_count(), cancel, renderer)
}

pub(crate) fn render_cubemap<R: FaceRenderer>(
    source: &ProjectionSource,
    params: &ProjectionParams,
    workers: usize,
    cancel: &CancelToken,
    renderer: &R,
) -> EquicubeResult<Cubemap> {
    if cancel.is_cancelled() {
        return Err(EquicubeError::Cancelled);
    }

    let start = Instant::now();
    let pool = build_thread_pool(workers)?;
    tracing::info!(
        workers,
        face_size = params.face_size,
        fov_deg = params.field_of_view_degrees(),
        "rendering cube faces"
    );

    let mut slots = Vec::with_capacity(FaceId::ALL.len());
    for face in FaceId::ALL {
        let buf = FaceImage::try_alloc(params.face_size, params.face_size)
            .map_err(|fault| fault_to_error(face, fault))?;
        slots.push((face, buf));
    }

    let stop = StopSignal::new(cancel);
    let outcomes: Vec<Result<(), FaceFault>> = pool.install(|| {
        slots
            .par_iter_mut()
            .map(|(face, buf)| {
                let job = FaceJob::new(*face, params, source, &stop);
                let res = catch_unwind(AssertUnwindSafe(|| renderer.render_face(&job, buf)))
                    .unwrap_or_else(|payload| Err(FaceFault::Failed(panic_message(&*payload))));
                match &res {
                    Ok(()) => tracing::debug!(face = %face, "face rendered"),
                    Err(FaceFault::Failed(msg)) => {
                        stop.abort();
                        tracing::warn!(face = %face, error = %msg, "face failed; aborting batch");
                    }
                    Err(FaceFault::Stopped) => tracing::debug!(face = %face, "face stopped"),
                }
                res
            })
            .collect()
    });

    let elapsed = start.elapsed();
    let faces = assemble(slots, outcomes, &stop)?;
    tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "cube faces ready");

    Ok(Cubemap::new(
        faces,
        *params,
        CubemapStats { workers, elapsed },
    ))
}

/// Turn per-face outcomes into either six ordered faces or one aggregate error.
fn assemble(
    slots: Vec<(FaceId, FaceImage)>,
    outcomes: Vec<Result<(), FaceFault>>,
    stop: &StopSignal<'_>,
) -> EquicubeResult<[FaceImage; 6]> {
    let mut failed = Vec::new();
    let mut stopped = Vec::new();
    let mut first_message = None;
    for ((face, _), outcome) in slots.iter().zip(&outcomes) {
        match outcome {
            Ok(()) => {}
            Err(FaceFault::Failed(msg)) => {
                failed.push(*face);
                first_message.get_or_insert_with(|| msg.clone());
            }
            Err(FaceFault::Stopped) => stopped.push(*face),
        }
    }

    if let Some(message) = first_message {
        return Err(EquicubeError::Compute {
            faces: failed,
            message,
        });
    }
    if !stopped.is_empty() {
        if stop.is_cancelled() {
            tracing::warn!(stopped = stopped.len(), "cubemap run cancelled");
            return Err(EquicubeError::Cancelled);
        }
        return Err(EquicubeError::Compute {
            faces: stopped,
            message: "face stopped without a cancellation request".to_string(),
        });
    }

    let images: Vec<FaceImage> = slots.into_iter().map(|(_, img)| img).collect();
    images
        .try_into()
        .map_err(|_| EquicubeError::validation("internal error: expected exactly six faces"))
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string payload".to_string());
    format!("face renderer panicked: {detail}")
}

fn fault_to_error(face: FaceId, fault: FaceFault) -> EquicubeError {
    match fault {
        FaceFault::Failed(msg) => EquicubeError::compute(face, msg),
        FaceFault::Stopped => EquicubeError::Cancelled,
    }
}

fn build_thread_pool(workers: usize) -> EquicubeResult<rayon::ThreadPool> {
    if workers == 0 {
        return Err(EquicubeError::validation("face worker count must be >= 1"));
    }
    rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .thread_name(|i| format!("equicube-face-{i}"))
        .build()
        .map_err(|e| EquicubeError::Other(anyhow::anyhow!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/dispatch.rs"]
mod tests;
