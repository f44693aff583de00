//! Equicube converts an equirectangular panorama into the six faces of a cubemap.
//!
//! # Pipeline overview
//!
//! 1. **Load**: decode an image into a [`SourceImage`] (width must be exactly twice the height)
//! 2. **Derive**: compute [`ProjectionParams`] once per run from the source width and overlap margin
//! 3. **Project**: for every face pixel, invert the gnomonic projection to a source coordinate and
//!    resample it ([`FaceProjector`], [`SampleFilter`])
//! 4. **Dispatch**: render the six faces concurrently on a bounded worker pool and assemble them
//!    into a [`Cubemap`] in canonical order
//!
//! Design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **All or nothing**: a conversion yields six faces or exactly one [`EquicubeError`].
//! - **Deterministic**: output is bit-identical for a given source and config, whatever the
//!   worker count.
//! - **No global state**: every setting travels in an explicit [`CubemapConfig`].
//!
//! ```no_run
//! let source = equicube::load_source("pano.jpg")?;
//! let cube = equicube::process_image(source, &equicube::CubemapConfig::default())?;
//! cube.save_faces("out", "pano")?;
//! # Ok::<(), equicube::EquicubeError>(())
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod config;
mod foundation;
mod projection;
mod render;
mod source;

pub use config::{CubemapConfig, DEFAULT_OVERLAP_MARGIN, MAX_FACE_WORKERS};
pub use foundation::cancel::CancelToken;
pub use foundation::error::{EquicubeError, EquicubeResult};
pub use projection::gnomonic::{FaceProjector, SourceCoord};
pub use projection::orientation::{FaceId, FaceOrientation};
pub use projection::params::ProjectionParams;
pub use render::cubemap::{Cubemap, save_png};
pub use render::dispatch::{CubemapStats, process_image, process_image_with};
pub use render::face::{FaceFault, FaceImage, FaceJob, FaceRenderer, GnomonicRenderer};
pub use render::view::render_view;
pub use source::buffer::{ProjectionSource, SourceImage};
pub use source::decode::{decode_source, load_source};
pub use source::sample::SampleFilter;
