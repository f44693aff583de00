use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{EquicubeError, EquicubeResult};
use crate::source::sample::SampleFilter;

/// Overlap margin used when none is configured, in pixels.
pub const DEFAULT_OVERLAP_MARGIN: f64 = 1.0;

/// There are never more than six independent units of work.
pub const MAX_FACE_WORKERS: usize = 6;

/// Per-call conversion settings.
///
/// Passed explicitly into every conversion; nothing is read from process-wide state. Missing JSON
/// fields take their default values.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CubemapConfig {
    /// Extra pixels added to each face beyond the exact 90° coverage. Must be finite and `>= 0`.
    pub overlap_margin: f64,
    /// Worker thread override. `None` uses the available hardware parallelism. Capped at six.
    pub workers: Option<usize>,
    /// Resampling filter.
    pub filter: SampleFilter,
}

impl Default for CubemapConfig {
    fn default() -> Self {
        Self {
            overlap_margin: DEFAULT_OVERLAP_MARGIN,
            workers: None,
            filter: SampleFilter::default(),
        }
    }
}

impl CubemapConfig {
    /// Parse from JSON text and validate.
    pub fn from_json_str(json: &str) -> EquicubeResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| EquicubeError::serde(format!("parse cubemap config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Read a JSON file and validate.
    pub fn from_path(path: impl AsRef<Path>) -> EquicubeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read config '{}'", path.display()))?;
        Self::from_json_str(&text)
    }

    /// Check value ranges.
    pub fn validate(&self) -> EquicubeResult<()> {
        if !self.overlap_margin.is_finite() || self.overlap_margin < 0.0 {
            return Err(EquicubeError::validation(format!(
                "overlap_margin must be finite and >= 0, got {}",
                self.overlap_margin
            )));
        }
        if let Some(n) = self.workers
            && n == 0
        {
            return Err(EquicubeError::validation(
                "cubemap config 'workers' must be >= 1 when set",
            ));
        }
        Ok(())
    }

    /// Worker pool size for a run: `min(6, workers or hardware parallelism)`.
    pub fn worker_count(&self) -> usize {
        let requested = self.workers.unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|n| n.get())
                .unwrap_or(1)
        });
        requested.clamp(1, MAX_FACE_WORKERS)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
