use crate::projection::orientation::FaceId;

/// Convenience result type used across equicube.
pub type EquicubeResult<T> = Result<T, EquicubeError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum EquicubeError {
    /// Source raster is not a 2:1 equirectangular image.
    #[error("invalid aspect ratio: expected width == 2 * height, got {width}x{height}")]
    InvalidAspectRatio {
        /// Source width in pixels.
        width: u32,
        /// Source height in pixels.
        height: u32,
    },

    /// Error surfaced unchanged from the image codec.
    #[error("decode failure: {0}")]
    Decode(#[from] image::ImageError),

    /// One or more face tasks hit an unrecoverable fault. The batch produced no output.
    #[error("compute failure on face(s) {}: {message}", face_list(.faces))]
    Compute {
        /// Every face that failed, in face-index order.
        faces: Vec<FaceId>,
        /// Message of the first failure in face-index order.
        message: String,
    },

    /// The run was aborted through its [`CancelToken`](crate::CancelToken).
    #[error("cancelled")]
    Cancelled,

    /// Invalid configuration or malformed raster data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing configuration.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EquicubeError {
    /// Build a [`EquicubeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`EquicubeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`EquicubeError::Compute`] value for a single face.
    pub fn compute(face: FaceId, msg: impl Into<String>) -> Self {
        Self::Compute {
            faces: vec![face],
            message: msg.into(),
        }
    }
}

fn face_list(faces: &[FaceId]) -> String {
    faces
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
