//! Cube face identities and their fixed viewing orientations.

/// One of the six cube faces, in canonical output order.
///
/// The discriminant is the face index used for output ordering.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum FaceId {
    /// Index 0, yaw 0°.
    Front = 0,
    /// Index 1, yaw 90°.
    Right = 1,
    /// Index 2, yaw 180°.
    Back = 2,
    /// Index 3, yaw 270°.
    Left = 3,
    /// Index 4, pitch +90°.
    Top = 4,
    /// Index 5, pitch -90°.
    Bottom = 5,
}

/// Viewing direction of a face, in degrees.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FaceOrientation {
    /// Rotation about the vertical axis. 0° looks at the panorama center, 90° turns right.
    pub yaw_deg: f64,
    /// Rotation about the horizontal axis. 90° looks straight up.
    pub pitch_deg: f64,
}

impl FaceId {
    /// All faces in canonical output order.
    pub const ALL: [FaceId; 6] = [
        FaceId::Front,
        FaceId::Right,
        FaceId::Back,
        FaceId::Left,
        FaceId::Top,
        FaceId::Bottom,
    ];

    /// Position in the canonical output order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Face for a canonical index, if in range.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Lowercase name, used in file names and logs.
    pub fn name(self) -> &'static str {
        match self {
            FaceId::Front => "front",
            FaceId::Right => "right",
            FaceId::Back => "back",
            FaceId::Left => "left",
            FaceId::Top => "top",
            FaceId::Bottom => "bottom",
        }
    }

    /// Fixed orientation of this face.
    pub fn orientation(self) -> FaceOrientation {
        let (yaw_deg, pitch_deg) = match self {
            FaceId::Front => (0.0, 0.0),
            FaceId::Right => (90.0, 0.0),
            FaceId::Back => (180.0, 0.0),
            FaceId::Left => (270.0, 0.0),
            FaceId::Top => (0.0, 90.0),
            FaceId::Bottom => (0.0, -90.0),
        };
        FaceOrientation { yaw_deg, pitch_deg }
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/projection/orientation.rs"]
mod tests;
