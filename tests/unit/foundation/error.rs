use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EquicubeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        EquicubeError::InvalidAspectRatio {
            width: 3,
            height: 2
        }
        .to_string()
        .contains("invalid aspect ratio:")
    );
    assert!(
        EquicubeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    assert_eq!(EquicubeError::Cancelled.to_string(), "cancelled");
}

#[test]
fn compute_lists_every_failing_face() {
    let err = EquicubeError::Compute {
        faces: vec![FaceId::Right, FaceId::Bottom],
        message: "non-finite sample".to_string(),
    };
    let s = err.to_string();
    assert!(s.contains("compute failure on face(s) right, bottom"));
    assert!(s.contains("non-finite sample"));

    let single = EquicubeError::compute(FaceId::Top, "boom");
    assert!(single.to_string().contains("face(s) top: boom"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = EquicubeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
