use super::*;

#[test]
fn defaults_match_documented_values() {
    let cfg = CubemapConfig::default();
    assert_eq!(cfg.overlap_margin, 1.0);
    assert_eq!(cfg.workers, None);
    assert_eq!(cfg.filter, SampleFilter::Bilinear);
    cfg.validate().unwrap();
}

#[test]
fn missing_json_fields_take_defaults() {
    let cfg = CubemapConfig::from_json_str(r#"{ "workers": 2 }"#).unwrap();
    assert_eq!(cfg.overlap_margin, DEFAULT_OVERLAP_MARGIN);
    assert_eq!(cfg.workers, Some(2));

    let cfg = CubemapConfig::from_json_str(r#"{ "overlap_margin": 0, "filter": "nearest" }"#)
        .unwrap();
    assert_eq!(cfg.overlap_margin, 0.0);
    assert_eq!(cfg.filter, SampleFilter::Nearest);
}

#[test]
fn rejects_bad_json_and_bad_values() {
    assert!(matches!(
        CubemapConfig::from_json_str(r#"{ "overlap": 1 }"#),
        Err(EquicubeError::Serde(_))
    ));
    assert!(matches!(
        CubemapConfig::from_json_str(r#"{ "overlap_margin": -1 }"#),
        Err(EquicubeError::Validation(_))
    ));
    assert!(matches!(
        CubemapConfig::from_json_str(r#"{ "workers": 0 }"#),
        Err(EquicubeError::Validation(_))
    ));
}

#[test]
fn worker_count_is_capped_at_six() {
    let mut cfg = CubemapConfig {
        workers: Some(64),
        ..CubemapConfig::default()
    };
    assert_eq!(cfg.worker_count(), MAX_FACE_WORKERS);
    cfg.workers = Some(3);
    assert_eq!(cfg.worker_count(), 3);
    cfg.workers = None;
    assert!((1..=MAX_FACE_WORKERS).contains(&cfg.worker_count()));
}

#[test]
fn missing_file_is_reported_with_path() {
    let err = CubemapConfig::from_path("target/equicube-missing-config.json").unwrap_err();
    assert!(err.to_string().contains("equicube-missing-config.json"));
}
