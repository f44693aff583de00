use super::*;
use crate::source::buffer::SourceImage;

/// Left half red, right half blue.
fn split_source() -> ProjectionSource {
    let (w, h) = (64u32, 32u32);
    let mut data = Vec::with_capacity((w * h * 4) as usize);
    for _y in 0..h {
        for x in 0..w {
            let px = if x < w / 2 { [255, 0, 0, 255] } else { [0, 0, 255, 255] };
            data.extend_from_slice(&px);
        }
    }
    SourceImage::from_rgba8(w, h, data)
        .unwrap()
        .into_projection_frame()
}

#[test]
fn view_has_requested_size() {
    let view = render_view(&split_source(), 0.0, 0.0, 60.0, 20, 10, SampleFilter::Nearest).unwrap();
    assert_eq!((view.width, view.height), (20, 10));
    assert_eq!(view.data.len(), 20 * 10 * 4);
}

#[test]
fn yaw_selects_hemisphere() {
    let src = split_source();
    // Longitude -90° lies in the red half, +90° in the blue half.
    let west = render_view(&src, -90.0, 0.0, 30.0, 8, 8, SampleFilter::Nearest).unwrap();
    let east = render_view(&src, 90.0, 0.0, 30.0, 8, 8, SampleFilter::Nearest).unwrap();
    assert!(west.data.chunks_exact(4).all(|px| px == [255u8, 0, 0, 255].as_slice()));
    assert!(east.data.chunks_exact(4).all(|px| px == [0u8, 0, 255, 255].as_slice()));
}

#[test]
fn rejects_out_of_range_fov_and_empty_size() {
    let src = split_source();
    for fov in [0.0, 180.0, -10.0, f64::NAN] {
        assert!(matches!(
            render_view(&src, 0.0, 0.0, fov, 4, 4, SampleFilter::Bilinear),
            Err(EquicubeError::Validation(_))
        ));
    }
    assert!(matches!(
        render_view(&src, 0.0, 0.0, 90.0, 0, 4, SampleFilter::Bilinear),
        Err(EquicubeError::Validation(_))
    ));
    assert!(matches!(
        render_view(&src, f64::INFINITY, 0.0, 90.0, 4, 4, SampleFilter::Bilinear),
        Err(EquicubeError::Validation(_))
    ));
}
