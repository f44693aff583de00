use super::*;
use crate::source::buffer::SourceImage;

/// Columns get red = 0, 100, 200, 50, 150, ...; rows are identical.
fn column_ramp(width: u32) -> ProjectionSource {
    let height = width / 2;
    let mut data = Vec::new();
    for _ in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[((x * 100) % 250) as u8, 0, 0, 255]);
        }
    }
    SourceImage::from_rgba8(width, height, data)
        .unwrap()
        .into_projection_frame()
}

/// Projection-frame row `y` gets green = 40 * y.
fn row_ramp(height: u32) -> ProjectionSource {
    let width = height * 2;
    let mut data = Vec::new();
    for y in (0..height).rev() {
        for _ in 0..width {
            data.extend_from_slice(&[0, (40 * y) as u8, 0, 255]);
        }
    }
    SourceImage::from_rgba8(width, height, data)
        .unwrap()
        .into_projection_frame()
}

#[test]
fn integer_coordinates_hit_pixel_centers() {
    let src = column_ramp(4);
    for filter in [SampleFilter::Nearest, SampleFilter::Bilinear] {
        assert_eq!(src.sample(0.0, 0.0, filter)[0], 0);
        assert_eq!(src.sample(1.0, 0.0, filter)[0], 100);
        assert_eq!(src.sample(2.0, 1.0, filter)[0], 200);
    }
}

#[test]
fn bilinear_blends_horizontal_neighbours() {
    let src = column_ramp(4);
    assert_eq!(src.sample(0.5, 0.0, SampleFilter::Bilinear)[0], 50);
    assert_eq!(src.sample(1.25, 0.0, SampleFilter::Bilinear)[0], 125);
}

#[test]
fn longitude_wraps_without_a_seam() {
    let src = column_ramp(4);
    // Column 3 is 50, column 0 is 0: halfway across the wrap boundary is 25.
    let inside = src.sample(3.5, 0.0, SampleFilter::Bilinear);
    let outside = src.sample(-0.5, 0.0, SampleFilter::Bilinear);
    assert_eq!(inside, outside);
    assert_eq!(inside[0], 25);

    // Just past `W` continues from column 0.
    assert_eq!(
        src.sample(4.1, 0.0, SampleFilter::Bilinear),
        src.sample(0.1, 0.0, SampleFilter::Bilinear)
    );

    assert_eq!(
        src.sample(4.0, 0.0, SampleFilter::Nearest),
        src.sample(0.0, 0.0, SampleFilter::Nearest)
    );
    assert_eq!(src.sample(3.6, 0.0, SampleFilter::Nearest)[0], 0);
}

#[test]
fn latitude_clamps_at_first_and_last_rows() {
    let src = row_ramp(4);
    for filter in [SampleFilter::Nearest, SampleFilter::Bilinear] {
        assert_eq!(src.sample(0.0, -3.0, filter)[1], 0);
        assert_eq!(src.sample(0.0, 3.0, filter)[1], 120);
        assert_eq!(src.sample(0.0, 7.5, filter)[1], 120);
    }
    assert_eq!(src.sample(2.0, 1.5, SampleFilter::Bilinear)[1], 60);
}

#[test]
fn filter_parses_from_str() {
    assert_eq!("Nearest".parse::<SampleFilter>(), Ok(SampleFilter::Nearest));
    assert_eq!(" bilinear ".parse::<SampleFilter>(), Ok(SampleFilter::Bilinear));
    assert!("bicubic".parse::<SampleFilter>().is_err());
    assert_eq!(SampleFilter::default(), SampleFilter::Bilinear);
}
