use super::*;

fn rows_source(width: u32, height: u32) -> SourceImage {
    // Every pixel carries its row index in the red channel.
    let mut data = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            data.extend_from_slice(&[y as u8, x as u8, 0, 255]);
        }
    }
    SourceImage::from_rgba8(width, height, data).unwrap()
}

#[test]
fn rejects_non_equirectangular_dimensions() {
    let err = SourceImage::from_rgba8(3, 2, vec![0; 3 * 2 * 4]).unwrap_err();
    assert!(matches!(
        err,
        EquicubeError::InvalidAspectRatio {
            width: 3,
            height: 2
        }
    ));

    let err = SourceImage::from_rgba8(0, 0, Vec::new()).unwrap_err();
    assert!(matches!(err, EquicubeError::InvalidAspectRatio { .. }));
}

#[test]
fn aspect_ratio_is_checked_before_length() {
    let err = SourceImage::from_rgba8(5, 5, vec![0; 3]).unwrap_err();
    assert!(matches!(err, EquicubeError::InvalidAspectRatio { .. }));
}

#[test]
fn rejects_wrong_buffer_length() {
    let err = SourceImage::from_rgba8(4, 2, vec![0; 7]).unwrap_err();
    assert!(matches!(err, EquicubeError::Validation(_)));
}

#[test]
fn pixel_reads_top_row_first() {
    let src = rows_source(8, 4);
    assert_eq!(src.pixel(3, 0), Some([0, 3, 0, 255]));
    assert_eq!(src.pixel(5, 3), Some([3, 5, 0, 255]));
    assert_eq!(src.pixel(8, 0), None);
    assert_eq!(src.pixel(0, 4), None);
}

#[test]
fn projection_frame_reverses_rows_once() {
    for height in [1u32, 2, 3, 5] {
        let width = height * 2;
        let proj = rows_source(width, height).into_projection_frame();
        for y in 0..height {
            for x in 0..width {
                let px = proj.px(x, y);
                assert_eq!(px[0] as u32, height - 1 - y);
                assert_eq!(px[1] as u32, x);
            }
        }
    }
}

#[test]
fn dynamic_image_is_converted_to_rgba8() {
    let rgb = image::RgbImage::from_pixel(4, 2, image::Rgb([10, 20, 30]));
    let src = SourceImage::from_dynamic_image(image::DynamicImage::ImageRgb8(rgb)).unwrap();
    assert_eq!(src.pixel(1, 1), Some([10, 20, 30, 255]));

    let bad = image::DynamicImage::ImageRgb8(image::RgbImage::new(4, 4));
    assert!(matches!(
        SourceImage::from_dynamic_image(bad),
        Err(EquicubeError::InvalidAspectRatio { .. })
    ));
}
