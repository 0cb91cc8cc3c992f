use edge_detector::image::ImageRgb8;

/// Generates a single-color image.
pub fn uniform_rgb(width: usize, height: usize, rgb: [u8; 3]) -> ImageRgb8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = ImageRgb8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(x, y, rgb);
        }
    }
    img
}

/// Generates a two-tone image split at column `split`: `left` fills
/// x < split, `right` fills the rest.
pub fn vertical_step_rgb(
    width: usize,
    height: usize,
    split: usize,
    left: [u8; 3],
    right: [u8; 3],
) -> ImageRgb8 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(split <= width, "split column must lie within the image");

    let mut img = ImageRgb8::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set_pixel(x, y, if x < split { left } else { right });
        }
    }
    img
}
