//! Pixel-identity similarity between two decoded color images.

use crate::error::{Error, Result};
use crate::image::ImageRgb8;

/// Percentage of pixel positions whose RGB triples match exactly.
///
/// Returns [`Error::SizeMismatch`] when the two images disagree on
/// either dimension. Images with no pixels compare as fully similar.
pub fn similarity(left: &ImageRgb8, right: &ImageRgb8) -> Result<f64> {
    if left.w != right.w || left.h != right.h {
        return Err(Error::SizeMismatch {
            left_w: left.w,
            left_h: left.h,
            right_w: right.w,
            right_h: right.h,
        });
    }
    let total = left.w * left.h;
    if total == 0 {
        return Ok(100.0);
    }

    let mut matching = 0usize;
    for y in 0..left.h {
        for x in 0..left.w {
            if left.pixel(x, y) == right.pixel(x, y) {
                matching += 1;
            }
        }
    }
    Ok(matching as f64 / total as f64 * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(w: usize, h: usize, rgb: [u8; 3]) -> ImageRgb8 {
        let mut img = ImageRgb8::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set_pixel(x, y, rgb);
            }
        }
        img
    }

    #[test]
    fn identical_images_are_fully_similar() {
        let a = filled(8, 6, [10, 20, 30]);
        let b = a.clone();
        assert_eq!(similarity(&a, &b).unwrap(), 100.0);
    }

    #[test]
    fn single_pixel_difference_lowers_the_score() {
        let a = filled(10, 10, [0, 0, 0]);
        let mut b = a.clone();
        b.set_pixel(3, 4, [0, 0, 1]);
        let score = similarity(&a, &b).unwrap();
        assert!((score - 99.0).abs() < 1e-9);
    }

    #[test]
    fn disjoint_images_score_zero() {
        let a = filled(4, 4, [0, 0, 0]);
        let b = filled(4, 4, [255, 255, 255]);
        assert_eq!(similarity(&a, &b).unwrap(), 0.0);
    }

    #[test]
    fn mismatched_dimensions_are_rejected() {
        let a = ImageRgb8::new(4, 4);
        let b = ImageRgb8::new(4, 5);
        assert!(matches!(
            similarity(&a, &b),
            Err(Error::SizeMismatch { .. })
        ));
    }

    #[test]
    fn empty_images_compare_as_similar() {
        let a = ImageRgb8::new(0, 0);
        let b = ImageRgb8::new(0, 0);
        assert_eq!(similarity(&a, &b).unwrap(), 100.0);
    }
}
