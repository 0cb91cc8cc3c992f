//! Grayscale reduction and channel replication.
//!
//! - `rgb_to_gray`: collapse an interleaved RGB image to one luma byte per
//!   pixel using BT.601 weights in fixed-point arithmetic.
//! - `gray_to_rgb`: replicate a single-channel grid into all three channels,
//!   used when handing the binary edge map to the color encoder.
use crate::image::{ImageRgb8, ImageU8, ImageView, ImageViewMut};

/// BT.601 luma weights for red, green, blue, scaled by [`LUMA_SCALE`].
const LUMA_WEIGHTS: [u32; 3] = [299, 587, 114];
const LUMA_SCALE: u32 = 1000;

/// Collapse a color image into an 8-bit intensity grid.
///
/// The weighted sum is truncated toward zero. The weights add up to exactly
/// `LUMA_SCALE`, so a pixel with r == g == b == k reduces to exactly k.
pub fn rgb_to_gray(rgb: &ImageRgb8) -> ImageU8 {
    let mut out = ImageU8::new(rgb.w, rgb.h);
    for y in 0..rgb.h {
        let src = rgb.row_bytes(y);
        let dst = out.row_mut(y);
        for (px, dst) in src.chunks_exact(3).zip(dst.iter_mut()) {
            let acc = LUMA_WEIGHTS[0] * u32::from(px[0])
                + LUMA_WEIGHTS[1] * u32::from(px[1])
                + LUMA_WEIGHTS[2] * u32::from(px[2]);
            *dst = (acc / LUMA_SCALE) as u8;
        }
    }
    out
}

/// Replicate an intensity grid into an interleaved RGB image.
pub fn gray_to_rgb(gray: &ImageU8) -> ImageRgb8 {
    let mut out = ImageRgb8::new(gray.w, gray.h);
    for y in 0..gray.h {
        let src = gray.row(y);
        let dst = out.row_bytes_mut(y);
        for (&v, px) in src.iter().zip(dst.chunks_exact_mut(3)) {
            px.fill(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uniform(w: usize, h: usize, rgb: [u8; 3]) -> ImageRgb8 {
        let mut img = ImageRgb8::new(w, h);
        for y in 0..h {
            for x in 0..w {
                img.set_pixel(x, y, rgb);
            }
        }
        img
    }

    #[test]
    fn gray_input_reduces_to_itself() {
        for k in [0u8, 1, 37, 128, 254, 255] {
            let gray = rgb_to_gray(&uniform(4, 3, [k, k, k]));
            assert!(
                gray.data.iter().all(|&v| v == k),
                "uniform gray {k} must stay {k}"
            );
        }
    }

    #[test]
    fn channel_weights_match_bt601() {
        let red = rgb_to_gray(&uniform(2, 2, [255, 0, 0]));
        assert_eq!(red.get(0, 0), 76);
        let green = rgb_to_gray(&uniform(2, 2, [0, 255, 0]));
        assert_eq!(green.get(0, 0), 149);
        let blue = rgb_to_gray(&uniform(2, 2, [0, 0, 255]));
        assert_eq!(blue.get(0, 0), 29);
    }

    #[test]
    fn replication_copies_the_value_into_all_channels() {
        let mut gray = ImageU8::new(3, 2);
        gray.set(1, 0, 5);
        gray.set(2, 1, 200);
        let rgb = gray_to_rgb(&gray);
        assert_eq!(rgb.pixel(1, 0), [5, 5, 5]);
        assert_eq!(rgb.pixel(2, 1), [200, 200, 200]);
        assert_eq!(rgb.pixel(0, 0), [0, 0, 0]);
    }

    #[test]
    fn round_trip_preserves_the_grid() {
        let mut gray = ImageU8::new(3, 3);
        for (i, v) in gray.data.iter_mut().enumerate() {
            *v = (i * 29 % 256) as u8;
        }
        let back = rgb_to_gray(&gray_to_rgb(&gray));
        assert_eq!(back.row(1), gray.row(1));
        assert_eq!(back.data, gray.data);
    }
}
