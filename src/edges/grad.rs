//! Sobel gradients with per-pixel magnitude and direction.
//!
//! - Convolves the two fixed 3×3 Sobel kernels over interior pixels; the
//!   outermost row and column of `gx`/`gy` stay zero.
//! - Magnitude is `sqrt(gx^2 + gy^2)` in f32 without clamping, so steep
//!   transitions exceed 255.
//! - Direction is `atan2(gy, gx)` in degrees folded into [0, 180] by adding
//!   180 to negative angles. 180 itself occurs when gy == 0 and gx < 0; the
//!   suppression buckets treat it like 0.
use crate::image::{ImageF32, ImageI32, ImageU8, ImageView, ImageViewMut};

type Kernel3 = [[i32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_KERNEL_Y: Kernel3 = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Raw signed Sobel responses.
#[derive(Clone, Debug)]
pub struct GradientPair {
    /// Horizontal derivative (convolution with the X kernel)
    pub gx: ImageI32,
    /// Vertical derivative (convolution with the Y kernel)
    pub gy: ImageI32,
}

/// Polar form of the gradient, one grid per component.
#[derive(Clone, Debug)]
pub struct GradientField {
    /// Euclidean magnitude per pixel, not clamped to the 8-bit range
    pub magnitude: ImageF32,
    /// Gradient angle per pixel in degrees, within [0, 180]
    pub direction: ImageF32,
}

/// Compute Sobel gradients on an intensity grid.
///
/// Grids narrower or shorter than the kernel have no interior and come back
/// all zero.
pub fn sobel_gradients(src: &ImageU8) -> GradientPair {
    let mut gx = ImageI32::new(src.w, src.h);
    let mut gy = ImageI32::new(src.w, src.h);
    if src.w >= 3 && src.h >= 3 {
        sobel_interior(src, &mut gx, &mut gy);
    }
    GradientPair { gx, gy }
}

fn sobel_row(src: &ImageU8, y: usize, out_gx: &mut [i32], out_gy: &mut [i32]) {
    let rows = [src.row(y - 1), src.row(y), src.row(y + 1)];
    for x in 1..src.w - 1 {
        let mut sum_x = 0i32;
        let mut sum_y = 0i32;
        for (ky, row) in rows.iter().enumerate() {
            let p0 = i32::from(row[x - 1]);
            let p1 = i32::from(row[x]);
            let p2 = i32::from(row[x + 1]);
            let kx = &SOBEL_KERNEL_X[ky];
            let kyv = &SOBEL_KERNEL_Y[ky];
            sum_x += p0 * kx[0] + p1 * kx[1] + p2 * kx[2];
            sum_y += p0 * kyv[0] + p1 * kyv[1] + p2 * kyv[2];
        }
        out_gx[x] = sum_x;
        out_gy[x] = sum_y;
    }
}

#[cfg(not(feature = "parallel"))]
fn sobel_interior(src: &ImageU8, gx: &mut ImageI32, gy: &mut ImageI32) {
    for y in 1..src.h - 1 {
        sobel_row(src, y, gx.row_mut(y), gy.row_mut(y));
    }
}

#[cfg(feature = "parallel")]
fn sobel_interior(src: &ImageU8, gx: &mut ImageI32, gy: &mut ImageI32) {
    use rayon::prelude::*;

    gx.data
        .par_chunks_mut(src.w)
        .zip(gy.data.par_chunks_mut(src.w))
        .enumerate()
        .skip(1)
        .take(src.h - 2)
        .for_each(|(y, (gx_row, gy_row))| sobel_row(src, y, gx_row, gy_row));
}

/// Derive the polar gradient grids from the signed Sobel responses.
pub fn magnitude_direction(grad: &GradientPair) -> GradientField {
    assert_eq!(grad.gx.w, grad.gy.w, "gradient grids must share dimensions");
    assert_eq!(grad.gx.h, grad.gy.h, "gradient grids must share dimensions");

    let w = grad.gx.w;
    let h = grad.gx.h;
    let mut magnitude = ImageF32::new(w, h);
    let mut direction = ImageF32::new(w, h);
    for (y, (mag_row, dir_row)) in magnitude.rows_mut().zip(direction.rows_mut()).enumerate() {
        let gx_row = grad.gx.row(y);
        let gy_row = grad.gy.row(y);
        for x in 0..w {
            let gx = gx_row[x] as f32;
            let gy = gy_row[x] as f32;
            mag_row[x] = (gx * gx + gy * gy).sqrt();
            let mut angle = gy.atan2(gx).to_degrees();
            if angle < 0.0 {
                angle += 180.0;
            }
            dir_row[x] = angle;
        }
    }
    GradientField {
        magnitude,
        direction,
    }
}
