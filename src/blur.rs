//! Gaussian smoothing with a fixed integer 5×5 kernel.
//!
//! The kernel approximates a sigma ≈ 1.4 Gaussian with weights summing to
//! 159. Accumulation happens in integers and the result is the floored
//! quotient, so a region of constant value k smooths to exactly k.
//!
//! Border policy: pixels within 2 of any edge keep the zero the output grid
//! was allocated with. There is no border extension, which keeps the
//! convolution branch-free but leaves a dark frame on the smoothed image.
use crate::image::{ImageU8, ImageView, ImageViewMut};

type Kernel5 = [[u32; 5]; 5];

const GAUSSIAN_KERNEL: Kernel5 = [
    [2, 4, 5, 4, 2],
    [4, 9, 12, 9, 4],
    [5, 12, 15, 12, 5],
    [4, 9, 12, 9, 4],
    [2, 4, 5, 4, 2],
];

/// Sum of all [`GAUSSIAN_KERNEL`] weights.
const GAUSSIAN_NORM: u32 = 159;

/// Smooth an intensity grid with the fixed 5×5 Gaussian kernel.
///
/// Grids narrower or shorter than the kernel have no interior and come back
/// all zero.
pub fn gaussian_blur(src: &ImageU8) -> ImageU8 {
    let mut out = ImageU8::new(src.w, src.h);
    if src.w < 5 || src.h < 5 {
        return out;
    }
    blur_interior(src, &mut out);
    out
}

fn blur_row(src: &ImageU8, y: usize, out_row: &mut [u8]) {
    let rows = [
        src.row(y - 2),
        src.row(y - 1),
        src.row(y),
        src.row(y + 1),
        src.row(y + 2),
    ];
    for x in 2..src.w - 2 {
        let mut acc = 0u32;
        for (taps, row) in GAUSSIAN_KERNEL.iter().zip(rows.iter()) {
            for (tap, &px) in taps.iter().zip(row[x - 2..=x + 2].iter()) {
                acc += tap * u32::from(px);
            }
        }
        out_row[x] = (acc / GAUSSIAN_NORM) as u8;
    }
}

#[cfg(not(feature = "parallel"))]
fn blur_interior(src: &ImageU8, out: &mut ImageU8) {
    for y in 2..src.h - 2 {
        blur_row(src, y, out.row_mut(y));
    }
}

#[cfg(feature = "parallel")]
fn blur_interior(src: &ImageU8, out: &mut ImageU8) {
    use rayon::prelude::*;

    out.data
        .par_chunks_mut(src.w)
        .enumerate()
        .skip(2)
        .take(src.h - 4)
        .for_each(|(y, out_row)| blur_row(src, y, out_row));
}
