//! Direction-aligned non-maximum suppression of the gradient magnitude.
//!
//! For each interior pixel the direction angle picks one of four neighbor
//! pairs (bucket boundaries at 22.5, 67.5, 112.5 and 157.5 degrees). The
//! pixel keeps its magnitude, truncated to an 8-bit integer, only when it is
//! at least as large as both neighbors; everything else, including the
//! 1-pixel border, is zeroed.
//!
//! The comparison samples the two nearest grid neighbors without
//! interpolating along the true gradient angle, and ties survive on both
//! sides, so plateau ridges stay more than one pixel wide.
use crate::edges::grad::GradientField;
use crate::image::{ImageU8, ImageView, ImageViewMut};

/// Thin a gradient field to ridge pixels.
///
/// Magnitudes above 255 saturate to 255 in the output grid.
pub fn suppress_nonmaxima(field: &GradientField) -> ImageU8 {
    assert_eq!(
        field.magnitude.w, field.direction.w,
        "field grids must share dimensions"
    );
    assert_eq!(
        field.magnitude.h, field.direction.h,
        "field grids must share dimensions"
    );

    let w = field.magnitude.w;
    let h = field.magnitude.h;
    let mut out = ImageU8::new(w, h);
    if w < 3 || h < 3 {
        return out;
    }

    for y in 1..h - 1 {
        let mag_prev = field.magnitude.row(y - 1);
        let mag_row = field.magnitude.row(y);
        let mag_next = field.magnitude.row(y + 1);
        let dir_row = field.direction.row(y);
        let out_row = out.row_mut(y);

        for x in 1..w - 1 {
            let mag = mag_row[x];
            let angle = dir_row[x];

            let (neighbor1, neighbor2) = if angle < 22.5 || angle >= 157.5 {
                (mag_row[x - 1], mag_row[x + 1])
            } else if angle < 67.5 {
                (mag_next[x + 1], mag_prev[x - 1])
            } else if angle < 112.5 {
                (mag_prev[x], mag_next[x])
            } else {
                (mag_prev[x + 1], mag_next[x - 1])
            };

            if mag >= neighbor1 && mag >= neighbor2 {
                out_row[x] = mag as u8;
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::ImageF32;

    fn field(w: usize, h: usize, magnitude: Vec<f32>, angle: f32) -> GradientField {
        GradientField {
            magnitude: ImageF32::from_raw(w, h, magnitude),
            direction: ImageF32::from_raw(w, h, vec![angle; w * h]),
        }
    }

    #[test]
    fn vertical_ridge_survives_only_at_its_column() {
        let mut magnitude = vec![10.0; 25];
        for y in 0..5 {
            magnitude[y * 5 + 2] = 100.0;
        }
        let out = suppress_nonmaxima(&field(5, 5, magnitude, 0.0));

        for y in 1..4 {
            for x in 1..4 {
                let expected = if x == 2 { 100 } else { 0 };
                assert_eq!(out.get(x, y), expected, "pixel ({x}, {y})");
            }
        }
        for i in [0usize, 4] {
            for j in 0..5 {
                assert_eq!(out.get(i, j), 0, "border column");
                assert_eq!(out.get(j, i), 0, "border row");
            }
        }
    }

    #[test]
    fn each_bucket_compares_its_own_neighbor_pair() {
        // (angle, first neighbor, second neighbor) relative to the center (1, 1)
        let cases = [
            (0.0, (0, 1), (2, 1)),
            (45.0, (2, 2), (0, 0)),
            (90.0, (1, 0), (1, 2)),
            (135.0, (2, 0), (0, 2)),
            (180.0, (0, 1), (2, 1)),
        ];
        for (angle, n1, n2) in cases {
            let mut beaten = ImageF32::from_raw(3, 3, vec![0.0; 9]);
            beaten.set(1, 1, 50.0);
            beaten.set(n1.0, n1.1, 60.0);
            let out = suppress_nonmaxima(&GradientField {
                magnitude: beaten,
                direction: ImageF32::from_raw(3, 3, vec![angle; 9]),
            });
            assert_eq!(out.get(1, 1), 0, "angle {angle}: bigger neighbor wins");

            let mut winning = ImageF32::from_raw(3, 3, vec![0.0; 9]);
            winning.set(1, 1, 50.0);
            winning.set(n1.0, n1.1, 50.0);
            winning.set(n2.0, n2.1, 40.0);
            let out = suppress_nonmaxima(&GradientField {
                magnitude: winning,
                direction: ImageF32::from_raw(3, 3, vec![angle; 9]),
            });
            assert_eq!(out.get(1, 1), 50, "angle {angle}: ties survive");
        }
    }

    #[test]
    fn bucket_boundaries_are_half_open() {
        // 22.5 belongs to the diagonal bucket: its pair is (2, 2)/(0, 0),
        // so a large (2, 1) horizontal neighbor must not suppress the center.
        let mut magnitude = ImageF32::from_raw(3, 3, vec![0.0; 9]);
        magnitude.set(1, 1, 50.0);
        magnitude.set(2, 1, 90.0);
        let out = suppress_nonmaxima(&GradientField {
            magnitude: magnitude.clone(),
            direction: ImageF32::from_raw(3, 3, vec![22.5; 9]),
        });
        assert_eq!(out.get(1, 1), 50);

        // 157.5 wraps back to the horizontal bucket and now sees (2, 1).
        let out = suppress_nonmaxima(&GradientField {
            magnitude,
            direction: ImageF32::from_raw(3, 3, vec![157.5; 9]),
        });
        assert_eq!(out.get(1, 1), 0);
    }

    #[test]
    fn surviving_magnitude_saturates_at_255() {
        let mut magnitude = vec![10.0; 25];
        for y in 0..5 {
            magnitude[y * 5 + 2] = 1000.5;
        }
        let out = suppress_nonmaxima(&field(5, 5, magnitude, 0.0));
        assert_eq!(out.get(2, 2), 255);
    }

    #[test]
    fn truncation_drops_the_fraction() {
        let mut magnitude = vec![1.0; 25];
        for y in 0..5 {
            magnitude[y * 5 + 2] = 99.9;
        }
        let out = suppress_nonmaxima(&field(5, 5, magnitude, 0.0));
        assert_eq!(out.get(2, 2), 99);
    }

    #[test]
    fn tiny_grids_come_back_zero() {
        for (w, h) in [(2, 5), (5, 2), (1, 1), (0, 0)] {
            let out = suppress_nonmaxima(&field(w, h, vec![9.0; w * h], 0.0));
            assert!(out.data.iter().all(|&v| v == 0));
        }
    }
}
