//! Double-threshold classification and weak-edge linking.
//!
//! Pixels at or above the high threshold are strong and always kept. Pixels
//! between the two thresholds are weak and survive only through a strong
//! pixel. Everything below the low threshold is dropped. Output values are
//! restricted to {0, 255}.
//!
//! Two linking rules exist:
//!
//! - [`LinkMode::SingleHop`] promotes a weak pixel when one of its eight
//!   immediate neighbors is strong in the suppressed input grid. Chains of
//!   weak pixels do not propagate. This is the default and the compatibility
//!   behavior.
//! - [`LinkMode::Iterative`] flood-fills from every strong pixel through
//!   8-connected weak pixels until the edge set settles. Its result is a
//!   superset of the single-hop edge set.
//!
//! Neighbor scans use true row/column bounds, so a weak pixel in the first
//! column never sees the last pixel of the previous row.
use crate::image::{ImageU8, ImageView, ImageViewMut};
use serde::{Deserialize, Serialize};

/// Output value of a kept edge pixel.
pub const EDGE_VALUE: u8 = 255;

/// Default weak-edge cutoff.
pub const DEFAULT_LOW_THRESHOLD: u8 = 10;
/// Default strong-edge cutoff.
pub const DEFAULT_HIGH_THRESHOLD: u8 = 75;

/// Weak-to-strong linking rule applied by [`link_edges`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LinkMode {
    /// One hop from a weak pixel to a strong neighbor, no chaining.
    #[default]
    SingleHop,
    /// Full connected-component propagation from strong pixels.
    Iterative,
}

/// Classify a suppressed-magnitude grid into a binary edge map.
///
/// `low` must be strictly below `high`; violating that is a caller bug.
pub fn link_edges(suppressed: &ImageU8, low: u8, high: u8, mode: LinkMode) -> ImageU8 {
    assert!(low < high, "low threshold must be below high threshold");
    match mode {
        LinkMode::SingleHop => link_single_hop(suppressed, low, high),
        LinkMode::Iterative => link_iterative(suppressed, low, high),
    }
}

fn link_single_hop(suppressed: &ImageU8, low: u8, high: u8) -> ImageU8 {
    let w = suppressed.w;
    let h = suppressed.h;
    let mut out = ImageU8::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    for y in 0..h {
        let src_row = suppressed.row(y);
        let out_row = out.row_mut(y);
        for x in 0..w {
            let v = src_row[x];
            if v >= high || (v >= low && has_strong_neighbor(suppressed, x, y, high)) {
                out_row[x] = EDGE_VALUE;
            }
        }
    }
    out
}

/// Scan the clamped 3×3 window around (x, y) for a value >= `high`.
///
/// Callers only ask about weak pixels, so the window needs no
/// self-exclusion: the center itself can never be strong here.
fn has_strong_neighbor(suppressed: &ImageU8, x: usize, y: usize, high: u8) -> bool {
    let y0 = y.saturating_sub(1);
    let y1 = (y + 1).min(suppressed.h - 1);
    let x0 = x.saturating_sub(1);
    let x1 = (x + 1).min(suppressed.w - 1);
    for ny in y0..=y1 {
        let row = suppressed.row(ny);
        for nx in x0..=x1 {
            if row[nx] >= high {
                return true;
            }
        }
    }
    false
}

fn link_iterative(suppressed: &ImageU8, low: u8, high: u8) -> ImageU8 {
    let w = suppressed.w;
    let h = suppressed.h;
    let mut out = ImageU8::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }

    let mut stack: Vec<(usize, usize)> = Vec::new();
    for y in 0..h {
        let src_row = suppressed.row(y);
        for x in 0..w {
            if src_row[x] < high || out.get(x, y) != 0 {
                continue;
            }
            out.set(x, y, EDGE_VALUE);
            stack.push((x, y));
            while let Some((cx, cy)) = stack.pop() {
                let y0 = cy.saturating_sub(1);
                let y1 = (cy + 1).min(h - 1);
                let x0 = cx.saturating_sub(1);
                let x1 = (cx + 1).min(w - 1);
                for ny in y0..=y1 {
                    for nx in x0..=x1 {
                        if out.get(nx, ny) == 0 && suppressed.get(nx, ny) >= low {
                            out.set(nx, ny, EDGE_VALUE);
                            stack.push((nx, ny));
                        }
                    }
                }
            }
        }
    }
    out
}
