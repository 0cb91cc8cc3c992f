//! Edge extraction stages: gradients, suppression, and linking.
//!
//! The three modules here form the back half of the pipeline:
//!
//! - Gradient computation (Sobel) returning signed `gx`/`gy` grids plus
//!   per-pixel magnitude and direction.
//! - Non-maximum suppression thinning the magnitude grid along the
//!   quantized gradient direction.
//! - Double-threshold hysteresis turning the suppressed grid into a binary
//!   {0, 255} edge map.
//!
//! Design goals
//! - Favor clarity and cache-friendly row access over micro-optimizations.
//! - Keep the stages as free functions over owned grids; each allocates its
//!   own output and never mutates its input.

pub mod grad;
pub mod hysteresis;
pub mod nms;

pub use grad::{magnitude_direction, sobel_gradients, GradientField, GradientPair};
pub use hysteresis::{
    link_edges, LinkMode, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD, EDGE_VALUE,
};
pub use nms::suppress_nonmaxima;
