//! Edge detector orchestrating the five-stage Canny pipeline.
//!
//! Overview
//! - Reduces the decoded color image to an 8-bit intensity grid.
//! - Smooths it with the fixed integer 5×5 Gaussian kernel.
//! - Computes Sobel gradients and derives magnitude/direction grids.
//! - Thins the magnitude grid with direction-aligned non-maximum suppression.
//! - Applies double-threshold hysteresis to produce a binary {0, 255} map.
//!
//! Data flows strictly forward; every stage allocates its own output grid
//! and never mutates its input. The detector holds no state between runs
//! beyond its parameters, so one instance can process any number of images.
//!
//! Modules
//! - [`options`] – configuration types used by the detector and CLI.

pub mod options;

pub use options::CannyParams;

use crate::blur::gaussian_blur;
use crate::diagnostics::{DetectionReport, TimingBreakdown};
use crate::edges::{
    link_edges, magnitude_direction, sobel_gradients, suppress_nonmaxima, EDGE_VALUE,
};
use crate::gray::rgb_to_gray;
use crate::image::{ImageRgb8, ImageU8, ImageView};
use log::debug;
use std::time::Instant;

/// Binary edge map plus the diagnostics collected while producing it.
#[derive(Clone, Debug)]
pub struct EdgeDetection {
    /// Edge map with values restricted to {0, 255}
    pub edges: ImageU8,
    /// Dimensions, parameters, and per-stage timings of the run
    pub report: DetectionReport,
}

/// Stateless five-stage Canny edge detector.
pub struct EdgeDetector {
    params: CannyParams,
}

impl EdgeDetector {
    pub fn new(params: CannyParams) -> Self {
        Self { params }
    }

    /// Parameters the detector was constructed with.
    pub fn params(&self) -> &CannyParams {
        &self.params
    }

    /// Run the full pipeline over one decoded image.
    pub fn process(&self, image: &ImageRgb8) -> EdgeDetection {
        let total_start = Instant::now();
        let mut timing = TimingBreakdown::default();
        debug!("EdgeDetector::process {}x{} input", image.w, image.h);

        let stage_start = Instant::now();
        let gray = rgb_to_gray(image);
        timing.push("grayscale", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let smoothed = gaussian_blur(&gray);
        timing.push("blur", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let grad = sobel_gradients(&smoothed);
        let field = magnitude_direction(&grad);
        timing.push("gradients", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let suppressed = suppress_nonmaxima(&field);
        timing.push("nms", elapsed_ms(stage_start));

        let stage_start = Instant::now();
        let edges = link_edges(
            &suppressed,
            self.params.low_threshold,
            self.params.high_threshold,
            self.params.link_mode,
        );
        timing.push("hysteresis", elapsed_ms(stage_start));

        timing.total_ms = elapsed_ms(total_start);
        let edge_map = edges.as_slice().unwrap_or(&edges.data[..]);
        let edge_pixels = edge_map.iter().filter(|&&v| v == EDGE_VALUE).count();
        debug!(
            "EdgeDetector::process kept {} edge pixels in {:.3} ms",
            edge_pixels, timing.total_ms
        );

        let report = DetectionReport {
            width: image.w,
            height: image.h,
            low_threshold: self.params.low_threshold,
            high_threshold: self.params.high_threshold,
            link_mode: self.params.link_mode,
            edge_pixels,
            timing,
        };
        EdgeDetection { edges, report }
    }
}

#[inline]
fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}
