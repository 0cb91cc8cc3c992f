#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod detector;
pub mod diagnostics;
pub mod error;
pub mod image;

// Stage modules – public so tools can run pieces of the pipeline directly.
pub mod blur;
pub mod compare;
pub mod config;
pub mod edges;
pub mod gray;

// --- High-level re-exports -------------------------------------------------

// Main entry points: detector + results.
pub use crate::detector::{CannyParams, EdgeDetection, EdgeDetector};

// Run summary returned alongside the edge map.
pub use crate::diagnostics::DetectionReport;

// Categorized errors from the I/O collaborators and the CLIs.
pub use crate::error::{Error, Result};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use edge_detector::prelude::*;
///
/// # fn main() -> edge_detector::Result<()> {
/// let image = load_color_image(std::path::Path::new("photo.bmp"))?;
/// let detection = EdgeDetector::new(CannyParams::default()).process(&image);
/// println!(
///     "{} edge pixels in {:.3} ms",
///     detection.report.edge_pixels, detection.report.timing.total_ms
/// );
/// # Ok(())
/// # }
/// ```
pub mod prelude {
    pub use crate::image::io::{load_color_image, save_color_image};
    pub use crate::image::{ImageRgb8, ImageU8};
    pub use crate::{CannyParams, EdgeDetection, EdgeDetector};
}
