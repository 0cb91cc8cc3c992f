//! Parameter types configuring the detector stages.
//!
//! The kernels and border policies are fixed; the only knobs are the two
//! hysteresis thresholds and the linking rule. Defaults reproduce the
//! reference behavior.

use crate::edges::{LinkMode, DEFAULT_HIGH_THRESHOLD, DEFAULT_LOW_THRESHOLD};
use serde::Deserialize;

/// Detector-wide parameters controlling the five-stage pipeline.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CannyParams {
    /// Weak-edge cutoff; suppressed magnitudes below are discarded outright.
    pub low_threshold: u8,
    /// Strong-edge cutoff; suppressed magnitudes at or above are always kept.
    pub high_threshold: u8,
    /// Weak-to-strong linking rule for the final stage.
    pub link_mode: LinkMode,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: DEFAULT_LOW_THRESHOLD,
            high_threshold: DEFAULT_HIGH_THRESHOLD,
            link_mode: LinkMode::default(),
        }
    }
}
