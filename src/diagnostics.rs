//! Serializable run diagnostics: per-stage timings and a summary report.
use crate::edges::LinkMode;
use serde::{Deserialize, Serialize};

/// Timing entry describing a single stage of the pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one detector run.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// Summary of a detector run, written by the CLI when `--json` is given.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    /// Input image width in pixels
    pub width: usize,
    /// Input image height in pixels
    pub height: usize,
    /// Weak-edge cutoff the run used
    pub low_threshold: u8,
    /// Strong-edge cutoff the run used
    pub high_threshold: u8,
    /// Linking rule the run used
    pub link_mode: LinkMode,
    /// Number of pixels classified as edges
    pub edge_pixels: usize,
    /// Wall-clock cost per stage
    pub timing: TimingBreakdown,
}
