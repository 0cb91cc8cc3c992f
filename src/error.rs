//! Error types for image I/O and the command-line tools.
//!
//! The pipeline stages themselves are total functions over well-formed grids;
//! mismatched dimensions between stage inputs are programmer errors and fail
//! fast with assertions. Everything a user can actually trigger lives here.

use std::path::PathBuf;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input image could not be opened or decoded
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The output image could not be encoded or written
    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A report could not be serialized
    #[error("failed to serialize JSON for {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// A plain filesystem operation failed
    #[error("failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Two images with different geometry were compared
    #[error("image dimensions do not match: {left_w}x{left_h} vs {right_w}x{right_h}")]
    SizeMismatch {
        left_w: usize,
        left_h: usize,
        right_w: usize,
        right_h: usize,
    },

    /// Command-line arguments could not be interpreted
    #[error("{0}")]
    Usage(String),
}
