//! Command-line configuration for the edge detection and comparison tools.

pub mod compare;
pub mod detect;
