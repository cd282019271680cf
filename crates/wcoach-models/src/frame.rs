//! Decoded video frames handed to the analysis core.

use serde::{Deserialize, Serialize};

/// One decoded video frame.
///
/// The analysis core only reads the geometry and timing fields; the pixel
/// buffer passes through untouched to the detector, pose estimator and
/// visual tracker collaborators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Frame {
    /// Zero-based frame index within the run
    pub index: usize,
    /// Timestamp in seconds, monotonically non-decreasing across a run
    pub timestamp: f64,
    /// Frame width in pixels
    pub width: u32,
    /// Frame height in pixels
    pub height: u32,
    /// Packed BGR24 pixel data, row-major
    #[serde(skip)]
    pub data: Vec<u8>,
}

impl Frame {
    /// Create a frame without pixel data (geometry and timing only).
    ///
    /// Useful for tests and for collaborators that resolve pixels themselves.
    pub fn bare(index: usize, timestamp: f64, width: u32, height: u32) -> Self {
        Self {
            index,
            timestamp,
            width,
            height,
            data: Vec::new(),
        }
    }
}
