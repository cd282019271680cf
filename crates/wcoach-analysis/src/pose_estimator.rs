//! Pose estimator collaborator interface.

use wcoach_models::{BoundingBox, Frame, PoseLandmarks};

use crate::error::AnalysisResult;

/// Narrow interface to the external neural pose estimator.
///
/// Implementations crop the frame to `roi` (already expanded and clamped by
/// the caller) and return landmark positions normalized to that region.
/// `Ok(None)` means no pose was found in the ROI for this frame; landmarks
/// the estimator could not observe carry visibility below the floor and
/// propagate as absent metrics, never as zero coordinates.
pub trait PoseEstimator: Send {
    /// Estimate pose landmarks within a region of a frame.
    fn estimate(&mut self, frame: &Frame, roi: &BoundingBox)
        -> AnalysisResult<Option<PoseLandmarks>>;
}
