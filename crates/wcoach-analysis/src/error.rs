//! Error types for analysis runs.

use thiserror::Error;

/// Result type for analysis operations.
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors that can end an analysis run.
///
/// Transient conditions stay in data instead: per-frame tracker failures are
/// reported as `success = false` with a stale box, and invisible landmarks
/// yield absent metric fields.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("no pose landmarks detected in any frame; ensure a person is visible")]
    NoSignal,

    #[error("no person detected for automatic target selection")]
    NoTarget,

    #[error("person detector failed: {0}")]
    Detector(String),

    #[error("pose estimator failed: {0}")]
    PoseEstimator(String),
}

impl AnalysisError {
    /// Create a detector failure error.
    pub fn detector(message: impl Into<String>) -> Self {
        Self::Detector(message.into())
    }

    /// Create a pose estimator failure error.
    pub fn pose_estimator(message: impl Into<String>) -> Self {
        Self::PoseEstimator(message.into())
    }
}
