//! Pose landmarks produced by the external pose estimator.

use serde::{Deserialize, Serialize};

/// Minimum visibility for a landmark to contribute to any metric.
pub const MIN_VISIBILITY: f64 = 0.5;

/// A named anatomical point in coordinates normalized to the pose ROI.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    /// Normalized x-coordinate (0.0 = left edge of the ROI)
    pub x: f64,
    /// Normalized y-coordinate (0.0 = top edge, y increases downward)
    pub y: f64,
    /// Estimator visibility confidence (0.0-1.0)
    pub visibility: f64,
}

impl Landmark {
    /// Create a new landmark.
    pub fn new(x: f64, y: f64, visibility: f64) -> Self {
        Self { x, y, visibility }
    }

    /// Position of the landmark, or `None` when it is not reliably observed.
    ///
    /// Low-visibility landmarks must propagate as absent, never as a zero
    /// coordinate, so downstream aggregates stay unbiased.
    pub fn point(&self) -> Option<(f64, f64)> {
        if self.visibility >= MIN_VISIBILITY {
            Some((self.x, self.y))
        } else {
            None
        }
    }
}

/// The fixed landmark set the metrics extractor consumes for one frame.
///
/// Each field carries its own visibility; an estimator that did not observe a
/// point at all reports it with visibility 0.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PoseLandmarks {
    pub nose: Landmark,
    pub left_shoulder: Landmark,
    pub right_shoulder: Landmark,
    pub left_wrist: Landmark,
    pub right_wrist: Landmark,
    pub left_hip: Landmark,
    pub right_hip: Landmark,
    pub left_knee: Landmark,
    pub right_knee: Landmark,
    pub left_ankle: Landmark,
    pub right_ankle: Landmark,
}

impl PoseLandmarks {
    /// Midpoint of two landmarks when both are visible.
    pub fn midpoint(a: &Landmark, b: &Landmark) -> Option<(f64, f64)> {
        let (ax, ay) = a.point()?;
        let (bx, by) = b.point()?;
        Some(((ax + bx) / 2.0, (ay + by) / 2.0))
    }

    /// Shoulder-center point when both shoulders are visible.
    pub fn shoulder_center(&self) -> Option<(f64, f64)> {
        Self::midpoint(&self.left_shoulder, &self.right_shoulder)
    }

    /// Hip-center point when both hips are visible.
    pub fn hip_center(&self) -> Option<(f64, f64)> {
        Self::midpoint(&self.left_hip, &self.right_hip)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_low_visibility_is_absent() {
        let lm = Landmark::new(0.4, 0.6, 0.3);
        assert_eq!(lm.point(), None);
    }

    #[test]
    fn test_visible_landmark_yields_point() {
        let lm = Landmark::new(0.4, 0.6, 0.9);
        assert_eq!(lm.point(), Some((0.4, 0.6)));
    }

    #[test]
    fn test_midpoint_requires_both_visible() {
        let a = Landmark::new(0.2, 0.2, 0.9);
        let b = Landmark::new(0.6, 0.4, 0.2);
        assert_eq!(PoseLandmarks::midpoint(&a, &b), None);

        let b = Landmark::new(0.6, 0.4, 0.9);
        assert_eq!(PoseLandmarks::midpoint(&a, &b), Some((0.4, 0.3)));
    }
}
