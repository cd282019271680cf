//! Configuration for the analysis pipeline.

use serde::{Deserialize, Serialize};
use wcoach_models::{MetricKind, Polarity};

/// Tunable parameters for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisConfig {
    // === Target selection & tracking ===
    /// Minimum detector confidence for interactive/auto target selection (default: 0.5)
    pub detect_confidence: f64,

    /// Detector confidence floor during re-acquisition (default: 0.4)
    pub reacquire_confidence: f64,

    /// Minimum IoU against the last known box to accept a re-acquired
    /// candidate (default: 0.2)
    pub min_reacquire_iou: f64,

    /// Consecutive tracker failures before attempting re-acquisition (default: 15)
    pub max_lost_frames: u32,

    /// Minimum width/height for a valid target box in pixels (default: 10)
    pub min_box_size: i32,

    /// Expand the tracked box by this ratio per side for the pose ROI (default: 0.2)
    pub roi_padding_ratio: f64,

    /// Hard cap on analyzed frames per run (default: 600, 20s at 30fps)
    pub max_frames: usize,

    // === Metric thresholds ===
    /// Knee angle above this is standing too upright (degrees, default: 145)
    pub knee_angle_threshold: f64,

    /// Stance width below this is a narrow base (normalized, default: 0.18)
    pub stance_width_threshold: f64,

    /// Hands-drop above this means hands below guard level (default: 0.10)
    pub hands_drop_threshold: f64,

    /// Torso lean from vertical above this is bent-over posture (degrees, default: 50)
    pub torso_angle_threshold: f64,

    // === Timeline events ===
    /// Minimum sustained violation duration in seconds (default: 0.5)
    pub min_event_duration: f64,

    // === Wrestling events ===
    /// Derivative window duration in seconds (default: 0.2)
    pub derivative_window: f64,

    /// Hip-drop velocity for a level change (normalized units/frame, default: 0.005)
    pub level_change_hip_drop: f64,

    /// Knee-bend velocity for a level change (degrees/frame, default: 1.5)
    pub level_change_knee_bend: f64,

    /// Forward ankle velocity for shot drive (normalized units/frame, default: 0.004)
    pub shot_drive_velocity: f64,

    /// Stance narrowing over the shot look-back window (default: 0.03)
    pub shot_stance_narrowing: f64,

    /// Hip-drop velocity for a sprawl (default: 0.004)
    pub sprawl_hip_drop: f64,

    /// Stance-widening velocity for a sprawl (normalized units/frame, default: 0.002)
    pub sprawl_widen_velocity: f64,

    /// Events below this confidence are discarded (default: 0.3)
    pub min_event_confidence: f64,

    // === Pointer ranking ===
    /// Maximum pointers returned per run (default: 10)
    pub max_pointers: usize,

    /// Ankle-center-x variance below this flags low lateral motion (default: 0.002)
    pub low_motion_variance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            detect_confidence: 0.5,
            reacquire_confidence: 0.4,
            min_reacquire_iou: 0.2,
            max_lost_frames: 15,
            min_box_size: 10,
            roi_padding_ratio: 0.2,
            max_frames: 600,
            knee_angle_threshold: 145.0,
            stance_width_threshold: 0.18,
            hands_drop_threshold: 0.10,
            torso_angle_threshold: 50.0,
            min_event_duration: 0.5,
            derivative_window: 0.2,
            level_change_hip_drop: 0.005,
            level_change_knee_bend: 1.5,
            shot_drive_velocity: 0.004,
            shot_stance_narrowing: 0.03,
            sprawl_hip_drop: 0.004,
            sprawl_widen_velocity: 0.002,
            min_event_confidence: 0.3,
            max_pointers: 10,
            low_motion_variance: 0.002,
        }
    }
}

impl AnalysisConfig {
    /// Threshold and polarity for a metric, when one is defined.
    ///
    /// Metrics without an entry report summary statistics only.
    pub fn threshold(&self, kind: MetricKind) -> Option<(f64, Polarity)> {
        match kind {
            MetricKind::KneeAngle => Some((self.knee_angle_threshold, Polarity::Above)),
            MetricKind::StanceWidth => Some((self.stance_width_threshold, Polarity::Below)),
            MetricKind::HandsDrop => Some((self.hands_drop_threshold, Polarity::Above)),
            MetricKind::TorsoAngle => Some((self.torso_angle_threshold, Polarity::Above)),
            _ => None,
        }
    }

    /// Minimum run length in frames for a sustained timeline event.
    pub fn min_event_frames(&self, fps: f64) -> usize {
        ((self.min_event_duration * fps).ceil() as usize).max(1)
    }
}
