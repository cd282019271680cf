//! Per-frame and aggregate biomechanical metrics.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Scalar metrics derived from one frame's pose landmarks.
///
/// Every field except the timestamp is optional: a metric is absent whenever
/// one of its required landmarks was not reliably visible. Absent values are
/// skipped during aggregation, never zero-filled.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FrameMetrics {
    /// Frame timestamp in seconds
    pub timestamp: f64,

    /// Left knee angle in degrees (hip-knee-ankle)
    pub knee_angle_left: Option<f64>,
    /// Right knee angle in degrees
    pub knee_angle_right: Option<f64>,
    /// Average of the visible knee angles
    pub knee_angle: Option<f64>,
    /// Knee angle of the lead leg (ankle higher on screen)
    pub lead_knee_angle: Option<f64>,
    /// Knee angle of the rear leg
    pub rear_knee_angle: Option<f64>,

    /// Horizontal ankle-to-ankle distance (normalized units)
    pub stance_width: Option<f64>,
    /// Mean wrist y minus mean shoulder y (positive = hands below shoulders)
    pub hands_drop: Option<f64>,
    /// Torso angle in degrees from vertical (0 = upright)
    pub torso_angle: Option<f64>,
    /// (hip_y - shoulder_y) / (1 - shoulder_y + eps)
    pub hip_height_ratio: Option<f64>,

    /// Left wrist horizontal distance from shoulder center
    pub elbow_flare_left: Option<f64>,
    /// Right wrist horizontal distance from shoulder center
    pub elbow_flare_right: Option<f64>,
    /// Average flare across the visible sides
    pub elbow_flare: Option<f64>,

    /// Nose x minus hip-center x
    pub head_offset_x: Option<f64>,
    /// Hip-center y minus nose y (positive = head above hips)
    pub head_height: Option<f64>,
    /// Mean wrist distance from the shoulder center
    pub wrist_reach: Option<f64>,

    /// Left ankle x-position
    pub ankle_left_x: Option<f64>,
    /// Right ankle x-position
    pub ankle_right_x: Option<f64>,
    /// Midpoint of the ankle x-positions
    pub ankle_center_x: Option<f64>,
    /// Shoulder-center y-position
    pub shoulder_center_y: Option<f64>,
    /// Hip-center y-position
    pub hip_center_y: Option<f64>,
}

/// Named metric series the aggregator and detectors operate on.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    KneeAngle,
    LeadKneeAngle,
    RearKneeAngle,
    StanceWidth,
    HandsDrop,
    TorsoAngle,
    HipHeightRatio,
    ElbowFlare,
    HeadOffsetX,
    HeadHeight,
    WristReach,
    AnkleCenterX,
    ShoulderCenterY,
    HipCenterY,
}

impl MetricKind {
    /// All aggregated metric series.
    pub const ALL: [MetricKind; 14] = [
        MetricKind::KneeAngle,
        MetricKind::LeadKneeAngle,
        MetricKind::RearKneeAngle,
        MetricKind::StanceWidth,
        MetricKind::HandsDrop,
        MetricKind::TorsoAngle,
        MetricKind::HipHeightRatio,
        MetricKind::ElbowFlare,
        MetricKind::HeadOffsetX,
        MetricKind::HeadHeight,
        MetricKind::WristReach,
        MetricKind::AnkleCenterX,
        MetricKind::ShoulderCenterY,
        MetricKind::HipCenterY,
    ];

    /// Stable wire name, matching the serde representation.
    pub fn name(&self) -> &'static str {
        match self {
            MetricKind::KneeAngle => "knee_angle",
            MetricKind::LeadKneeAngle => "lead_knee_angle",
            MetricKind::RearKneeAngle => "rear_knee_angle",
            MetricKind::StanceWidth => "stance_width",
            MetricKind::HandsDrop => "hands_drop",
            MetricKind::TorsoAngle => "torso_angle",
            MetricKind::HipHeightRatio => "hip_height_ratio",
            MetricKind::ElbowFlare => "elbow_flare",
            MetricKind::HeadOffsetX => "head_offset_x",
            MetricKind::HeadHeight => "head_height",
            MetricKind::WristReach => "wrist_reach",
            MetricKind::AnkleCenterX => "ankle_center_x",
            MetricKind::ShoulderCenterY => "shoulder_center_y",
            MetricKind::HipCenterY => "hip_center_y",
        }
    }
}

impl FrameMetrics {
    /// Value of a named metric series for this frame.
    pub fn value(&self, kind: MetricKind) -> Option<f64> {
        match kind {
            MetricKind::KneeAngle => self.knee_angle,
            MetricKind::LeadKneeAngle => self.lead_knee_angle,
            MetricKind::RearKneeAngle => self.rear_knee_angle,
            MetricKind::StanceWidth => self.stance_width,
            MetricKind::HandsDrop => self.hands_drop,
            MetricKind::TorsoAngle => self.torso_angle,
            MetricKind::HipHeightRatio => self.hip_height_ratio,
            MetricKind::ElbowFlare => self.elbow_flare,
            MetricKind::HeadOffsetX => self.head_offset_x,
            MetricKind::HeadHeight => self.head_height,
            MetricKind::WristReach => self.wrist_reach,
            MetricKind::AnkleCenterX => self.ankle_center_x,
            MetricKind::ShoulderCenterY => self.shoulder_center_y,
            MetricKind::HipCenterY => self.hip_center_y,
        }
    }
}

/// Which side of a threshold counts as a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Polarity {
    /// Values above the threshold are bad
    Above,
    /// Values below the threshold are bad
    Below,
}

/// Summary statistics for one metric series over a run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MetricStats {
    /// Mean of the present samples, `None` when the series was empty
    pub avg: Option<f64>,
    /// Minimum sample
    pub min: Option<f64>,
    /// Maximum sample
    pub max: Option<f64>,
    /// Number of frames where the metric was present
    pub count: usize,
}

/// Run-level aggregate derived from the full frame-metrics sequence.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AggregateMetrics {
    /// Per-metric summary statistics
    pub stats: BTreeMap<MetricKind, MetricStats>,
    /// Percentage of present frames violating the metric's threshold,
    /// only for metrics with a defined threshold
    pub violation_pct: BTreeMap<MetricKind, f64>,
    /// Variance of the knee-angle series (0 with fewer than two samples)
    pub knee_angle_variance: f64,
    /// Variance of the stance-width series
    pub stance_width_variance: f64,
    /// Ankle-center-x variance stayed below the low-motion threshold
    pub low_lateral_motion: bool,
    /// Number of frames with any usable landmarks
    pub frames_analyzed: usize,
}

impl AggregateMetrics {
    /// Stats for a metric, defaulting to an empty record.
    pub fn stats_for(&self, kind: MetricKind) -> MetricStats {
        self.stats.get(&kind).copied().unwrap_or_default()
    }

    /// Mean of a metric series, when any samples existed.
    pub fn avg(&self, kind: MetricKind) -> Option<f64> {
        self.stats_for(kind).avg
    }

    /// Violation percentage for a metric, 0 when none was computed.
    pub fn pct_bad(&self, kind: MetricKind) -> f64 {
        self.violation_pct.get(&kind).copied().unwrap_or(0.0)
    }
}
