//! Detected events on the analysis timeline.

use serde::{Deserialize, Serialize};

use crate::metrics::MetricKind;

/// One sustained threshold-violation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineEvent {
    /// Start of the run in seconds
    pub timestamp: f64,
    /// Run duration in seconds (last frame minus first frame)
    pub duration: f64,
    /// Metric the run belongs to
    pub metric: MetricKind,
    /// Mean metric value across the run
    pub value: f64,
    /// Human-readable description of the violation
    pub message: String,
}

/// Semantic wrestling event classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WrestlingEventKind {
    /// Hips drop while the knees bend: changing levels
    LevelChange,
    /// Level change plus forward drive: attacking a shot
    ShotAttempt,
    /// Hips drop while the base widens without advancing: defending a shot
    SprawlDefense,
}

impl WrestlingEventKind {
    /// Display label for descriptions and logs.
    pub fn label(&self) -> &'static str {
        match self {
            WrestlingEventKind::LevelChange => "level change",
            WrestlingEventKind::ShotAttempt => "shot attempt",
            WrestlingEventKind::SprawlDefense => "sprawl defense",
        }
    }
}

/// A classified wrestling motion over a short frame window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WrestlingEvent {
    /// Event classification
    pub kind: WrestlingEventKind,
    /// Start of the contributing window in seconds
    pub start_time: f64,
    /// End of the contributing window in seconds
    pub end_time: f64,
    /// Classifier confidence (0.3-1.0; lower-confidence events are dropped)
    pub confidence: f64,
    /// Human-readable description
    pub description: String,
}
