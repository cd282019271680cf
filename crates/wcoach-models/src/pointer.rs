//! Coaching pointers and the run-level analysis report.

use serde::{Deserialize, Serialize};

use crate::events::{TimelineEvent, WrestlingEvent};
use crate::metrics::AggregateMetrics;

/// One coaching observation.
///
/// The ranking score that ordered the pointer list is internal to the ranker
/// and never part of this record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingPointer {
    /// Short imperative headline ("Get Lower")
    pub title: String,
    /// Why the rule fired, in coach language
    pub why: String,
    /// Concrete correction to practice
    pub fix: String,
    /// The numeric figures that justified firing
    pub evidence: String,
    /// Timing reference ("at 0:04" / "throughout the clip")
    pub when: String,
}

/// Everything a completed analysis run returns to the orchestration layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Severity-ordered coaching pointers, at least one, at most ten
    pub pointers: Vec<CoachingPointer>,
    /// Run-level aggregate metrics
    pub aggregate: AggregateMetrics,
    /// Sustained threshold-violation events, ascending by timestamp
    pub timeline_events: Vec<TimelineEvent>,
    /// Classified wrestling events, ascending by start time
    pub wrestling_events: Vec<WrestlingEvent>,
    /// Number of frames that produced usable landmarks
    pub frames_analyzed: usize,
}
