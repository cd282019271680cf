//! Shared data models for the wrestling coach analysis core.
//!
//! Everything that crosses the boundary between the analysis pipeline and the
//! surrounding orchestration layer lives here: bounding boxes and detections,
//! decoded frames, pose landmarks, per-frame and aggregate metrics, detected
//! events, and the ranked coaching pointers.

pub mod bbox;
pub mod events;
pub mod frame;
pub mod metrics;
pub mod pointer;
pub mod pose;

pub use bbox::{BoundingBox, Detection};
pub use events::{TimelineEvent, WrestlingEvent, WrestlingEventKind};
pub use frame::Frame;
pub use metrics::{AggregateMetrics, FrameMetrics, MetricKind, MetricStats, Polarity};
pub use pointer::{AnalysisReport, CoachingPointer};
pub use pose::{Landmark, PoseLandmarks};
