#![deny(unreachable_patterns)]
//! Wrestling technique analysis core.
//!
//! This crate turns per-frame person detections and pose landmarks into a
//! tracked region of interest and a ranked list of coaching pointers:
//!
//! 1. [`tracker::TargetTracker`] follows one subject across frames, with loss
//!    counting and detection+IoU re-acquisition
//! 2. [`metrics::extract_frame_metrics`] derives scalar biomechanical metrics
//!    from each frame's landmarks
//! 3. [`aggregate::aggregate_metrics`] reduces the frame sequence to summary
//!    statistics and threshold-violation percentages
//! 4. [`timeline::detect_timeline_events`] finds sustained threshold runs
//! 5. [`wrestling_events::detect_wrestling_events`] classifies level changes,
//!    shot attempts and sprawls from sliding-window derivatives
//! 6. [`pointers::rank_pointers`] maps aggregates and events to a bounded,
//!    severity-ordered pointer list
//!
//! [`session::AnalysisSession`] wires the stages into a per-run pipeline. The
//! neural person detector, pose estimator and visual tracker are external
//! collaborators behind the [`detector::PersonDetector`],
//! [`pose_estimator::PoseEstimator`] and [`tracker::SingleObjectTracker`]
//! traits; the core performs no I/O of its own.

pub mod aggregate;
pub mod config;
pub mod detector;
pub mod error;
pub mod geometry;
pub mod metrics;
pub mod pointers;
pub mod pose_estimator;
pub mod session;
pub mod timeline;
pub mod tracker;
pub mod wrestling_events;

pub use config::AnalysisConfig;
pub use detector::{auto_select_target, find_best_match_by_iou, PersonDetector};
pub use error::{AnalysisError, AnalysisResult};
pub use pose_estimator::PoseEstimator;
pub use session::{run_analysis, AnalysisSession, InitialTarget};
pub use tracker::{SingleObjectTracker, TargetTracker};
