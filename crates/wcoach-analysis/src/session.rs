//! Per-run analysis session wiring the pipeline stages together.

use tracing::{debug, info};
use wcoach_models::{AnalysisReport, BoundingBox, Frame, FrameMetrics};

use crate::aggregate::aggregate_metrics;
use crate::config::AnalysisConfig;
use crate::detector::{auto_select_target, PersonDetector};
use crate::error::{AnalysisError, AnalysisResult};
use crate::metrics::extract_frame_metrics;
use crate::pointers::rank_pointers;
use crate::pose_estimator::PoseEstimator;
use crate::timeline::detect_timeline_events;
use crate::tracker::{SingleObjectTracker, TargetTracker};
use crate::wrestling_events::detect_wrestling_events;

/// How the subject to analyze is chosen on the first frame.
#[derive(Debug, Clone, Copy)]
pub enum InitialTarget {
    /// Pick the largest, most central detection automatically.
    Auto,
    /// Use an externally supplied box (clamped and size-floored before use).
    Supplied(BoundingBox),
}

/// One analysis run.
///
/// Owns the tracker state, the collaborator handles and the collected
/// frame-metrics history. Strictly sequential: frames must arrive in order,
/// one `process_frame` call each. Sessions are never shared across runs;
/// abandoning one at any frame boundary is safe.
pub struct AnalysisSession {
    config: AnalysisConfig,
    fps: f64,
    frame_width: u32,
    frame_height: u32,
    detector: Box<dyn PersonDetector>,
    pose: Box<dyn PoseEstimator>,
    tracker: TargetTracker,
    metrics: Vec<FrameMetrics>,
    frames_seen: usize,
    degraded_frames: usize,
}

impl AnalysisSession {
    /// Start a run on its first frame.
    ///
    /// Resolves the initial target (auto-selection fails hard with
    /// [`AnalysisError::NoTarget`] when nobody is detected), initializes
    /// tracking and analyzes the first frame.
    pub fn start(
        first_frame: &Frame,
        target: InitialTarget,
        mut detector: Box<dyn PersonDetector>,
        pose: Box<dyn PoseEstimator>,
        tracker: Box<dyn SingleObjectTracker>,
        config: AnalysisConfig,
        fps: f64,
    ) -> AnalysisResult<Self> {
        let initial_box = match target {
            InitialTarget::Supplied(bbox) => bbox.clamped_for_init(
                first_frame.width,
                first_frame.height,
                config.min_box_size,
            ),
            InitialTarget::Auto => {
                let detections = detector.detect(first_frame, config.detect_confidence)?;
                auto_select_target(&detections, first_frame.width, first_frame.height)
                    .ok_or(AnalysisError::NoTarget)?
                    .bbox
            }
        };

        info!(
            bbox = ?initial_box,
            fps, "[ANALYZE] starting run at frame {}", first_frame.index
        );

        let tracker = TargetTracker::new(tracker, first_frame, initial_box, &config);
        let mut session = Self {
            config,
            fps,
            frame_width: first_frame.width,
            frame_height: first_frame.height,
            detector,
            pose,
            tracker,
            metrics: Vec::new(),
            frames_seen: 0,
            degraded_frames: 0,
        };

        session.analyze_roi(first_frame, initial_box)?;
        session.frames_seen = 1;
        Ok(session)
    }

    /// Advance one frame: track, crop, estimate pose, extract metrics.
    ///
    /// Returns whether the frame produced usable landmarks. Tracking failure
    /// is a degraded-frame annotation, never an error; frames past the run
    /// cap are ignored.
    pub fn process_frame(&mut self, frame: &Frame) -> AnalysisResult<bool> {
        if self.frames_seen >= self.config.max_frames {
            return Ok(false);
        }
        self.frames_seen += 1;

        let (tracked, bbox) = self.tracker.update(frame, self.detector.as_mut())?;
        if !tracked {
            self.degraded_frames += 1;
        }

        self.analyze_roi(frame, bbox)
    }

    /// Force a re-acquisition attempt on the current frame.
    pub fn force_reacquire(&mut self, frame: &Frame) -> AnalysisResult<bool> {
        self.tracker.force_reacquire(frame, self.detector.as_mut())
    }

    /// Last known target box.
    pub fn current_box(&self) -> BoundingBox {
        self.tracker.current_box()
    }

    /// Frames that produced usable landmarks so far.
    pub fn frames_analyzed(&self) -> usize {
        self.metrics.len()
    }

    fn analyze_roi(&mut self, frame: &Frame, bbox: BoundingBox) -> AnalysisResult<bool> {
        let roi = bbox.expanded(
            self.config.roi_padding_ratio,
            self.frame_width,
            self.frame_height,
        );

        match self.pose.estimate(frame, &roi)? {
            Some(landmarks) => {
                self.metrics
                    .push(extract_frame_metrics(&landmarks, frame.timestamp));
                Ok(true)
            }
            None => {
                debug!("[ANALYZE] no pose in ROI at frame {}", frame.index);
                Ok(false)
            }
        }
    }

    /// Aggregate the run and produce the final report.
    ///
    /// Fails hard with [`AnalysisError::NoSignal`] when no frame produced
    /// usable landmarks; every downstream statistic is undefined then.
    pub fn finish(self) -> AnalysisResult<AnalysisReport> {
        if self.metrics.is_empty() {
            return Err(AnalysisError::NoSignal);
        }

        let aggregate = aggregate_metrics(&self.metrics, &self.config);
        let timeline_events = detect_timeline_events(&self.metrics, &self.config, self.fps);
        let wrestling_events = detect_wrestling_events(&self.metrics, &self.config, self.fps);
        let pointers = rank_pointers(&aggregate, &timeline_events, &wrestling_events, &self.config);

        info!(
            frames_analyzed = self.metrics.len(),
            degraded_frames = self.degraded_frames,
            timeline_events = timeline_events.len(),
            wrestling_events = wrestling_events.len(),
            pointers = pointers.len(),
            "[ANALYZE] run complete"
        );

        let frames_analyzed = self.metrics.len();
        Ok(AnalysisReport {
            pointers,
            aggregate,
            timeline_events,
            wrestling_events,
            frames_analyzed,
        })
    }
}

/// Run a full analysis over an ordered frame source.
///
/// Frames with timestamps before `start_offset` are skipped; the first
/// remaining frame seeds the session. This is the single entry point the
/// orchestration layer calls on decoded frames.
#[allow(clippy::too_many_arguments)]
pub fn run_analysis<I>(
    frames: I,
    target: InitialTarget,
    detector: Box<dyn PersonDetector>,
    pose: Box<dyn PoseEstimator>,
    tracker: Box<dyn SingleObjectTracker>,
    config: AnalysisConfig,
    fps: f64,
    start_offset: Option<f64>,
) -> AnalysisResult<AnalysisReport>
where
    I: IntoIterator<Item = Frame>,
{
    let offset = start_offset.unwrap_or(0.0);
    let mut iter = frames.into_iter().skip_while(|f| f.timestamp < offset);

    let first = iter.next().ok_or(AnalysisError::NoSignal)?;
    let mut session =
        AnalysisSession::start(&first, target, detector, pose, tracker, config, fps)?;

    for frame in iter {
        session.process_frame(&frame)?;
    }

    session.finish()
}
