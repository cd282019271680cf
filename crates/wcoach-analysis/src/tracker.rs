//! Single-subject tracking with loss detection and re-acquisition.

use tracing::{debug, warn};
use wcoach_models::{BoundingBox, Frame};

use crate::config::AnalysisConfig;
use crate::detector::{find_best_match_by_iou, PersonDetector};
use crate::error::AnalysisResult;

/// Capability interface for an underlying visual tracker.
///
/// The concrete tracking algorithm (CSRT, KCF, a learned tracker) is an
/// external collaborator; re-acquisition policy lives in [`TargetTracker`]
/// and never depends on which algorithm is behind this trait.
pub trait SingleObjectTracker: Send {
    /// Start (or restart) a tracking session at `bbox`.
    fn init(&mut self, frame: &Frame, bbox: BoundingBox) -> bool;

    /// Advance one frame. Returns the tracking success flag and the current
    /// box estimate (ignored by callers when the flag is false).
    fn update(&mut self, frame: &Frame) -> (bool, BoundingBox);
}

/// Tracks one subject through a run, re-acquiring after sustained loss.
///
/// Owns the underlying tracker instance, the last known box (always the best
/// current estimate, clamped to frame bounds) and the consecutive-loss
/// counter. One instance per analysis run; never shared across runs.
pub struct TargetTracker {
    tracker: Box<dyn SingleObjectTracker>,
    last_box: BoundingBox,
    lost_frames: u32,
    max_lost_frames: u32,
    reacquire_confidence: f64,
    min_reacquire_iou: f64,
    min_box_size: i32,
}

impl TargetTracker {
    /// Initialize tracking at `initial_box` on the first frame.
    ///
    /// The box must already be validated via
    /// [`BoundingBox::clamped_for_init`]; the session entry point does this
    /// for externally supplied targets.
    pub fn new(
        mut tracker: Box<dyn SingleObjectTracker>,
        frame: &Frame,
        initial_box: BoundingBox,
        config: &AnalysisConfig,
    ) -> Self {
        let initialized = tracker.init(frame, initial_box);
        if !initialized {
            warn!("[TRACKER] underlying tracker failed to initialize at {initial_box:?}");
        }

        Self {
            tracker,
            last_box: initial_box,
            lost_frames: 0,
            max_lost_frames: config.max_lost_frames,
            reacquire_confidence: config.reacquire_confidence,
            min_reacquire_iou: config.min_reacquire_iou,
            min_box_size: config.min_box_size,
        }
    }

    /// Last known box, always valid even while tracking is lost.
    pub fn current_box(&self) -> BoundingBox {
        self.last_box
    }

    /// Consecutive frames of tracking failure.
    pub fn lost_frames(&self) -> u32 {
        self.lost_frames
    }

    /// Advance one frame.
    ///
    /// Returns `(true, box)` on a successful track or re-acquisition, and
    /// `(false, last_box)` otherwise. A false flag means "use the stale box
    /// and treat the frame as reacquiring" downstream, never an error.
    pub fn update(
        &mut self,
        frame: &Frame,
        detector: &mut dyn PersonDetector,
    ) -> AnalysisResult<(bool, BoundingBox)> {
        let (success, bbox) = self.tracker.update(frame);

        if success && bbox.w > self.min_box_size && bbox.h > self.min_box_size {
            // A box drifted fully off-frame counts as a loss, not a track.
            if let Some(clipped) = bbox.clipped_to_frame(frame.width, frame.height) {
                self.last_box = clipped;
                self.lost_frames = 0;
                return Ok((true, self.last_box));
            }
        }

        self.lost_frames += 1;
        debug!(
            lost_frames = self.lost_frames,
            "[TRACKER] update failed at frame {}", frame.index
        );

        if self.lost_frames >= self.max_lost_frames {
            if let Some(reacquired) = self.try_reacquire(frame, detector)? {
                self.tracker.init(frame, reacquired);
                self.last_box = reacquired;
                self.lost_frames = 0;
                return Ok((true, self.last_box));
            }
        }

        Ok((false, self.last_box))
    }

    /// Force a re-acquisition attempt, bypassing the lost-frame counter.
    ///
    /// Returns whether a matching detection was found and tracking restarted.
    pub fn force_reacquire(
        &mut self,
        frame: &Frame,
        detector: &mut dyn PersonDetector,
    ) -> AnalysisResult<bool> {
        if let Some(reacquired) = self.try_reacquire(frame, detector)? {
            self.tracker.init(frame, reacquired);
            self.last_box = reacquired;
            self.lost_frames = 0;
            return Ok(true);
        }
        Ok(false)
    }

    /// Run the detector at the lowered confidence floor and match candidates
    /// against the last known box by IoU.
    fn try_reacquire(
        &mut self,
        frame: &Frame,
        detector: &mut dyn PersonDetector,
    ) -> AnalysisResult<Option<BoundingBox>> {
        let detections = detector.detect(frame, self.reacquire_confidence)?;

        let matched = find_best_match_by_iou(&detections, &self.last_box, self.min_reacquire_iou)
            .and_then(|m| m.bbox.clipped_to_frame(frame.width, frame.height));
        match matched {
            Some(bbox) => {
                debug!(
                    iou_box = ?bbox,
                    "[TRACKER] re-acquired target at frame {}", frame.index
                );
                Ok(Some(bbox))
            }
            None => {
                warn!(
                    candidates = detections.len(),
                    "[TRACKER] re-acquisition found no match at frame {}", frame.index
                );
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcoach_models::Detection;

    /// Scripted tracker: succeeds until `fail_after`, then always fails.
    struct ScriptedTracker {
        fail_after: usize,
        updates: usize,
        bbox: BoundingBox,
        inits: usize,
    }

    impl ScriptedTracker {
        fn new(bbox: BoundingBox, fail_after: usize) -> Self {
            Self {
                fail_after,
                updates: 0,
                bbox,
                inits: 0,
            }
        }
    }

    impl SingleObjectTracker for ScriptedTracker {
        fn init(&mut self, _frame: &Frame, bbox: BoundingBox) -> bool {
            self.inits += 1;
            self.bbox = bbox;
            true
        }

        fn update(&mut self, _frame: &Frame) -> (bool, BoundingBox) {
            self.updates += 1;
            (self.updates <= self.fail_after, self.bbox)
        }
    }

    /// Tracker that reports success with the same box no matter the init.
    struct PinnedTracker {
        bbox: BoundingBox,
    }

    impl SingleObjectTracker for PinnedTracker {
        fn init(&mut self, _frame: &Frame, _bbox: BoundingBox) -> bool {
            true
        }

        fn update(&mut self, _frame: &Frame) -> (bool, BoundingBox) {
            (true, self.bbox)
        }
    }

    /// Detector returning a fixed detection list on every call.
    struct FixedDetector {
        detections: Vec<Detection>,
        calls: usize,
    }

    impl PersonDetector for FixedDetector {
        fn detect(
            &mut self,
            _frame: &Frame,
            _min_confidence: f64,
        ) -> AnalysisResult<Vec<Detection>> {
            self.calls += 1;
            Ok(self.detections.clone())
        }
    }

    fn frame(index: usize) -> Frame {
        Frame::bare(index, index as f64 / 30.0, 640, 480)
    }

    fn config() -> AnalysisConfig {
        AnalysisConfig::default()
    }

    #[test]
    fn test_successful_updates_reset_loss() {
        let bbox = BoundingBox::new(100, 100, 80, 160);
        let tracker = Box::new(ScriptedTracker::new(bbox, usize::MAX));
        let mut detector = FixedDetector {
            detections: vec![],
            calls: 0,
        };
        let mut target = TargetTracker::new(tracker, &frame(0), bbox, &config());

        let (ok, out) = target.update(&frame(1), &mut detector).unwrap();
        assert!(ok);
        assert_eq!(out, bbox);
        assert_eq!(target.lost_frames(), 0);
        assert_eq!(detector.calls, 0);
    }

    #[test]
    fn test_stale_box_served_while_lost_without_match() {
        let bbox = BoundingBox::new(100, 100, 80, 160);
        let tracker = Box::new(ScriptedTracker::new(bbox, 0));
        let mut detector = FixedDetector {
            detections: vec![],
            calls: 0,
        };
        let mut target = TargetTracker::new(tracker, &frame(0), bbox, &config());

        // Well past max_lost_frames: no spontaneous recovery, same stale box.
        for i in 1..40 {
            let (ok, out) = target.update(&frame(i), &mut detector).unwrap();
            assert!(!ok);
            assert_eq!(out, bbox);
        }
        assert!(detector.calls > 0);
    }

    #[test]
    fn test_off_frame_success_box_counts_as_loss() {
        let initial = BoundingBox::new(100, 100, 80, 160);
        // Reported box lies entirely past the right frame edge.
        let tracker = Box::new(PinnedTracker {
            bbox: BoundingBox::new(700, 100, 100, 100),
        });
        let mut detector = FixedDetector {
            detections: vec![],
            calls: 0,
        };
        let mut target = TargetTracker::new(tracker, &frame(0), initial, &config());

        let (ok, out) = target.update(&frame(1), &mut detector).unwrap();
        assert!(!ok);
        assert_eq!(out, initial);
        assert_eq!(target.lost_frames(), 1);
        assert!(out.w > 0 && out.h > 0);
    }

    #[test]
    fn test_overhanging_success_box_is_clipped() {
        let initial = BoundingBox::new(500, 100, 100, 160);
        let tracker = Box::new(PinnedTracker {
            bbox: BoundingBox::new(600, 100, 100, 160),
        });
        let mut detector = FixedDetector {
            detections: vec![],
            calls: 0,
        };
        let mut target = TargetTracker::new(tracker, &frame(0), initial, &config());

        let (ok, out) = target.update(&frame(1), &mut detector).unwrap();
        assert!(ok);
        assert_eq!(out, BoundingBox::new(600, 100, 40, 160));
        assert_eq!(target.current_box(), out);
    }

    #[test]
    fn test_reacquisition_resets_counter() {
        let bbox = BoundingBox::new(100, 100, 80, 160);
        let tracker = Box::new(ScriptedTracker::new(bbox, 0));
        // Overlapping detection: IoU well above the 0.2 floor.
        let mut detector = FixedDetector {
            detections: vec![Detection::new(BoundingBox::new(110, 110, 80, 160), 0.8)],
            calls: 0,
        };
        let mut target = TargetTracker::new(tracker, &frame(0), bbox, &config());

        let max = config().max_lost_frames as usize;
        for i in 1..max {
            let (ok, _) = target.update(&frame(i), &mut detector).unwrap();
            assert!(!ok);
        }

        // The frame that reaches the loss limit triggers re-acquisition.
        let (ok, out) = target.update(&frame(max), &mut detector).unwrap();
        assert!(ok);
        assert_eq!(out, BoundingBox::new(110, 110, 80, 160));
        assert_eq!(target.lost_frames(), 0);
    }

    #[test]
    fn test_reacquisition_rejects_low_iou() {
        let bbox = BoundingBox::new(100, 100, 80, 160);
        let tracker = Box::new(ScriptedTracker::new(bbox, 0));
        let mut detector = FixedDetector {
            detections: vec![Detection::new(BoundingBox::new(500, 300, 80, 160), 0.9)],
            calls: 0,
        };
        let mut target = TargetTracker::new(tracker, &frame(0), bbox, &config());

        for i in 1..40 {
            let (ok, out) = target.update(&frame(i), &mut detector).unwrap();
            assert!(!ok);
            assert_eq!(out, bbox);
        }
    }

    #[test]
    fn test_force_reacquire_bypasses_counter() {
        let bbox = BoundingBox::new(100, 100, 80, 160);
        let tracker = Box::new(ScriptedTracker::new(bbox, usize::MAX));
        let mut detector = FixedDetector {
            detections: vec![Detection::new(BoundingBox::new(120, 105, 80, 160), 0.7)],
            calls: 0,
        };
        let mut target = TargetTracker::new(tracker, &frame(0), bbox, &config());

        assert!(target.force_reacquire(&frame(1), &mut detector).unwrap());
        assert_eq!(target.current_box(), BoundingBox::new(120, 105, 80, 160));
        assert_eq!(detector.calls, 1);
    }
}
