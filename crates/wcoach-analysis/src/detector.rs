//! Person detector collaborator interface and target selection helpers.

use wcoach_models::{BoundingBox, Detection, Frame};

use crate::error::AnalysisResult;

/// Narrow interface to the external neural person detector.
///
/// Implementations run inference on the frame's pixel data; the core only
/// consumes the resulting boxes. Called both for initial target selection
/// (confidence floor 0.5) and tracker re-acquisition (floor 0.4).
pub trait PersonDetector: Send {
    /// Detect persons in a frame with at least `min_confidence` score.
    fn detect(&mut self, frame: &Frame, min_confidence: f64) -> AnalysisResult<Vec<Detection>>;
}

/// Pick the detection that best matches a reference box by IoU.
///
/// Returns `None` unless some candidate exceeds `min_iou`.
pub fn find_best_match_by_iou(
    detections: &[Detection],
    reference: &BoundingBox,
    min_iou: f64,
) -> Option<Detection> {
    let mut best: Option<Detection> = None;
    let mut best_iou = min_iou;

    for det in detections {
        let iou = det.bbox.iou(reference);
        if iou > best_iou {
            best_iou = iou;
            best = Some(*det);
        }
    }

    best
}

/// Automatically select the subject to track from a set of detections.
///
/// Heuristic: largest box weighted by closeness to frame center,
/// `score = area_norm * 0.6 + center_proximity * 0.4`. A single detection
/// short-circuits.
pub fn auto_select_target(
    detections: &[Detection],
    frame_width: u32,
    frame_height: u32,
) -> Option<Detection> {
    if detections.len() <= 1 {
        return detections.first().copied();
    }

    let frame_cx = frame_width as f64 / 2.0;
    let frame_cy = frame_height as f64 / 2.0;
    let max_area = (frame_width as f64) * (frame_height as f64);
    let max_distance = (frame_cx * frame_cx + frame_cy * frame_cy).sqrt();

    let mut best: Option<Detection> = None;
    let mut best_score = f64::NEG_INFINITY;

    for det in detections {
        let area_score = det.bbox.area() as f64 / max_area;

        let (cx, cy) = det.bbox.center();
        let distance = ((cx - frame_cx).powi(2) + (cy - frame_cy).powi(2)).sqrt();
        let proximity_score = 1.0 - distance / max_distance;

        let combined = area_score * 0.6 + proximity_score * 0.4;
        if combined > best_score {
            best_score = combined;
            best = Some(*det);
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn det(x: i32, y: i32, w: i32, h: i32) -> Detection {
        Detection::new(BoundingBox::new(x, y, w, h), 0.9)
    }

    #[test]
    fn test_best_match_requires_min_iou() {
        let reference = BoundingBox::new(100, 100, 50, 50);
        let detections = vec![det(400, 400, 50, 50)];
        assert!(find_best_match_by_iou(&detections, &reference, 0.2).is_none());
    }

    #[test]
    fn test_best_match_picks_highest_iou() {
        let reference = BoundingBox::new(100, 100, 50, 50);
        let detections = vec![det(130, 130, 50, 50), det(105, 105, 50, 50)];
        let best = find_best_match_by_iou(&detections, &reference, 0.2).unwrap();
        assert_eq!(best.bbox.x, 105);
    }

    #[test]
    fn test_auto_select_single_detection() {
        let only = det(10, 10, 30, 30);
        let selected = auto_select_target(&[only], 640, 480).unwrap();
        assert_eq!(selected.bbox, only.bbox);
    }

    #[test]
    fn test_auto_select_prefers_large_centered() {
        // Small centered box vs large centered box
        let small = det(300, 220, 40, 40);
        let large = det(220, 140, 200, 200);
        let selected = auto_select_target(&[small, large], 640, 480).unwrap();
        assert_eq!(selected.bbox, large.bbox);
    }

    #[test]
    fn test_auto_select_empty() {
        assert!(auto_select_target(&[], 640, 480).is_none());
    }
}
