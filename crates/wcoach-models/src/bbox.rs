//! Bounding boxes and person detections.

use serde::{Deserialize, Serialize};

/// Axis-aligned bounding box in pixel coordinates.
///
/// Boxes produced by the analysis core are always clamped to frame bounds;
/// externally supplied boxes must go through [`BoundingBox::clamped_for_init`]
/// before use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Left edge x-coordinate
    pub x: i32,
    /// Top edge y-coordinate
    pub y: i32,
    /// Box width in pixels
    pub w: i32,
    /// Box height in pixels
    pub h: i32,
}

impl BoundingBox {
    /// Create a new bounding box.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Right edge x-coordinate.
    #[inline]
    pub fn x2(&self) -> i32 {
        self.x + self.w
    }

    /// Bottom edge y-coordinate.
    #[inline]
    pub fn y2(&self) -> i32 {
        self.y + self.h
    }

    /// Box area in pixels.
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Center point of the box.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            self.x as f64 + self.w as f64 / 2.0,
            self.y as f64 + self.h as f64 / 2.0,
        )
    }

    /// Compute Intersection over Union with another box.
    ///
    /// Returns 0.0 when the boxes do not overlap or the union area is zero.
    pub fn iou(&self, other: &BoundingBox) -> f64 {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.x2().min(other.x2());
        let y2 = self.y2().min(other.y2());

        let inter_w = (x2 - x1).max(0) as i64;
        let inter_h = (y2 - y1).max(0) as i64;
        let intersection = inter_w * inter_h;

        let union = self.area() + other.area() - intersection;
        if union <= 0 {
            return 0.0;
        }

        intersection as f64 / union as f64
    }

    /// Expand the box by `padding_ratio` on each side, clamped to the frame.
    ///
    /// A ratio of 0.2 adds 20% of the width/height on every edge. The result
    /// is always contained within `[0, frame_width] x [0, frame_height]`.
    pub fn expanded(&self, padding_ratio: f64, frame_width: u32, frame_height: u32) -> BoundingBox {
        let pad_w = (self.w as f64 * padding_ratio) as i32;
        let pad_h = (self.h as f64 * padding_ratio) as i32;

        let x = (self.x - pad_w).max(0);
        let y = (self.y - pad_h).max(0);
        let w = (self.w + 2 * pad_w).min(frame_width as i32 - x);
        let h = (self.h + 2 * pad_h).min(frame_height as i32 - y);

        BoundingBox { x, y, w, h }
    }

    /// Intersect the box with the frame rectangle.
    ///
    /// Returns `None` when the box lies entirely outside the frame, so a
    /// drifted-out box can never survive as a degenerate rect.
    pub fn clipped_to_frame(&self, frame_width: u32, frame_height: u32) -> Option<BoundingBox> {
        let x = self.x.max(0);
        let y = self.y.max(0);
        let w = self.x2().min(frame_width as i32) - x;
        let h = self.y2().min(frame_height as i32) - y;

        if w <= 0 || h <= 0 {
            return None;
        }
        Some(BoundingBox { x, y, w, h })
    }

    /// Clamp an externally supplied target box so it can seed a tracking run.
    ///
    /// The origin is clamped to `[0, W - min_size] x [0, H - min_size]` and
    /// the size floored at `min_size` and capped at the remaining frame.
    pub fn clamped_for_init(&self, frame_width: u32, frame_height: u32, min_size: i32) -> BoundingBox {
        let max_x = (frame_width as i32 - min_size).max(0);
        let max_y = (frame_height as i32 - min_size).max(0);

        let x = self.x.clamp(0, max_x);
        let y = self.y.clamp(0, max_y);
        let w = self.w.max(min_size).min(frame_width as i32 - x);
        let h = self.h.max(min_size).min(frame_height as i32 - y);

        BoundingBox { x, y, w, h }
    }
}

/// A person detection produced by the external detector.
///
/// Consumed by the core, never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    /// Detected bounding box
    pub bbox: BoundingBox,
    /// Detection confidence score (0.0-1.0)
    pub score: f64,
}

impl Detection {
    /// Create a new detection.
    pub fn new(bbox: BoundingBox, score: f64) -> Self {
        Self { bbox, score }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iou_identity() {
        let b = BoundingBox::new(10, 20, 50, 80);
        assert_eq!(b.iou(&b), 1.0);
    }

    #[test]
    fn test_iou_disjoint() {
        let a = BoundingBox::new(0, 0, 50, 50);
        let b = BoundingBox::new(100, 100, 50, 50);
        assert_eq!(a.iou(&b), 0.0);
    }

    #[test]
    fn test_iou_partial_overlap() {
        let a = BoundingBox::new(0, 0, 100, 100);
        let b = BoundingBox::new(50, 50, 100, 100);
        // intersection 2500, union 17500
        assert!((a.iou(&b) - 2500.0 / 17500.0).abs() < 1e-9);
    }

    #[test]
    fn test_expanded_zero_padding_is_identity() {
        let b = BoundingBox::new(10, 10, 40, 60);
        assert_eq!(b.expanded(0.0, 640, 480), b);
    }

    #[test]
    fn test_expanded_stays_within_frame() {
        let b = BoundingBox::new(0, 0, 640, 480);
        let e = b.expanded(0.2, 640, 480);
        assert!(e.x >= 0 && e.y >= 0);
        assert!(e.x2() <= 640 && e.y2() <= 480);
    }

    #[test]
    fn test_clipped_to_frame_inside_is_identity() {
        let b = BoundingBox::new(10, 10, 50, 50);
        assert_eq!(b.clipped_to_frame(640, 480), Some(b));
    }

    #[test]
    fn test_clipped_to_frame_trims_overhang() {
        let b = BoundingBox::new(600, -20, 100, 50);
        assert_eq!(
            b.clipped_to_frame(640, 480),
            Some(BoundingBox::new(600, 0, 40, 30))
        );
    }

    #[test]
    fn test_clipped_to_frame_outside_is_none() {
        assert_eq!(
            BoundingBox::new(700, 100, 100, 100).clipped_to_frame(640, 480),
            None
        );
        assert_eq!(
            BoundingBox::new(100, 480, 50, 50).clipped_to_frame(640, 480),
            None
        );
    }

    #[test]
    fn test_clamped_for_init_out_of_bounds() {
        let b = BoundingBox::new(-50, 700, 5, 5);
        let c = b.clamped_for_init(640, 480, 10);
        assert_eq!(c.x, 0);
        assert_eq!(c.y, 470);
        assert!(c.w >= 10 && c.h >= 10);
        assert!(c.x2() <= 640 && c.y2() <= 480);
    }
}
