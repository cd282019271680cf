//! Per-frame biomechanical metrics from pose landmarks.

use wcoach_models::{FrameMetrics, PoseLandmarks};

use crate::geometry::{angle_from_vertical, joint_angle};

const HIP_HEIGHT_EPSILON: f64 = 0.01;

/// Derive the frame's scalar metrics from its landmark set.
///
/// Every metric requires all of its landmarks to be visible (visibility at or
/// above the floor); otherwise the field stays `None`. Nothing here is ever
/// coerced to a sentinel value.
pub fn extract_frame_metrics(landmarks: &PoseLandmarks, timestamp: f64) -> FrameMetrics {
    let mut m = FrameMetrics {
        timestamp,
        ..Default::default()
    };

    let left_ankle = landmarks.left_ankle.point();
    let right_ankle = landmarks.right_ankle.point();
    let shoulder_center = landmarks.shoulder_center();
    let hip_center = landmarks.hip_center();

    // Knee angles: hip-knee-ankle per side, averaged across visible sides.
    if let (Some(hip), Some(knee), Some(ankle)) = (
        landmarks.left_hip.point(),
        landmarks.left_knee.point(),
        left_ankle,
    ) {
        m.knee_angle_left = Some(joint_angle(hip, knee, ankle));
    }
    if let (Some(hip), Some(knee), Some(ankle)) = (
        landmarks.right_hip.point(),
        landmarks.right_knee.point(),
        right_ankle,
    ) {
        m.knee_angle_right = Some(joint_angle(hip, knee, ankle));
    }
    m.knee_angle = mean_of_present(&[m.knee_angle_left, m.knee_angle_right]);

    // Lead leg = ankle higher on screen (smaller y).
    if let (Some(la), Some(ra)) = (left_ankle, right_ankle) {
        let (lead, rear) = if la.1 <= ra.1 {
            (m.knee_angle_left, m.knee_angle_right)
        } else {
            (m.knee_angle_right, m.knee_angle_left)
        };
        m.lead_knee_angle = lead;
        m.rear_knee_angle = rear;

        m.stance_width = Some((la.0 - ra.0).abs());
        m.ankle_left_x = Some(la.0);
        m.ankle_right_x = Some(ra.0);
        m.ankle_center_x = Some((la.0 + ra.0) / 2.0);
    }

    // Hands below guard: mean wrist y minus mean shoulder y.
    if let (Some(sc), Some(lw), Some(rw)) = (
        shoulder_center,
        landmarks.left_wrist.point(),
        landmarks.right_wrist.point(),
    ) {
        m.hands_drop = Some((lw.1 + rw.1) / 2.0 - sc.1);
    }

    if let (Some(sc), Some(hc)) = (shoulder_center, hip_center) {
        m.torso_angle = Some(angle_from_vertical(sc, hc));
        m.hip_height_ratio = Some((hc.1 - sc.1) / (1.0 - sc.1 + HIP_HEIGHT_EPSILON));
        m.shoulder_center_y = Some(sc.1);
        m.hip_center_y = Some(hc.1);
    }

    // Wrist flare and reach relative to the shoulder center.
    if let Some(sc) = shoulder_center {
        let mut reaches = Vec::with_capacity(2);
        if let Some(lw) = landmarks.left_wrist.point() {
            m.elbow_flare_left = Some((lw.0 - sc.0).abs());
            reaches.push(((lw.0 - sc.0).powi(2) + (lw.1 - sc.1).powi(2)).sqrt());
        }
        if let Some(rw) = landmarks.right_wrist.point() {
            m.elbow_flare_right = Some((rw.0 - sc.0).abs());
            reaches.push(((rw.0 - sc.0).powi(2) + (rw.1 - sc.1).powi(2)).sqrt());
        }
        m.elbow_flare = mean_of_present(&[m.elbow_flare_left, m.elbow_flare_right]);
        if !reaches.is_empty() {
            m.wrist_reach = Some(reaches.iter().sum::<f64>() / reaches.len() as f64);
        }
    }

    // Head position relative to the hips.
    if let (Some(nose), Some(hc)) = (landmarks.nose.point(), hip_center) {
        m.head_offset_x = Some(nose.0 - hc.0);
        m.head_height = Some(hc.1 - nose.1);
    }

    m
}

fn mean_of_present(values: &[Option<f64>]) -> Option<f64> {
    let present: Vec<f64> = values.iter().flatten().copied().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}
