//! Sliding-window derivative classification of wrestling motions.
//!
//! Three rule-based classifiers scan finite-difference "velocities" of the
//! hip height, knee angle, ankle center, stance width and torso angle series.
//! Each classifier keeps its own used-frame set so one underlying motion is
//! not re-detected many times within the same pass; the classifiers run
//! independently and may overlap with each other (a level change co-occurring
//! with a shot attempt is two events by design).

use tracing::debug;
use wcoach_models::{FrameMetrics, MetricKind, WrestlingEvent, WrestlingEventKind};

use crate::config::AnalysisConfig;

/// Fewest frames the derivative windows can work with.
const MIN_FRAMES: usize = 5;

/// Classify wrestling events over the full frame sequence.
///
/// Sequences shorter than five frames produce no events. Events below the
/// configured confidence floor are discarded; survivors are sorted by start
/// time.
pub fn detect_wrestling_events(
    frames: &[FrameMetrics],
    config: &AnalysisConfig,
    fps: f64,
) -> Vec<WrestlingEvent> {
    if frames.len() < MIN_FRAMES {
        return Vec::new();
    }

    let window = ((config.derivative_window * fps).round() as usize).max(3);

    let timestamps: Vec<f64> = frames.iter().map(|f| f.timestamp).collect();
    let hip_y = values_of(frames, MetricKind::HipCenterY);
    let knee = values_of(frames, MetricKind::KneeAngle);
    let ankle_x = values_of(frames, MetricKind::AnkleCenterX);
    let stance = values_of(frames, MetricKind::StanceWidth);
    let torso = values_of(frames, MetricKind::TorsoAngle);

    let hip_d = derivative(&hip_y, window);
    let knee_d = derivative(&knee, window);
    let ankle_d = derivative(&ankle_x, window);
    let stance_d = derivative(&stance, window);

    let mut events = Vec::new();
    events.extend(detect_level_changes(
        &timestamps,
        &hip_d,
        &knee_d,
        window,
        config,
    ));
    events.extend(detect_shot_attempts(
        &timestamps,
        &hip_d,
        &ankle_d,
        &stance,
        &torso,
        window,
        config,
    ));
    events.extend(detect_sprawls(
        &timestamps,
        &hip_d,
        &stance_d,
        &ankle_d,
        window,
        config,
    ));

    events.retain(|e| e.confidence >= config.min_event_confidence);
    events.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));
    events
}

fn values_of(frames: &[FrameMetrics], kind: MetricKind) -> Vec<Option<f64>> {
    frames.iter().map(|f| f.value(kind)).collect()
}

/// Finite-difference velocity over a sliding window.
///
/// `deriv[i] = (v[i] - v[i - window]) / window` for `i >= window`, else 0.
/// A missing endpoint yields 0 for that index (no evidence, no motion).
fn derivative(values: &[Option<f64>], window: usize) -> Vec<f64> {
    (0..values.len())
        .map(|i| {
            if i < window {
                return 0.0;
            }
            match (values[i], values[i - window]) {
                (Some(now), Some(then)) => (now - then) / window as f64,
                _ => 0.0,
            }
        })
        .collect()
}

/// Raw-series change `v[i] - v[i - lookback]` when both samples exist.
fn change_over(values: &[Option<f64>], i: usize, lookback: usize) -> Option<f64> {
    if i < lookback {
        return None;
    }
    match (values[i], values[i - lookback]) {
        (Some(now), Some(then)) => Some(now - then),
        _ => None,
    }
}

fn mark_used(used: &mut [bool], start: usize, end: usize) {
    for flag in used.iter_mut().take(end + 1).skip(start) {
        *flag = true;
    }
}

/// Whether any frame in `[start, end]` already contributed to an event.
fn range_used(used: &[bool], start: usize, end: usize) -> bool {
    used[start..=end].iter().any(|&f| f)
}

/// Hips dropping while the knees bend within the same frame index.
fn detect_level_changes(
    timestamps: &[f64],
    hip_d: &[f64],
    knee_d: &[f64],
    window: usize,
    config: &AnalysisConfig,
) -> Vec<WrestlingEvent> {
    let n = timestamps.len();
    let mut used = vec![false; n];
    let mut events = Vec::new();

    for i in window..n {
        if range_used(&used, i - window, i) {
            continue;
        }
        if hip_d[i] > config.level_change_hip_drop && knee_d[i] < -config.level_change_knee_bend {
            let hip_ratio = hip_d[i] / config.level_change_hip_drop;
            let knee_ratio = -knee_d[i] / config.level_change_knee_bend;
            let confidence = ((hip_ratio + knee_ratio) / 2.0).min(1.0);

            let start = timestamps[i - window];
            let end = timestamps[i];
            debug!(
                confidence,
                start,
                end,
                "[EVENTS] {} detected",
                WrestlingEventKind::LevelChange.label()
            );
            events.push(WrestlingEvent {
                kind: WrestlingEventKind::LevelChange,
                start_time: start,
                end_time: end,
                confidence,
                description: format!(
                    "Level change at {start:.1}s: hips drop while both knees bend"
                ),
            });
            mark_used(&mut used, i - window, i);
        }
    }

    events
}

/// Weaker hip drop plus forward drive, with a closing stance or rising torso.
#[allow(clippy::too_many_arguments)]
fn detect_shot_attempts(
    timestamps: &[f64],
    hip_d: &[f64],
    ankle_d: &[f64],
    stance: &[Option<f64>],
    torso: &[Option<f64>],
    window: usize,
    config: &AnalysisConfig,
) -> Vec<WrestlingEvent> {
    let n = timestamps.len();
    let hip_threshold = 0.8 * config.level_change_hip_drop;
    let mut used = vec![false; n];
    let mut events = Vec::new();

    for i in window..n {
        if range_used(&used, i - window, i) {
            continue;
        }
        if hip_d[i] <= hip_threshold || ankle_d[i].abs() <= config.shot_drive_velocity {
            continue;
        }

        // Penetration signatures: the stance closes over a longer look-back,
        // or the torso pitches forward more than 5 degrees over the window.
        let stance_narrows = change_over(stance, i, 2 * window)
            .map(|delta| delta < -config.shot_stance_narrowing)
            .unwrap_or(false);
        let torso_rises = change_over(torso, i, window)
            .map(|delta| delta > 5.0)
            .unwrap_or(false);
        if !stance_narrows && !torso_rises {
            continue;
        }

        let hip_ratio = (hip_d[i] / hip_threshold).min(1.0);
        let drive_ratio = (ankle_d[i].abs() / config.shot_drive_velocity).min(1.0);
        let confidence = (0.3 + 0.35 * hip_ratio + 0.35 * drive_ratio).min(1.0);

        let start = timestamps[i - window];
        let end = timestamps[i];
        debug!(
            confidence,
            start,
            end,
            "[EVENTS] {} detected",
            WrestlingEventKind::ShotAttempt.label()
        );
        events.push(WrestlingEvent {
            kind: WrestlingEventKind::ShotAttempt,
            start_time: start,
            end_time: end,
            confidence,
            description: format!(
                "Shot attempt at {start:.1}s: level drop with forward penetration"
            ),
        });
        mark_used(&mut used, i - window, i);
    }

    events
}

/// Hips drop and the base widens without forward travel.
fn detect_sprawls(
    timestamps: &[f64],
    hip_d: &[f64],
    stance_d: &[f64],
    ankle_d: &[f64],
    window: usize,
    config: &AnalysisConfig,
) -> Vec<WrestlingEvent> {
    let n = timestamps.len();
    let mut used = vec![false; n];
    let mut events = Vec::new();

    for i in window..n {
        if range_used(&used, i - window, i) {
            continue;
        }
        let not_advancing = ankle_d[i].abs() < config.shot_drive_velocity / 2.0;
        if hip_d[i] > config.sprawl_hip_drop
            && stance_d[i] > config.sprawl_widen_velocity
            && not_advancing
        {
            let hip_ratio = (hip_d[i] / config.sprawl_hip_drop).min(1.0);
            let widen_ratio = (stance_d[i] / config.sprawl_widen_velocity).min(1.0);
            let confidence = (0.3 + 0.35 * hip_ratio + 0.35 * widen_ratio).min(1.0);

            let start = timestamps[i - window];
            let end = timestamps[i];
            debug!(
                confidence,
                start,
                end,
                "[EVENTS] {} detected",
                WrestlingEventKind::SprawlDefense.label()
            );
            events.push(WrestlingEvent {
                kind: WrestlingEventKind::SprawlDefense,
                start_time: start,
                end_time: end,
                confidence,
                description: format!(
                    "Sprawl at {start:.1}s: hips drop back as the base widens"
                ),
            });
            mark_used(&mut used, i - window, i);
        }
    }

    events
}
