//! Sustained threshold-violation detection over metric series.

use wcoach_models::{FrameMetrics, MetricKind, Polarity, TimelineEvent};

use crate::config::AnalysisConfig;

/// Detect sustained violations for every thresholded metric.
///
/// The combined event list is sorted ascending by timestamp.
pub fn detect_timeline_events(
    frames: &[FrameMetrics],
    config: &AnalysisConfig,
    fps: f64,
) -> Vec<TimelineEvent> {
    let min_frames = config.min_event_frames(fps);
    let mut events = Vec::new();

    for kind in MetricKind::ALL {
        if let Some((threshold, polarity)) = config.threshold(kind) {
            let series: Vec<(f64, Option<f64>)> = frames
                .iter()
                .map(|f| (f.timestamp, f.value(kind)))
                .collect();
            events.extend(detect_runs(kind, &series, threshold, polarity, min_frames));
        }
    }

    events.sort_by(|a, b| a.timestamp.total_cmp(&b.timestamp));
    events
}

/// Collect maximal consecutive runs of violating frames of at least
/// `min_frames` length.
///
/// Absent values break runs; a run shorter than the minimum contributes
/// nothing. Each qualifying run emits one event carrying its start timestamp,
/// duration (last minus first frame time) and mean value.
pub fn detect_runs(
    kind: MetricKind,
    series: &[(f64, Option<f64>)],
    threshold: f64,
    polarity: Polarity,
    min_frames: usize,
) -> Vec<TimelineEvent> {
    let is_bad = |v: f64| match polarity {
        Polarity::Above => v > threshold,
        Polarity::Below => v < threshold,
    };

    let mut events = Vec::new();
    let mut run: Vec<(f64, f64)> = Vec::new();

    for &(timestamp, value) in series {
        match value {
            Some(v) if is_bad(v) => run.push((timestamp, v)),
            _ => {
                flush_run(kind, &mut run, threshold, polarity, min_frames, &mut events);
            }
        }
    }
    flush_run(kind, &mut run, threshold, polarity, min_frames, &mut events);

    events
}

fn flush_run(
    kind: MetricKind,
    run: &mut Vec<(f64, f64)>,
    threshold: f64,
    polarity: Polarity,
    min_frames: usize,
    events: &mut Vec<TimelineEvent>,
) {
    if run.len() >= min_frames {
        let start = run[0].0;
        let end = run[run.len() - 1].0;
        let mean = run.iter().map(|(_, v)| v).sum::<f64>() / run.len() as f64;

        let direction = match polarity {
            Polarity::Above => "above",
            Polarity::Below => "below",
        };
        events.push(TimelineEvent {
            timestamp: start,
            duration: end - start,
            metric: kind,
            value: mean,
            message: format!(
                "{} {} {:.2} for {:.1}s (avg {:.2})",
                kind.name(),
                direction,
                threshold,
                end - start,
                mean
            ),
        });
    }
    run.clear();
}
