//! Run-level aggregation of the frame-metrics sequence.

use wcoach_models::{AggregateMetrics, FrameMetrics, MetricKind, MetricStats, Polarity};

use crate::config::AnalysisConfig;

/// Reduce the per-frame metric sequence to run-level statistics.
///
/// Absent per-frame values are skipped, never zero-filled. An empty frame
/// sequence yields an empty aggregate; the session treats that as the hard
/// no-signal failure rather than reporting zeros.
pub fn aggregate_metrics(frames: &[FrameMetrics], config: &AnalysisConfig) -> AggregateMetrics {
    let mut aggregate = AggregateMetrics {
        frames_analyzed: frames.len(),
        ..Default::default()
    };

    if frames.is_empty() {
        return aggregate;
    }

    for kind in MetricKind::ALL {
        let values: Vec<f64> = frames.iter().filter_map(|f| f.value(kind)).collect();
        aggregate.stats.insert(kind, stats_of(&values));

        if let Some((threshold, polarity)) = config.threshold(kind) {
            aggregate
                .violation_pct
                .insert(kind, percent_violating(&values, threshold, polarity));
        }
    }

    let knee: Vec<f64> = frames
        .iter()
        .filter_map(|f| f.value(MetricKind::KneeAngle))
        .collect();
    let stance: Vec<f64> = frames
        .iter()
        .filter_map(|f| f.value(MetricKind::StanceWidth))
        .collect();
    let ankle_center: Vec<f64> = frames
        .iter()
        .filter_map(|f| f.value(MetricKind::AnkleCenterX))
        .collect();

    aggregate.knee_angle_variance = variance(&knee);
    aggregate.stance_width_variance = variance(&stance);
    aggregate.low_lateral_motion =
        ankle_center.len() >= 2 && variance(&ankle_center) < config.low_motion_variance;

    aggregate
}

fn stats_of(values: &[f64]) -> MetricStats {
    if values.is_empty() {
        return MetricStats::default();
    }

    let sum: f64 = values.iter().sum();
    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    MetricStats {
        avg: Some(sum / values.len() as f64),
        min: Some(min),
        max: Some(max),
        count: values.len(),
    }
}

fn percent_violating(values: &[f64], threshold: f64, polarity: Polarity) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let bad = values
        .iter()
        .filter(|&&v| match polarity {
            Polarity::Above => v > threshold,
            Polarity::Below => v < threshold,
        })
        .count();

    bad as f64 / values.len() as f64 * 100.0
}

/// Population variance; 0 with fewer than two samples.
pub(crate) fn variance(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(ts: f64, knee: Option<f64>, stance: Option<f64>) -> FrameMetrics {
        FrameMetrics {
            timestamp: ts,
            knee_angle: knee,
            stance_width: stance,
            ankle_center_x: stance.map(|_| 0.5),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_sequence_yields_empty_aggregate() {
        let agg = aggregate_metrics(&[], &AnalysisConfig::default());
        assert_eq!(agg.frames_analyzed, 0);
        assert!(agg.stats.is_empty());
        assert!(agg.violation_pct.is_empty());
    }

    #[test]
    fn test_all_absent_series_reports_count_zero() {
        let frames = vec![frame(0.0, None, None), frame(0.1, None, None)];
        let agg = aggregate_metrics(&frames, &AnalysisConfig::default());

        let stats = agg.stats_for(MetricKind::KneeAngle);
        assert_eq!(stats.count, 0);
        assert_eq!(stats.avg, None);
        assert_eq!(stats.min, None);
        assert_eq!(stats.max, None);
        assert_eq!(agg.pct_bad(MetricKind::KneeAngle), 0.0);
    }

    #[test]
    fn test_absent_values_are_skipped_not_zeroed() {
        let frames = vec![
            frame(0.0, Some(150.0), None),
            frame(0.1, None, None),
            frame(0.2, Some(130.0), None),
        ];
        let agg = aggregate_metrics(&frames, &AnalysisConfig::default());

        let stats = agg.stats_for(MetricKind::KneeAngle);
        assert_eq!(stats.count, 2);
        assert_eq!(stats.avg, Some(140.0));
        assert_eq!(stats.min, Some(130.0));
        assert_eq!(stats.max, Some(150.0));
    }

    #[test]
    fn test_violation_percentage_polarity() {
        // Knee: above 145 is bad. Stance: below 0.18 is bad.
        let frames = vec![
            frame(0.0, Some(160.0), Some(0.10)),
            frame(0.1, Some(120.0), Some(0.25)),
            frame(0.2, Some(150.0), Some(0.30)),
            frame(0.3, Some(140.0), Some(0.40)),
        ];
        let agg = aggregate_metrics(&frames, &AnalysisConfig::default());

        assert!((agg.pct_bad(MetricKind::KneeAngle) - 50.0).abs() < 1e-9);
        assert!((agg.pct_bad(MetricKind::StanceWidth) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_variance_needs_two_samples() {
        let frames = vec![frame(0.0, Some(150.0), None)];
        let agg = aggregate_metrics(&frames, &AnalysisConfig::default());
        assert_eq!(agg.knee_angle_variance, 0.0);
    }

    #[test]
    fn test_low_lateral_motion_flag() {
        // Identical ankle centers: zero variance, flag set.
        let still = vec![frame(0.0, None, Some(0.2)), frame(0.1, None, Some(0.2))];
        let agg = aggregate_metrics(&still, &AnalysisConfig::default());
        assert!(agg.low_lateral_motion);

        // Single sample: not enough evidence, flag stays clear.
        let single = vec![frame(0.0, None, Some(0.2))];
        let agg = aggregate_metrics(&single, &AnalysisConfig::default());
        assert!(!agg.low_lateral_motion);
    }
}
