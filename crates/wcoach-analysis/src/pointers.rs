//! Severity-ranked coaching pointers from aggregates and events.
//!
//! Every rule category evaluates a fire condition over the aggregate
//! metrics (and detected events), producing a pointer with rationale, fix,
//! numeric evidence and a timing reference. Rule weights are data, the
//! scoring arithmetic is one pure function, and the internal score never
//! leaves this module.

use tracing::debug;
use wcoach_models::{
    AggregateMetrics, CoachingPointer, MetricKind, TimelineEvent, WrestlingEvent,
    WrestlingEventKind,
};

use crate::config::AnalysisConfig;

/// Deviation contribution scale, small so ordering is dominated by the
/// percentage-bad term.
const DEVIATION_SCALE: f64 = 0.01;

/// Stand-in percentage for rules that fire on averages without a
/// per-frame threshold series.
const AVG_RULE_PCT: f64 = 50.0;

/// Rule categories in the fixed catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Category {
    KneeAngle,
    StanceWidth,
    HandPosition,
    Posture,
    HipHeight,
    HeadVertical,
    Balance,
    TrailLeg,
    Reach,
    LateralMotion,
    KneeConsistency,
    LevelChange,
    Sprawl,
    HeadHorizontal,
    ElbowFlare,
}

/// Fixed per-category severity weight.
fn category_weight(category: Category) -> f64 {
    match category {
        Category::KneeAngle => 1.0,
        Category::StanceWidth => 0.95,
        Category::HandPosition => 0.85,
        Category::Posture => 0.8,
        Category::HipHeight => 0.75,
        Category::HeadVertical => 0.7,
        Category::Balance => 0.7,
        Category::TrailLeg => 0.65,
        Category::Reach => 0.6,
        Category::LateralMotion => 0.6,
        Category::KneeConsistency => 0.55,
        Category::LevelChange => 0.5,
        Category::Sprawl => 0.5,
        Category::HeadHorizontal => 0.45,
        Category::ElbowFlare => 0.4,
    }
}

/// Pure scoring arithmetic shared by every rule.
fn category_score(category: Category, percent_bad: f64, deviation: f64) -> f64 {
    (percent_bad / 100.0) * category_weight(category) + deviation.abs() * DEVIATION_SCALE
}

struct RankedPointer {
    score: f64,
    pointer: CoachingPointer,
}

/// Evaluate the rule catalogue and return the ranked, bounded pointer list.
///
/// Pointers are sorted descending by internal score and truncated to the
/// configured maximum. When no rule fires, a single positive fallback
/// pointer is returned instead of an empty list.
pub fn rank_pointers(
    aggregate: &AggregateMetrics,
    timeline_events: &[TimelineEvent],
    wrestling_events: &[WrestlingEvent],
    config: &AnalysisConfig,
) -> Vec<CoachingPointer> {
    let mut ranked = Vec::new();
    let ctx = RuleContext {
        aggregate,
        timeline_events,
        wrestling_events,
        config,
    };

    ctx.knee_angle(&mut ranked);
    ctx.stance_width(&mut ranked);
    ctx.hand_position(&mut ranked);
    ctx.posture(&mut ranked);
    ctx.hip_height(&mut ranked);
    ctx.head_vertical(&mut ranked);
    ctx.balance(&mut ranked);
    ctx.trail_leg(&mut ranked);
    ctx.reach(&mut ranked);
    ctx.lateral_motion(&mut ranked);
    ctx.knee_consistency(&mut ranked);
    ctx.level_change_commentary(&mut ranked);
    ctx.sprawl_commentary(&mut ranked);
    ctx.head_horizontal(&mut ranked);
    ctx.elbow_flare(&mut ranked);

    if ranked.is_empty() {
        return vec![CoachingPointer {
            title: "Solid Rep".to_string(),
            why: "Your positioning looks good based on the analyzed metrics.".to_string(),
            fix: "Keep up the good work and focus on consistency throughout practice."
                .to_string(),
            evidence: format!("{} frames analyzed, no thresholds exceeded", aggregate.frames_analyzed),
            when: "throughout the clip".to_string(),
        }];
    }

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(config.max_pointers);

    debug!(pointers = ranked.len(), "[POINTERS] ranked rule catalogue");
    ranked.into_iter().map(|r| r.pointer).collect()
}

struct RuleContext<'a> {
    aggregate: &'a AggregateMetrics,
    timeline_events: &'a [TimelineEvent],
    wrestling_events: &'a [WrestlingEvent],
    config: &'a AnalysisConfig,
}

impl RuleContext<'_> {
    /// Timing reference from the first timeline event for a metric.
    fn when_for_metric(&self, kind: MetricKind) -> String {
        self.timeline_events
            .iter()
            .find(|e| e.metric == kind)
            .map(|e| format!("around {}", clock(e.timestamp)))
            .unwrap_or_else(|| "throughout the clip".to_string())
    }

    /// Timing reference from the first wrestling event of a kind.
    fn when_for_event(&self, kind: WrestlingEventKind) -> String {
        self.wrestling_events
            .iter()
            .find(|e| e.kind == kind)
            .map(|e| format!("around {}", clock(e.start_time)))
            .unwrap_or_else(|| "throughout the clip".to_string())
    }

    fn push(
        &self,
        ranked: &mut Vec<RankedPointer>,
        category: Category,
        percent_bad: f64,
        deviation: f64,
        pointer: CoachingPointer,
    ) {
        let score = category_score(category, percent_bad, deviation);
        debug!(score, title = %pointer.title, "[POINTERS] rule fired");
        ranked.push(RankedPointer { score, pointer });
    }

    fn knee_angle(&self, ranked: &mut Vec<RankedPointer>) {
        let pct = self.aggregate.pct_bad(MetricKind::KneeAngle);
        let Some(avg) = self.aggregate.avg(MetricKind::KneeAngle) else {
            return;
        };
        let threshold = self.config.knee_angle_threshold;
        if avg > threshold || pct > 30.0 {
            self.push(
                ranked,
                Category::KneeAngle,
                pct,
                avg - threshold,
                CoachingPointer {
                    title: "Get Lower".to_string(),
                    why: format!(
                        "Your average knee angle is {avg:.1} degrees, so you are standing too upright."
                    ),
                    fix: "Bend your knees more to drop your center of gravity; aim for 120-140 degrees."
                        .to_string(),
                    evidence: format!(
                        "avg knee angle {avg:.1} degrees, {pct:.0}% of frames above {threshold:.0}"
                    ),
                    when: self.when_for_metric(MetricKind::KneeAngle),
                },
            );
        }
    }

    fn stance_width(&self, ranked: &mut Vec<RankedPointer>) {
        let pct = self.aggregate.pct_bad(MetricKind::StanceWidth);
        let Some(avg) = self.aggregate.avg(MetricKind::StanceWidth) else {
            return;
        };
        let threshold = self.config.stance_width_threshold;
        if avg < threshold || pct > 30.0 {
            self.push(
                ranked,
                Category::StanceWidth,
                pct,
                threshold - avg,
                CoachingPointer {
                    title: "Widen Your Base".to_string(),
                    why: format!(
                        "Your stance width averages {avg:.2}, which is narrow and easy to attack."
                    ),
                    fix: "Set your feet at least shoulder-width apart to keep a stable base."
                        .to_string(),
                    evidence: format!(
                        "avg stance width {avg:.2}, {pct:.0}% of frames below {threshold:.2}"
                    ),
                    when: self.when_for_metric(MetricKind::StanceWidth),
                },
            );
        }
    }

    fn hand_position(&self, ranked: &mut Vec<RankedPointer>) {
        let pct = self.aggregate.pct_bad(MetricKind::HandsDrop);
        let Some(avg) = self.aggregate.avg(MetricKind::HandsDrop) else {
            return;
        };
        let threshold = self.config.hands_drop_threshold;
        if avg > threshold || pct > 30.0 {
            self.push(
                ranked,
                Category::HandPosition,
                pct,
                avg - threshold,
                CoachingPointer {
                    title: "Hands Up".to_string(),
                    why: format!(
                        "Your hands ride {avg:.2} units below shoulder level, leaving your head open."
                    ),
                    fix: "Carry your hands at chest level so you can defend ties and shoot fast."
                        .to_string(),
                    evidence: format!(
                        "avg hands drop {avg:.2}, {pct:.0}% of frames above {threshold:.2}"
                    ),
                    when: self.when_for_metric(MetricKind::HandsDrop),
                },
            );
        }
    }

    fn posture(&self, ranked: &mut Vec<RankedPointer>) {
        let pct = self.aggregate.pct_bad(MetricKind::TorsoAngle);
        let Some(avg) = self.aggregate.avg(MetricKind::TorsoAngle) else {
            return;
        };
        let threshold = self.config.torso_angle_threshold;
        if avg > threshold || pct > 30.0 {
            self.push(
                ranked,
                Category::Posture,
                pct,
                avg - threshold,
                CoachingPointer {
                    title: "Fix Your Posture".to_string(),
                    why: format!(
                        "Your back leans {avg:.0} degrees from vertical; bending at the waist invites snap-downs."
                    ),
                    fix: "Lower your level with your legs, keeping your back flat and head up."
                        .to_string(),
                    evidence: format!(
                        "avg torso angle {avg:.0} degrees, {pct:.0}% of frames above {threshold:.0}"
                    ),
                    when: self.when_for_metric(MetricKind::TorsoAngle),
                },
            );
        }
    }

    fn hip_height(&self, ranked: &mut Vec<RankedPointer>) {
        let Some(avg) = self.aggregate.avg(MetricKind::HipHeightRatio) else {
            return;
        };
        // Ratio shrinks as the hips ride up toward the shoulders.
        if avg < 0.30 {
            self.push(
                ranked,
                Category::HipHeight,
                AVG_RULE_PCT,
                0.30 - avg,
                CoachingPointer {
                    title: "Sink Your Hips".to_string(),
                    why: format!(
                        "Your hips sit high relative to your shoulders (ratio {avg:.2})."
                    ),
                    fix: "Sit into your stance so your hips stay under you, ready to sprawl or shoot."
                        .to_string(),
                    evidence: format!("avg hip-height ratio {avg:.2}, below 0.30"),
                    when: "throughout the clip".to_string(),
                },
            );
        }
    }

    fn head_vertical(&self, ranked: &mut Vec<RankedPointer>) {
        let Some(avg) = self.aggregate.avg(MetricKind::HeadHeight) else {
            return;
        };
        // Head barely above (or below) the hips means looking at the mat.
        if avg < 0.05 {
            self.push(
                ranked,
                Category::HeadVertical,
                AVG_RULE_PCT,
                0.05 - avg,
                CoachingPointer {
                    title: "Head Up".to_string(),
                    why: format!(
                        "Your head drops nearly level with your hips (height {avg:.2})."
                    ),
                    fix: "Keep your eyes on your opponent; where the head goes, the body follows."
                        .to_string(),
                    evidence: format!("avg head height over hips {avg:.2}, below 0.05"),
                    when: "throughout the clip".to_string(),
                },
            );
        }
    }

    fn balance(&self, ranked: &mut Vec<RankedPointer>) {
        let variance = self.aggregate.stance_width_variance;
        if variance > 0.01 {
            self.push(
                ranked,
                Category::Balance,
                AVG_RULE_PCT,
                variance * 10.0,
                CoachingPointer {
                    title: "Settle Your Base".to_string(),
                    why: "Your stance width swings widely, a sign you are off balance.".to_string(),
                    fix: "Take shorter steps and reset your feet under your hips after every exchange."
                        .to_string(),
                    evidence: format!("stance width variance {variance:.3}, above 0.010"),
                    when: "throughout the clip".to_string(),
                },
            );
        }
    }

    fn trail_leg(&self, ranked: &mut Vec<RankedPointer>) {
        let shots = self
            .wrestling_events
            .iter()
            .any(|e| e.kind == WrestlingEventKind::ShotAttempt);
        let Some(avg) = self.aggregate.avg(MetricKind::RearKneeAngle) else {
            return;
        };
        if shots && avg < 120.0 {
            self.push(
                ranked,
                Category::TrailLeg,
                AVG_RULE_PCT,
                120.0 - avg,
                CoachingPointer {
                    title: "Drive Through Your Shots".to_string(),
                    why: format!(
                        "On your shots the trail leg stays collapsed (rear knee averages {avg:.0} degrees)."
                    ),
                    fix: "Extend the back leg and run your feet through contact instead of reaching."
                        .to_string(),
                    evidence: format!("avg rear knee angle {avg:.0} degrees during a clip with shot attempts"),
                    when: self.when_for_event(WrestlingEventKind::ShotAttempt),
                },
            );
        }
    }

    fn reach(&self, ranked: &mut Vec<RankedPointer>) {
        let Some(avg) = self.aggregate.avg(MetricKind::WristReach) else {
            return;
        };
        if avg > 0.35 {
            self.push(
                ranked,
                Category::Reach,
                AVG_RULE_PCT,
                avg - 0.35,
                CoachingPointer {
                    title: "Stop Reaching".to_string(),
                    why: format!(
                        "Your hands extend far from your body (reach {avg:.2}), exposing your arms."
                    ),
                    fix: "Close distance with your feet first; touch with bent elbows.".to_string(),
                    evidence: format!("avg wrist reach {avg:.2}, above 0.35"),
                    when: "throughout the clip".to_string(),
                },
            );
        }
    }

    fn lateral_motion(&self, ranked: &mut Vec<RankedPointer>) {
        if self.aggregate.low_lateral_motion {
            self.push(
                ranked,
                Category::LateralMotion,
                100.0,
                0.0,
                CoachingPointer {
                    title: "Keep Circling".to_string(),
                    why: "Your feet barely move sideways; a static wrestler is easy to set up on."
                        .to_string(),
                    fix: "Circle and change angles constantly instead of squaring up and standing still."
                        .to_string(),
                    evidence: "ankle-center lateral variance below the low-motion threshold"
                        .to_string(),
                    when: "throughout the clip".to_string(),
                },
            );
        }
    }

    fn knee_consistency(&self, ranked: &mut Vec<RankedPointer>) {
        let variance = self.aggregate.knee_angle_variance;
        // Std above ~20 degrees means the level keeps bouncing.
        if variance > 400.0 {
            self.push(
                ranked,
                Category::KneeConsistency,
                AVG_RULE_PCT,
                (variance.sqrt() - 20.0).max(0.0),
                CoachingPointer {
                    title: "Hold Your Level".to_string(),
                    why: "Your knee bend keeps bouncing between upright and low.".to_string(),
                    fix: "Pick a stance height and hold it; change levels on purpose, not out of fatigue."
                        .to_string(),
                    evidence: format!(
                        "knee angle variance {variance:.0} (std {:.0} degrees)",
                        variance.sqrt()
                    ),
                    when: "throughout the clip".to_string(),
                },
            );
        }
    }

    fn level_change_commentary(&self, ranked: &mut Vec<RankedPointer>) {
        let changes: Vec<&WrestlingEvent> = self
            .wrestling_events
            .iter()
            .filter(|e| e.kind == WrestlingEventKind::LevelChange)
            .collect();
        if changes.is_empty() {
            return;
        }
        let mean_confidence =
            changes.iter().map(|e| e.confidence).sum::<f64>() / changes.len() as f64;
        self.push(
            ranked,
            Category::LevelChange,
            mean_confidence * 100.0,
            0.0,
            CoachingPointer {
                title: "Attack Off Your Level Changes".to_string(),
                why: format!(
                    "You changed levels {} time(s); make each one threaten a shot.",
                    changes.len()
                ),
                fix: "Pair every level change with a hand fake or penetration step so it scores."
                    .to_string(),
                evidence: format!(
                    "{} level change(s), mean confidence {mean_confidence:.2}",
                    changes.len()
                ),
                when: self.when_for_event(WrestlingEventKind::LevelChange),
            },
        );
    }

    fn sprawl_commentary(&self, ranked: &mut Vec<RankedPointer>) {
        let sprawls: Vec<&WrestlingEvent> = self
            .wrestling_events
            .iter()
            .filter(|e| e.kind == WrestlingEventKind::SprawlDefense)
            .collect();
        if sprawls.is_empty() {
            return;
        }
        let mean_confidence =
            sprawls.iter().map(|e| e.confidence).sum::<f64>() / sprawls.len() as f64;
        self.push(
            ranked,
            Category::Sprawl,
            mean_confidence * 100.0,
            0.0,
            CoachingPointer {
                title: "Finish After You Sprawl".to_string(),
                why: format!(
                    "You sprawled {} time(s); good defense should turn into offense.",
                    sprawls.len()
                ),
                fix: "After the sprawl, circle behind immediately instead of settling for a stalemate."
                    .to_string(),
                evidence: format!(
                    "{} sprawl(s), mean confidence {mean_confidence:.2}",
                    sprawls.len()
                ),
                when: self.when_for_event(WrestlingEventKind::SprawlDefense),
            },
        );
    }

    fn head_horizontal(&self, ranked: &mut Vec<RankedPointer>) {
        let Some(avg) = self.aggregate.avg(MetricKind::HeadOffsetX) else {
            return;
        };
        if avg.abs() > 0.15 {
            self.push(
                ranked,
                Category::HeadHorizontal,
                AVG_RULE_PCT,
                avg.abs() - 0.15,
                CoachingPointer {
                    title: "Center Your Head".to_string(),
                    why: format!(
                        "Your head drifts {avg:.2} off your hips, pulling you over your toes."
                    ),
                    fix: "Stack your head over your hips so your weight stays on your whole foot."
                        .to_string(),
                    evidence: format!("avg head horizontal offset {avg:.2}, magnitude above 0.15"),
                    when: "throughout the clip".to_string(),
                },
            );
        }
    }

    fn elbow_flare(&self, ranked: &mut Vec<RankedPointer>) {
        let Some(avg) = self.aggregate.avg(MetricKind::ElbowFlare) else {
            return;
        };
        if avg > 0.25 {
            self.push(
                ranked,
                Category::ElbowFlare,
                AVG_RULE_PCT,
                avg - 0.25,
                CoachingPointer {
                    title: "Tuck Your Elbows".to_string(),
                    why: format!(
                        "Your hands sit wide of your frame (flare {avg:.2}), opening underhooks."
                    ),
                    fix: "Keep elbows inside shoulder width so your frames stay strong.".to_string(),
                    evidence: format!("avg elbow flare {avg:.2}, above 0.25"),
                    when: "throughout the clip".to_string(),
                },
            );
        }
    }
}

/// Format seconds as m:ss for timing references.
fn clock(seconds: f64) -> String {
    let total = seconds.max(0.0).round() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wcoach_models::MetricStats;

    fn aggregate_with(
        entries: &[(MetricKind, f64)],
        violations: &[(MetricKind, f64)],
    ) -> AggregateMetrics {
        let mut agg = AggregateMetrics {
            frames_analyzed: 100,
            ..Default::default()
        };
        for &(kind, avg) in entries {
            agg.stats.insert(
                kind,
                MetricStats {
                    avg: Some(avg),
                    min: Some(avg),
                    max: Some(avg),
                    count: 100,
                },
            );
        }
        for &(kind, pct) in violations {
            agg.violation_pct.insert(kind, pct);
        }
        agg
    }

    /// Aggregate where every fire condition is false.
    fn clean_aggregate() -> AggregateMetrics {
        aggregate_with(
            &[
                (MetricKind::KneeAngle, 130.0),
                (MetricKind::StanceWidth, 0.25),
                (MetricKind::HandsDrop, 0.02),
                (MetricKind::TorsoAngle, 15.0),
                (MetricKind::HipHeightRatio, 0.35),
                (MetricKind::HeadHeight, 0.40),
                (MetricKind::WristReach, 0.15),
                (MetricKind::HeadOffsetX, 0.02),
                (MetricKind::ElbowFlare, 0.12),
            ],
            &[
                (MetricKind::KneeAngle, 0.0),
                (MetricKind::StanceWidth, 0.0),
                (MetricKind::HandsDrop, 0.0),
                (MetricKind::TorsoAngle, 0.0),
            ],
        )
    }

    #[test]
    fn test_fallback_pointer_when_nothing_fires() {
        let config = AnalysisConfig::default();
        let pointers = rank_pointers(&clean_aggregate(), &[], &[], &config);
        assert_eq!(pointers.len(), 1);
        assert_eq!(pointers[0].title, "Solid Rep");
    }

    #[test]
    fn test_knee_rule_outranks_weaker_rules() {
        let config = AnalysisConfig::default();
        let mut agg = clean_aggregate();
        // Upright knees all clip, slightly wide elbows.
        agg.stats.get_mut(&MetricKind::KneeAngle).unwrap().avg = Some(160.0);
        agg.violation_pct.insert(MetricKind::KneeAngle, 100.0);
        agg.stats.get_mut(&MetricKind::ElbowFlare).unwrap().avg = Some(0.30);

        let pointers = rank_pointers(&agg, &[], &[], &config);
        assert!(pointers.len() >= 2);
        assert_eq!(pointers[0].title, "Get Lower");
    }

    #[test]
    fn test_output_capped_at_max_pointers() {
        let config = AnalysisConfig::default();
        // Make every category fire.
        let mut agg = aggregate_with(
            &[
                (MetricKind::KneeAngle, 170.0),
                (MetricKind::StanceWidth, 0.05),
                (MetricKind::HandsDrop, 0.30),
                (MetricKind::TorsoAngle, 70.0),
                (MetricKind::HipHeightRatio, 0.10),
                (MetricKind::HeadHeight, -0.05),
                (MetricKind::WristReach, 0.50),
                (MetricKind::HeadOffsetX, 0.40),
                (MetricKind::ElbowFlare, 0.40),
                (MetricKind::RearKneeAngle, 95.0),
            ],
            &[
                (MetricKind::KneeAngle, 90.0),
                (MetricKind::StanceWidth, 80.0),
                (MetricKind::HandsDrop, 70.0),
                (MetricKind::TorsoAngle, 60.0),
            ],
        );
        agg.low_lateral_motion = true;
        agg.knee_angle_variance = 900.0;
        agg.stance_width_variance = 0.05;

        let events = vec![
            WrestlingEvent {
                kind: WrestlingEventKind::LevelChange,
                start_time: 1.0,
                end_time: 1.2,
                confidence: 0.9,
                description: String::new(),
            },
            WrestlingEvent {
                kind: WrestlingEventKind::ShotAttempt,
                start_time: 2.0,
                end_time: 2.2,
                confidence: 0.8,
                description: String::new(),
            },
            WrestlingEvent {
                kind: WrestlingEventKind::SprawlDefense,
                start_time: 3.0,
                end_time: 3.2,
                confidence: 0.7,
                description: String::new(),
            },
        ];

        let pointers = rank_pointers(&agg, &[], &events, &config);
        assert_eq!(pointers.len(), config.max_pointers);
    }

    #[test]
    fn test_sorted_descending_by_score() {
        let config = AnalysisConfig::default();
        let mut agg = clean_aggregate();
        agg.stats.get_mut(&MetricKind::KneeAngle).unwrap().avg = Some(160.0);
        agg.violation_pct.insert(MetricKind::KneeAngle, 100.0);
        agg.stats.get_mut(&MetricKind::StanceWidth).unwrap().avg = Some(0.10);
        agg.violation_pct.insert(MetricKind::StanceWidth, 60.0);
        agg.stats.get_mut(&MetricKind::ElbowFlare).unwrap().avg = Some(0.30);

        let pointers = rank_pointers(&agg, &[], &[], &config);
        // knee (1.0 weight, 100%) > stance (0.95 weight, 60%) > elbow (0.4 weight)
        assert_eq!(pointers[0].title, "Get Lower");
        assert_eq!(pointers[1].title, "Widen Your Base");
        assert_eq!(pointers[2].title, "Tuck Your Elbows");
    }

    #[test]
    fn test_timing_reference_from_timeline_event() {
        let config = AnalysisConfig::default();
        let mut agg = clean_aggregate();
        agg.stats.get_mut(&MetricKind::KneeAngle).unwrap().avg = Some(160.0);
        agg.violation_pct.insert(MetricKind::KneeAngle, 100.0);

        let timeline = vec![TimelineEvent {
            timestamp: 64.0,
            duration: 1.0,
            metric: MetricKind::KneeAngle,
            value: 160.0,
            message: String::new(),
        }];

        let pointers = rank_pointers(&agg, &timeline, &[], &config);
        assert_eq!(pointers[0].when, "around 1:04");
    }

    #[test]
    fn test_score_never_serialized() {
        let config = AnalysisConfig::default();
        let mut agg = clean_aggregate();
        agg.stats.get_mut(&MetricKind::KneeAngle).unwrap().avg = Some(160.0);

        let pointers = rank_pointers(&agg, &[], &[], &config);
        let json = serde_json::to_value(&pointers).unwrap();
        assert!(json[0].get("score").is_none());
        assert!(json[0].get("title").is_some());
    }
}
