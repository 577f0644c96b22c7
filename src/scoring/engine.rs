use super::config::ScoringConfig;
use super::tier::{rank_tier, Tier};
use crate::catalog::EventCatalog;
use crate::roster::Subject;
use serde::Serialize;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;

/// Why a record contributed what it did.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordOutcome {
    Counted,
    NotAttended,
    UnknownEvent,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordContribution {
    pub event_name: String,
    pub date: String,
    pub outcome: RecordOutcome,
    pub points: f64, // Unweighted catalog points, 0 unless counted
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreBreakdown {
    pub base_score: f64,
    pub raw_event_points: f64,
    pub weighted_events: f64,
    pub weighted_penalty: f64,
    pub total: f64, // Before clamping
    pub clamped: bool,
    pub records: Vec<RecordContribution>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreResult {
    pub score: f64,
    pub tier: Tier,
    pub breakdown: ScoreBreakdown,
}

/// Score a subject: base score plus weighted event points minus weighted
/// inactivity penalty, clamped to [0, 100] and rounded to one decimal.
pub fn compute_score(subject: &Subject, catalog: &EventCatalog, config: &ScoringConfig) -> f64 {
    score_breakdown(subject, catalog, config).score
}

/// Same as [`compute_score`], keeping every intermediate value.
pub fn score_breakdown(
    subject: &Subject,
    catalog: &EventCatalog,
    config: &ScoringConfig,
) -> ScoreResult {
    let records: Vec<RecordContribution> = subject
        .records
        .iter()
        .map(|record| {
            let (outcome, points) = match (record.attended, catalog.points(&record.event_name)) {
                (false, _) => (RecordOutcome::NotAttended, 0.0),
                (true, None) => (RecordOutcome::UnknownEvent, 0.0),
                (true, Some(points)) => (RecordOutcome::Counted, points),
            };
            RecordContribution {
                event_name: record.event_name.clone(),
                date: record.date.clone(),
                outcome,
                points,
            }
        })
        .collect();

    let raw_event_points: f64 = records.iter().map(|r| r.points).sum();
    let weighted_events = raw_event_points * config.event_weight;
    let weighted_penalty = subject.inactivity_penalty * config.penalty_weight;
    let total = subject.base_score + weighted_events - weighted_penalty;

    let clamped_total = clamp_score(total);
    let score = round_tenths(clamped_total);

    ScoreResult {
        score,
        tier: rank_tier(score),
        breakdown: ScoreBreakdown {
            base_score: subject.base_score,
            raw_event_points,
            weighted_events,
            weighted_penalty,
            total,
            clamped: clamped_total != total,
            records,
        },
    }
}

/// Clamp into [0, 100]. NaN is treated as the floor.
fn clamp_score(total: f64) -> f64 {
    if total.is_nan() {
        MIN_SCORE
    } else {
        total.clamp(MIN_SCORE, MAX_SCORE)
    }
}

/// Round to one decimal place, halves away from zero.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
