pub mod config;
pub mod engine;
pub mod tier;
pub mod validation;

pub use config::*;
pub use engine::{compute_score, score_breakdown, RecordOutcome, ScoreBreakdown, ScoreResult};
pub use tier::{rank_tier, Tier};
pub use validation::{validate_scoring, weight_warnings};
