use serde::{Deserialize, Serialize};

/// Recommended event weight range enforced by interactive front ends.
pub const EVENT_WEIGHT_RANGE: (f64, f64) = (0.5, 2.5);

/// Recommended penalty weight range enforced by interactive front ends.
pub const PENALTY_WEIGHT_RANGE: (f64, f64) = (0.5, 3.0);

/// Global scoring multipliers.
///
/// Applied uniformly to every subject. The engine does not validate the
/// weights: zero or negative values are accepted and invert the sign of the
/// factor they scale.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   event_weight: 1.5
///   penalty_weight: 2.0
/// ```
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    /// Multiplier on the sum of attended event points (default: 1.0)
    #[serde(default = "default_weight")]
    pub event_weight: f64,

    /// Multiplier on the inactivity penalty (default: 1.0)
    #[serde(default = "default_weight")]
    pub penalty_weight: f64,
}

fn default_weight() -> f64 {
    1.0
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            event_weight: default_weight(),
            penalty_weight: default_weight(),
        }
    }
}

impl ScoringConfig {
    pub fn new(event_weight: f64, penalty_weight: f64) -> Self {
        Self {
            event_weight,
            penalty_weight,
        }
    }

    /// Apply command-line overrides on top of this config.
    pub fn with_overrides(self, event_weight: Option<f64>, penalty_weight: Option<f64>) -> Self {
        Self {
            event_weight: event_weight.unwrap_or(self.event_weight),
            penalty_weight: penalty_weight.unwrap_or(self.penalty_weight),
        }
    }
}
