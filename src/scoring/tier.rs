use serde::{Deserialize, Serialize};
use std::fmt;

/// Score band, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Tier {
    Diamond,
    Gold,
    Silver,
    Bronze,
    Warning,
    RedZone,
}

impl Tier {
    /// All tiers, highest first.
    pub const ALL: [Tier; 6] = [
        Tier::Diamond,
        Tier::Gold,
        Tier::Silver,
        Tier::Bronze,
        Tier::Warning,
        Tier::RedZone,
    ];

    /// Inclusive lower bound of the band.
    pub fn threshold(self) -> f64 {
        match self {
            Tier::Diamond => 90.0,
            Tier::Gold => 80.0,
            Tier::Silver => 70.0,
            Tier::Bronze => 60.0,
            Tier::Warning => 50.0,
            Tier::RedZone => 0.0,
        }
    }

    /// Suggested HR action. Descriptive only.
    pub fn suggested_action(self) -> &'static str {
        match self {
            Tier::Diamond => "promotion + bonus",
            Tier::Gold => "raise",
            Tier::Silver => "no change, good standing",
            Tier::Bronze => "no change, improvement required",
            Tier::Warning => "minor penalty",
            Tier::RedZone => "major penalty",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Tier::Diamond => "Diamond",
            Tier::Gold => "Gold",
            Tier::Silver => "Silver",
            Tier::Bronze => "Bronze",
            Tier::Warning => "Warning",
            Tier::RedZone => "RedZone",
        }
    }

    /// Human-readable score range, e.g. "80-89" or ">=90".
    pub fn range_label(self) -> String {
        match self {
            Tier::Diamond => format!(">={}", self.threshold()),
            Tier::RedZone => format!("<{}", Tier::Warning.threshold()),
            _ => format!("{}-{}", self.threshold(), self.threshold() + 9.0),
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map a clamped score to its tier.
///
/// Scores above 100 land in Diamond and scores below 0 (or NaN) in RedZone.
pub fn rank_tier(score: f64) -> Tier {
    Tier::ALL
        .into_iter()
        .find(|tier| score >= tier.threshold())
        .unwrap_or(Tier::RedZone)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(rank_tier(49.9), Tier::RedZone);
        assert_eq!(rank_tier(50.0), Tier::Warning);
        assert_eq!(rank_tier(59.9), Tier::Warning);
        assert_eq!(rank_tier(60.0), Tier::Bronze);
        assert_eq!(rank_tier(69.9), Tier::Bronze);
        assert_eq!(rank_tier(70.0), Tier::Silver);
        assert_eq!(rank_tier(79.9), Tier::Silver);
        assert_eq!(rank_tier(80.0), Tier::Gold);
        assert_eq!(rank_tier(89.9), Tier::Gold);
        assert_eq!(rank_tier(90.0), Tier::Diamond);
    }

    #[test]
    fn test_domain_endpoints() {
        assert_eq!(rank_tier(0.0), Tier::RedZone);
        assert_eq!(rank_tier(100.0), Tier::Diamond);
    }

    #[test]
    fn test_every_tenth_maps_to_one_tier_monotonically() {
        // Walking upward never moves to a worse tier
        let mut previous = Tier::RedZone;
        for tenths in 0..=1000 {
            let tier = rank_tier(tenths as f64 / 10.0);
            assert!(tier <= previous, "tier regressed at {}", tenths);
            previous = tier;
        }
        assert_eq!(previous, Tier::Diamond);
    }

    #[test]
    fn test_out_of_range_input() {
        assert_eq!(rank_tier(-5.0), Tier::RedZone);
        assert_eq!(rank_tier(f64::NAN), Tier::RedZone);
        assert_eq!(rank_tier(150.0), Tier::Diamond);
    }

    #[test]
    fn test_range_labels() {
        assert_eq!(Tier::Diamond.range_label(), ">=90");
        assert_eq!(Tier::Gold.range_label(), "80-89");
        assert_eq!(Tier::RedZone.range_label(), "<50");
    }
}
