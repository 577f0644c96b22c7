use super::config::{ScoringConfig, EVENT_WEIGHT_RANGE, PENALTY_WEIGHT_RANGE};

/// Validate scoring weights at startup.
/// Returns all validation errors at once (not just the first).
///
/// Only non-finite weights are errors. Zero and negative weights are allowed.
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !config.event_weight.is_finite() {
        errors.push(format!(
            "scoring.event_weight: must be a finite number, got {}",
            config.event_weight
        ));
    }
    if !config.penalty_weight.is_finite() {
        errors.push(format!(
            "scoring.penalty_weight: must be a finite number, got {}",
            config.penalty_weight
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Non-fatal notes for weights outside the ranges interactive front ends allow.
pub fn weight_warnings(config: &ScoringConfig) -> Vec<String> {
    let mut warnings = Vec::new();
    let checks = [
        ("event_weight", config.event_weight, EVENT_WEIGHT_RANGE),
        ("penalty_weight", config.penalty_weight, PENALTY_WEIGHT_RANGE),
    ];
    for (field, value, (low, high)) in checks {
        if value.is_finite() && !(low..=high).contains(&value) {
            warnings.push(format!(
                "scoring.{}: {} is outside the recommended range {}-{}",
                field, value, low, high
            ));
        }
    }
    warnings
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_negative_and_zero_weights_allowed() {
        assert!(validate_scoring(&ScoringConfig::new(-1.0, 0.0)).is_ok());
    }

    #[test]
    fn test_non_finite_weight() {
        let result = validate_scoring(&ScoringConfig::new(f64::NAN, 1.0));
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("scoring.event_weight"));
    }

    #[test]
    fn test_collects_all_errors() {
        let result = validate_scoring(&ScoringConfig::new(f64::INFINITY, f64::NAN));
        assert_eq!(result.unwrap_err().len(), 2);
    }

    #[test]
    fn test_weight_warnings() {
        assert!(weight_warnings(&ScoringConfig::new(2.5, 3.0)).is_empty());

        let warnings = weight_warnings(&ScoringConfig::new(0.2, 4.0));
        assert_eq!(warnings.len(), 2);
        assert!(warnings[0].contains("event_weight"));
        assert!(warnings[1].contains("penalty_weight"));
    }
}
