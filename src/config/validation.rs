use chrono::NaiveDate;
use std::collections::HashSet;

use super::schema::Config;
use crate::scoring::{validate_scoring, weight_warnings};

/// Validate a loaded roster.
/// Returns all validation errors at once, each prefixed with its YAML path.
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if let Err(scoring_errors) = validate_scoring(&config.effective_scoring()) {
        errors.extend(scoring_errors);
    }

    let mut event_names = HashSet::new();
    for (i, event) in config.events.iter().enumerate() {
        if event.name.trim().is_empty() {
            errors.push(format!("events[{}].name: must not be empty", i));
        } else if !event_names.insert(event.name.as_str()) {
            errors.push(format!("events[{}].name: duplicate '{}'", i, event.name));
        }
        if !event.base_points.is_finite() {
            errors.push(format!(
                "events[{}].base_points: must be a finite number",
                i
            ));
        }
    }

    let mut subject_ids = HashSet::new();
    for (i, subject) in config.subjects.iter().enumerate() {
        if subject.id.trim().is_empty() {
            errors.push(format!("subjects[{}].id: must not be empty", i));
        } else if !subject_ids.insert(subject.id.as_str()) {
            errors.push(format!("subjects[{}].id: duplicate '{}'", i, subject.id));
        }
        if !(0.0..=100.0).contains(&subject.base_score) {
            errors.push(format!(
                "subjects[{}].base_score: must be between 0 and 100, got {}",
                i, subject.base_score
            ));
        }
        if !subject.inactivity_penalty.is_finite() || subject.inactivity_penalty < 0.0 {
            errors.push(format!(
                "subjects[{}].inactivity_penalty: must be non-negative, got {}",
                i, subject.inactivity_penalty
            ));
        }
        for (j, record) in subject.records.iter().enumerate() {
            if !record.date.is_empty()
                && NaiveDate::parse_from_str(&record.date, "%Y-%m-%d").is_err()
            {
                errors.push(format!(
                    "subjects[{}].records[{}].date: invalid '{}' - expected YYYY-MM-DD",
                    i, j, record.date
                ));
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Non-fatal findings: weights outside the recommended ranges and records
/// pointing at events the catalog does not define (they score zero).
pub fn config_warnings(config: &Config) -> Vec<String> {
    let mut warnings = weight_warnings(&config.effective_scoring());
    let catalog = config.catalog();
    for (i, subject) in config.subjects.iter().enumerate() {
        for (j, record) in subject.records.iter().enumerate() {
            if !catalog.contains(&record.event_name) {
                warnings.push(format!(
                    "subjects[{}].records[{}]: unknown event '{}' scores 0",
                    i, j, record.event_name
                ));
            }
        }
    }
    warnings
}
