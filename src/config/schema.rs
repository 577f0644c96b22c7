use serde::{Deserialize, Serialize};

use crate::catalog::{EventCatalog, EventDefinition};
use crate::roster::{demo_events, demo_subjects, Subject};
use crate::scoring::ScoringConfig;

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scoring: Option<ScoringConfig>,

    #[serde(default)]
    pub events: Vec<EventDefinition>,

    #[serde(default)]
    pub subjects: Vec<Subject>,
}

impl Config {
    /// Built-in roster used by `--demo` and written by `init`.
    pub fn demo() -> Self {
        Self {
            scoring: Some(ScoringConfig::default()),
            events: demo_events(),
            subjects: demo_subjects(),
        }
    }

    pub fn catalog(&self) -> EventCatalog {
        EventCatalog::from_definitions(&self.events)
    }

    pub fn effective_scoring(&self) -> ScoringConfig {
        self.scoring.unwrap_or_default()
    }
}
