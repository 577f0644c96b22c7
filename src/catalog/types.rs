use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A named, point-valued activity type.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct EventDefinition {
    pub name: String,
    pub base_points: f64,
}

/// Mapping of event name to base points.
///
/// Names are unique and compared case-sensitively. Iteration is in name order
/// so listings are stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventCatalog {
    events: BTreeMap<String, f64>,
}

impl EventCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions. A later definition with the same name
    /// replaces an earlier one; config validation reports such duplicates
    /// before this is reached.
    pub fn from_definitions<'a, I>(definitions: I) -> Self
    where
        I: IntoIterator<Item = &'a EventDefinition>,
    {
        let events = definitions
            .into_iter()
            .map(|d| (d.name.clone(), d.base_points))
            .collect();
        Self { events }
    }

    /// Base points for `name`, if the event exists.
    pub fn points(&self, name: &str) -> Option<f64> {
        self.events.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.events.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.events.iter().map(|(name, points)| (name.as_str(), *points))
    }

    pub fn to_definitions(&self) -> Vec<EventDefinition> {
        self.iter()
            .map(|(name, base_points)| EventDefinition {
                name: name.to_string(),
                base_points,
            })
            .collect()
    }

    pub(crate) fn insert(&mut self, name: String, points: f64) {
        self.events.insert(name, points);
    }

    pub(crate) fn remove(&mut self, name: &str) -> Option<f64> {
        self.events.remove(name)
    }

    pub(crate) fn points_mut(&mut self, name: &str) -> Option<&mut f64> {
        self.events.get_mut(name)
    }
}
