use super::error::{CatalogError, Result};
use super::types::EventCatalog;
use crate::roster::Subject;

/// Add a new event to the catalog.
pub fn add_event(catalog: &mut EventCatalog, name: &str, base_points: f64) -> Result<()> {
    if catalog.contains(name) {
        return Err(CatalogError::DuplicateEvent(name.to_string()));
    }
    catalog.insert(name.to_string(), base_points);
    Ok(())
}

/// Rename an event and every attendance record that references it.
///
/// Renaming to the same name succeeds without touching anything. On error
/// neither the catalog nor any subject is modified.
pub fn rename_event(
    catalog: &mut EventCatalog,
    subjects: &mut [Subject],
    old_name: &str,
    new_name: &str,
) -> Result<()> {
    if !catalog.contains(old_name) {
        return Err(CatalogError::NotFound(old_name.to_string()));
    }
    if new_name == old_name {
        return Ok(());
    }
    if catalog.contains(new_name) {
        return Err(CatalogError::DuplicateEvent(new_name.to_string()));
    }

    if let Some(points) = catalog.remove(old_name) {
        catalog.insert(new_name.to_string(), points);
    }
    for record in subjects
        .iter_mut()
        .flat_map(|s| s.records.iter_mut())
        .filter(|r| r.event_name == old_name)
    {
        record.event_name = new_name.to_string();
    }
    Ok(())
}

/// Remove an event and strip its records from every subject.
///
/// Deleting an absent name is a no-op. Returns the number of records removed.
pub fn delete_event(catalog: &mut EventCatalog, subjects: &mut [Subject], name: &str) -> usize {
    catalog.remove(name);
    subjects
        .iter_mut()
        .map(|subject| {
            let before = subject.records.len();
            subject.records.retain(|r| r.event_name != name);
            before - subject.records.len()
        })
        .sum()
}

/// Replace the base points of an existing event.
pub fn update_event_points(catalog: &mut EventCatalog, name: &str, new_points: f64) -> Result<()> {
    match catalog.points_mut(name) {
        Some(points) => {
            *points = new_points;
            Ok(())
        }
        None => Err(CatalogError::NotFound(name.to_string())),
    }
}

/// Parse an operator-entered point value. Invalid or non-finite literals
/// coerce to zero.
pub fn parse_points(literal: &str) -> f64 {
    literal
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}
