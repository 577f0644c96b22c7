//! Scoring session: the catalog, the subjects and the active weights, owned
//! together so every compound mutation happens under one exclusive borrow.
//!
//! A multi-threaded host shares a `Session` behind a single `Mutex`; read-only
//! ranking works on `&Session` and needs nothing else.

pub mod command;
pub mod repl;

pub use command::{parse_command, Command};
pub use repl::run_session;

use std::cmp::Ordering;

use crate::catalog::{self, CatalogError, EventCatalog};
use crate::config::Config;
use crate::roster::Subject;
use crate::scoring::{score_breakdown, ScoreResult, ScoringConfig};

/// A subject with its computed score.
#[derive(Debug, Clone)]
pub struct RankedSubject<'a> {
    pub subject: &'a Subject,
    pub result: ScoreResult,
}

#[derive(Debug, Clone, Default)]
pub struct Session {
    catalog: EventCatalog,
    subjects: Vec<Subject>,
    scoring: ScoringConfig,
}

impl Session {
    pub fn new(catalog: EventCatalog, subjects: Vec<Subject>, scoring: ScoringConfig) -> Self {
        Self {
            catalog,
            subjects,
            scoring,
        }
    }

    pub fn from_config(config: Config) -> Self {
        let catalog = config.catalog();
        let scoring = config.effective_scoring();
        Self::new(catalog, config.subjects, scoring)
    }

    pub fn catalog(&self) -> &EventCatalog {
        &self.catalog
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn scoring(&self) -> ScoringConfig {
        self.scoring
    }

    pub fn set_scoring(&mut self, scoring: ScoringConfig) {
        self.scoring = scoring;
    }

    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn add_event(&mut self, name: &str, base_points: f64) -> Result<(), CatalogError> {
        catalog::add_event(&mut self.catalog, name, base_points)
    }

    pub fn rename_event(&mut self, old_name: &str, new_name: &str) -> Result<(), CatalogError> {
        catalog::rename_event(&mut self.catalog, &mut self.subjects, old_name, new_name)
    }

    /// Returns the number of attendance records removed.
    pub fn delete_event(&mut self, name: &str) -> usize {
        catalog::delete_event(&mut self.catalog, &mut self.subjects, name)
    }

    pub fn update_event_points(&mut self, name: &str, points: f64) -> Result<(), CatalogError> {
        catalog::update_event_points(&mut self.catalog, name, points)
    }

    /// Number of records across all subjects that reference `name`.
    pub fn records_referencing(&self, name: &str) -> usize {
        self.subjects
            .iter()
            .flat_map(|s| s.records.iter())
            .filter(|r| r.event_name == name)
            .count()
    }

    pub fn score(&self, id: &str) -> Option<ScoreResult> {
        self.subject(id)
            .map(|subject| score_breakdown(subject, &self.catalog, &self.scoring))
    }

    /// All subjects scored, highest first. Ties keep id order.
    pub fn ranked(&self) -> Vec<RankedSubject<'_>> {
        let mut ranked: Vec<RankedSubject<'_>> = self
            .subjects
            .iter()
            .map(|subject| RankedSubject {
                subject,
                result: score_breakdown(subject, &self.catalog, &self.scoring),
            })
            .collect();

        ranked.sort_by(|a, b| {
            let score_cmp = b
                .result
                .score
                .partial_cmp(&a.result.score)
                .unwrap_or(Ordering::Equal);
            if score_cmp != Ordering::Equal {
                return score_cmp;
            }
            a.subject.id.cmp(&b.subject.id)
        });
        ranked
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::Tier;

    fn demo_session() -> Session {
        Session::from_config(Config::demo())
    }

    #[test]
    fn test_ranked_order() {
        let session = demo_session();
        let ids: Vec<&str> = session.ranked().iter().map(|r| r.subject.id.as_str()).collect();
        assert_eq!(ids, vec!["EMP-9921", "EMP-5511", "EMP-3321", "EMP-1102", "EMP-4402"]);
    }

    #[test]
    fn test_ranked_ties_by_id() {
        let mut session = demo_session();
        // Zero weights collapse every score to its base
        session.set_scoring(ScoringConfig::new(0.0, 0.0));
        for subject in &mut session.subjects {
            subject.base_score = 70.0;
        }
        let ids: Vec<&str> = session.ranked().iter().map(|r| r.subject.id.as_str()).collect();
        assert_eq!(ids, vec!["EMP-1102", "EMP-3321", "EMP-4402", "EMP-5511", "EMP-9921"]);
    }

    #[test]
    fn test_rename_keeps_scores() {
        let mut session = demo_session();
        let before = session.score("EMP-3321").unwrap().score;

        session.rename_event("Design Crit", "Design Review").unwrap();

        assert_eq!(session.score("EMP-3321").unwrap().score, before);
        assert_eq!(session.records_referencing("Design Crit"), 0);
        assert_eq!(session.records_referencing("Design Review"), 2);
    }

    #[test]
    fn test_delete_lowers_score() {
        let mut session = demo_session();
        assert_eq!(session.score("EMP-3321").unwrap().score, 80.0);

        let removed = session.delete_event("Design Crit");

        assert_eq!(removed, 2);
        let result = session.score("EMP-3321").unwrap();
        assert_eq!(result.score, 76.0);
        assert_eq!(result.tier, Tier::Silver);
    }

    #[test]
    fn test_weights_apply_to_everyone() {
        let mut session = demo_session();
        session.set_scoring(ScoringConfig::new(2.0, 5.0));
        assert_eq!(session.score("EMP-3321").unwrap().score, 76.0);
        // 62 + 6 * 2 - 15 * 5
        assert_eq!(session.score("EMP-4402").unwrap().score, 0.0);
    }

    #[test]
    fn test_unknown_subject() {
        assert!(demo_session().score("EMP-0000").is_none());
    }
}
