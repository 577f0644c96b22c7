use serde::Serialize;

use crate::scoring::Tier;
use crate::session::Session;

/// Dashboard totals over a whole session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub subjects: usize,
    /// Highest-ranked subject id and score
    pub top_performer: Option<(String, f64)>,
    /// Attended records over all records, as a percentage. None without records.
    pub attendance_rate: Option<f64>,
    /// Subjects carrying a non-zero inactivity penalty
    pub inactivity_alerts: usize,
    pub tier_counts: Vec<(Tier, usize)>,
}

pub fn summarize(session: &Session) -> Summary {
    let ranked = session.ranked();

    let top_performer = ranked
        .first()
        .map(|r| (r.subject.id.clone(), r.result.score));

    let (attended, total) = session
        .subjects()
        .iter()
        .map(|s| s.attendance())
        .fold((0, 0), |(a, t), (sa, st)| (a + sa, t + st));
    let attendance_rate = if total == 0 {
        None
    } else {
        Some(attended as f64 / total as f64 * 100.0)
    };

    let inactivity_alerts = session
        .subjects()
        .iter()
        .filter(|s| s.inactivity_penalty > 0.0)
        .count();

    let tier_counts = Tier::ALL
        .into_iter()
        .map(|tier| (tier, ranked.iter().filter(|r| r.result.tier == tier).count()))
        .collect();

    Summary {
        subjects: ranked.len(),
        top_performer,
        attendance_rate,
        inactivity_alerts,
        tier_counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::EventCatalog;
    use crate::config::Config;
    use crate::scoring::ScoringConfig;

    #[test]
    fn test_demo_summary() {
        let summary = summarize(&Session::from_config(Config::demo()));

        assert_eq!(summary.subjects, 5);
        assert_eq!(summary.top_performer, Some(("EMP-9921".to_string(), 99.0)));
        // 11 of 14 records attended
        let rate = summary.attendance_rate.unwrap();
        assert!((rate - 78.571).abs() < 0.01);
        assert_eq!(summary.inactivity_alerts, 3);

        let counts: Vec<usize> = summary.tier_counts.iter().map(|(_, n)| *n).collect();
        assert_eq!(counts, vec![2, 1, 1, 0, 1, 0]);
    }

    #[test]
    fn test_empty_session() {
        let session = Session::new(EventCatalog::new(), vec![], ScoringConfig::default());
        let summary = summarize(&session);
        assert_eq!(summary.subjects, 0);
        assert!(summary.top_performer.is_none());
        assert!(summary.attendance_rate.is_none());
        assert_eq!(summary.tier_counts.len(), 6);
    }
}
