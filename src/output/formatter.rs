use std::io::IsTerminal;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde::Serialize;
use terminal_size::{terminal_size, Width};

use crate::catalog::EventCatalog;
use crate::roster::Subject;
use crate::scoring::{RecordOutcome, ScoreResult, ScoringConfig, Tier};
use crate::session::RankedSubject;
use crate::summary::Summary;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Format a score with exactly one decimal (scores are already rounded)
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

/// Paint `text` in the tier's color
fn paint(tier: Tier, text: &str, use_colors: bool) -> String {
    if !use_colors {
        return text.to_string();
    }
    match tier {
        Tier::Diamond => text.cyan().bold().to_string(),
        Tier::Gold => text.yellow().bold().to_string(),
        Tier::Silver => text.white().to_string(),
        Tier::Bronze => text.magenta().to_string(),
        Tier::Warning => text.bright_red().to_string(),
        Tier::RedZone => text.red().bold().to_string(),
    }
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate a label to fit available width, accounting for Unicode
fn truncate_label(label: &str, max_width: usize) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= max_width {
        label.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format ranked subjects as a table with columns: Index, Score, Tier, Id, Name
/// No headers. Index is right-aligned with a trailing dot, score is 5 wide
/// (fits "100.0"), tier is 7 wide (fits "Diamond").
pub fn format_ranked_table(ranked: &[RankedSubject], use_colors: bool) -> String {
    if ranked.is_empty() {
        return "No subjects found.".to_string();
    }

    let term_width = get_terminal_width();
    let id_width = ranked
        .iter()
        .map(|r| r.subject.id.chars().count())
        .max()
        .unwrap_or(0);
    let separator = "  ";

    ranked
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>5}", format_score(r.result.score));
            let tier_str = format!("{:<7}", r.result.tier.label());
            let id_str = format!("{:<width$}", r.subject.id, width = id_width);

            let fixed_width = 3 + 1 + 5 + 7 + id_width + separator.len() * 3;
            let label = r.subject.name.as_deref().unwrap_or("");
            let label = match term_width {
                Some(width) if width > fixed_width + 10 => truncate_label(label, width - fixed_width),
                Some(_) => truncate_label(label, 20),
                None => label.to_string(),
            };

            if use_colors {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str.dimmed(),
                    score_str.bold(),
                    separator,
                    paint(r.result.tier, &tier_str, true),
                    separator,
                    id_str,
                    separator,
                    label
                )
            } else {
                format!(
                    "{} {}{}{}{}{}{}{}",
                    index_str, score_str, separator, tier_str, separator, id_str, separator, label
                )
                .trim_end()
                .to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format ranked subjects as tab-separated values for scripting
/// Columns: score, tier, id, name (no headers, no colors)
pub fn format_tsv(ranked: &[RankedSubject]) -> String {
    ranked
        .iter()
        .map(|r| {
            format!(
                "{}\t{}\t{}\t{}",
                format_score(r.result.score),
                r.result.tier,
                r.subject.id,
                r.subject.name.as_deref().unwrap_or("")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[derive(Serialize)]
struct JsonRow<'a> {
    rank: usize,
    id: &'a str,
    name: Option<&'a str>,
    score: f64,
    tier: Tier,
    suggested_action: &'static str,
}

/// Format ranked subjects as a pretty JSON array
pub fn format_json(ranked: &[RankedSubject]) -> Result<String> {
    let rows: Vec<JsonRow> = ranked
        .iter()
        .enumerate()
        .map(|(idx, r)| JsonRow {
            rank: idx + 1,
            id: &r.subject.id,
            name: r.subject.name.as_deref(),
            score: r.result.score,
            tier: r.result.tier,
            suggested_action: r.result.tier.suggested_action(),
        })
        .collect();
    serde_json::to_string_pretty(&rows).context("Failed to serialize ranking")
}

/// Multi-line breakdown of one subject's score
pub fn format_breakdown(
    subject: &Subject,
    result: &ScoreResult,
    scoring: &ScoringConfig,
    use_colors: bool,
) -> String {
    let b = &result.breakdown;
    let mut lines = Vec::new();

    let header = match &subject.name {
        Some(name) => format!("{} ({})", subject.id, name),
        None => subject.id.clone(),
    };
    lines.push(if use_colors {
        header.bold().to_string()
    } else {
        header
    });

    lines.push(format!("  Base score:       {}", b.base_score));
    lines.push(format!(
        "  Event points:     {} x {} = {:+}",
        b.raw_event_points, scoring.event_weight, b.weighted_events
    ));
    for record in &b.records {
        let note = match record.outcome {
            RecordOutcome::Counted => format!("{:+}", record.points),
            RecordOutcome::NotAttended => "not attended".to_string(),
            RecordOutcome::UnknownEvent => "unknown event, 0".to_string(),
        };
        let date = if record.date.is_empty() {
            String::new()
        } else {
            format!(" [{}]", record.date)
        };
        lines.push(format!("    - {}{}: {}", record.event_name, date, note));
    }
    lines.push(format!(
        "  Inactivity:       {} x {} = -{}",
        subject.inactivity_penalty, scoring.penalty_weight, b.weighted_penalty
    ));
    if b.clamped {
        lines.push(format!("  Total:            {} (clamped)", b.total));
    } else {
        lines.push(format!("  Total:            {}", b.total));
    }

    let tier = result.tier;
    lines.push(format!(
        "  Score:            {} {}",
        format_score(result.score),
        paint(tier, tier.label(), use_colors)
    ));
    lines.push(format!("  Suggested action: {}", tier.suggested_action()));
    lines.join("\n")
}

/// Tier thresholds with suggested actions
pub fn format_tier_table(use_colors: bool) -> String {
    Tier::ALL
        .into_iter()
        .map(|tier| {
            format!(
                "{}  {:<6}  {}",
                paint(tier, &format!("{:<7}", tier.label()), use_colors),
                tier.range_label(),
                tier.suggested_action()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Event catalog, one event per line
pub fn format_events(catalog: &EventCatalog) -> String {
    if catalog.is_empty() {
        return "No events defined.".to_string();
    }
    let width = catalog.iter().map(|(n, _)| n.chars().count()).max().unwrap_or(0);
    catalog
        .iter()
        .map(|(name, points)| format!("{:<width$}  {}", name, points, width = width))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn format_summary(summary: &Summary, use_colors: bool) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Subjects:           {}", summary.subjects));
    lines.push(match &summary.top_performer {
        Some((id, score)) => format!("Top performer:      {} ({})", id, format_score(*score)),
        None => "Top performer:      -".to_string(),
    });
    lines.push(match summary.attendance_rate {
        Some(rate) => format!("Avg attendance:     {:.1}%", rate),
        None => "Avg attendance:     -".to_string(),
    });
    lines.push(format!("Inactivity alerts:  {}", summary.inactivity_alerts));
    for (tier, count) in &summary.tier_counts {
        lines.push(format!(
            "  {}  {}",
            paint(*tier, &format!("{:<7}", tier.label()), use_colors),
            count
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::session::Session;
    use crate::summary::summarize;

    #[test]
    fn test_format_score() {
        assert_eq!(format_score(80.0), "80.0");
        assert_eq!(format_score(75.3), "75.3");
        assert_eq!(format_score(100.0), "100.0");
    }

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("Design Lead", 20), "Design Lead");
        assert_eq!(truncate_label("Design Lead", 8), "Desig...");
        assert_eq!(truncate_label("Design Lead", 2), "De");
    }

    #[test]
    fn test_ranked_table_plain() {
        let session = Session::from_config(Config::demo());
        let output = format_ranked_table(&session.ranked(), false);
        let first = output.lines().next().unwrap();
        assert!(first.starts_with(" 1.  99.0  Diamond  EMP-9921"));
        assert_eq!(output.lines().count(), 5);
    }

    #[test]
    fn test_ranked_table_empty() {
        assert_eq!(format_ranked_table(&[], false), "No subjects found.");
    }

    #[test]
    fn test_tsv() {
        let session = Session::from_config(Config::demo());
        let output = format_tsv(&session.ranked());
        assert_eq!(output.lines().nth(2).unwrap(), "80.0\tGold\tEMP-3321\tDesign Lead");
    }

    #[test]
    fn test_json() {
        let session = Session::from_config(Config::demo());
        let output = format_json(&session.ranked()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed[0]["id"], "EMP-9921");
        assert_eq!(parsed[0]["rank"], 1);
        assert_eq!(parsed[4]["tier"], "Warning");
        assert_eq!(parsed[4]["suggested_action"], "minor penalty");
    }

    #[test]
    fn test_breakdown_lists_every_record() {
        let session = Session::from_config(Config::demo());
        let subject = session.subject("EMP-3321").unwrap();
        let result = session.score("EMP-3321").unwrap();
        let output = format_breakdown(subject, &result, &session.scoring(), false);
        assert!(output.contains("Design Crit [2024-03-04]: +4"));
        assert!(output.contains("Accessibility Workshop [2024-03-12]: not attended"));
        assert!(output.contains("Score:            80.0 Gold"));
        assert!(output.contains("Suggested action: raise"));
    }

    #[test]
    fn test_tier_table() {
        let output = format_tier_table(false);
        assert_eq!(output.lines().count(), 6);
        assert!(output.lines().next().unwrap().contains(">=90"));
        assert!(output.contains("major penalty"));
    }

    #[test]
    fn test_events_listing() {
        let output = format_events(Session::from_config(Config::demo()).catalog());
        assert!(output.lines().next().unwrap().starts_with("Accessibility Workshop  4"));
    }

    #[test]
    fn test_summary_output() {
        let summary = summarize(&Session::from_config(Config::demo()));
        let output = format_summary(&summary, false);
        assert!(output.contains("Top performer:      EMP-9921 (99.0)"));
        assert!(output.contains("Avg attendance:     78.6%"));
        assert!(output.contains("Inactivity alerts:  3"));
    }
}
