use anyhow::{Context, Result};
use std::io::{BufRead, Write};

use super::command::{parse_command, Command, HELP};
use super::Session;
use crate::output::{
    format_breakdown, format_events, format_ranked_table, format_summary, format_tier_table,
};
use crate::scoring::{weight_warnings, ScoringConfig};
use crate::summary::summarize;

/// Read one trimmed line. Returns None at end of input.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = input.read_line(&mut line).context("Failed to read input")?;
    if read == 0 {
        Ok(None)
    } else {
        Ok(Some(line.trim().to_string()))
    }
}

fn prompt<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<Option<String>> {
    write!(output, "{}", message).context("Failed to write prompt")?;
    output.flush().context("Failed to flush output")?;
    read_line(input)
}

/// Ask a yes/no question, defaulting to no.
fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, message: &str) -> Result<bool> {
    let answer = prompt(input, output, &format!("{} [y/N]: ", message))?;
    Ok(matches!(
        answer.as_deref().map(str::to_lowercase).as_deref(),
        Some("y") | Some("yes")
    ))
}

/// Run an interactive operator session until `quit` or end of input.
///
/// Catalog and weight changes live only as long as the session.
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: &mut R,
    output: &mut W,
    use_colors: bool,
) -> Result<()> {
    writeln!(output, "Type 'help' for commands.")?;

    while let Some(line) = prompt(input, output, "> ")? {
        if line.is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                writeln!(output, "error: {}", message)?;
                continue;
            }
        };

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", HELP)?,
            Command::List => {
                writeln!(output, "{}", format_ranked_table(&session.ranked(), use_colors))?
            }
            Command::Events => writeln!(output, "{}", format_events(session.catalog()))?,
            Command::Tiers => writeln!(output, "{}", format_tier_table(use_colors))?,
            Command::Summary => {
                writeln!(output, "{}", format_summary(&summarize(session), use_colors))?
            }
            Command::Show(id) => match (session.subject(&id), session.score(&id)) {
                (Some(subject), Some(result)) => writeln!(
                    output,
                    "{}",
                    format_breakdown(subject, &result, &session.scoring(), use_colors)
                )?,
                _ => writeln!(output, "error: no subject '{}'", id)?,
            },
            Command::Add { name, points } => match session.add_event(&name, points) {
                Ok(()) => writeln!(output, "Added '{}' ({} points)", name, points)?,
                Err(e) => writeln!(output, "error: {}", e)?,
            },
            Command::Rename { old_name, new_name } => {
                match session.rename_event(&old_name, &new_name) {
                    Ok(()) => writeln!(output, "Renamed '{}' to '{}'", old_name, new_name)?,
                    Err(e) => writeln!(output, "error: {}", e)?,
                }
            }
            Command::Points { name, points } => {
                match session.update_event_points(&name, points) {
                    Ok(()) => writeln!(output, "'{}' is now worth {} points", name, points)?,
                    Err(e) => writeln!(output, "error: {}", e)?,
                }
            }
            Command::Delete(name) => {
                let referencing = session.records_referencing(&name);
                let question = format!(
                    "Delete '{}' and {} attendance record(s)?",
                    name, referencing
                );
                if confirm(input, output, &question)? {
                    let removed = session.delete_event(&name);
                    writeln!(output, "Deleted '{}' ({} records removed)", name, removed)?;
                } else {
                    writeln!(output, "Aborted.")?;
                }
            }
            Command::Weights {
                event_weight,
                penalty_weight,
            } => {
                let scoring = ScoringConfig::new(event_weight, penalty_weight);
                for warning in weight_warnings(&scoring) {
                    writeln!(output, "warning: {}", warning)?;
                }
                session.set_scoring(scoring);
                writeln!(
                    output,
                    "Weights set: events x{}, penalty x{}",
                    event_weight, penalty_weight
                )?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::io::Cursor;

    fn run(script: &str) -> (Session, String) {
        let mut session = Session::from_config(Config::demo());
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut output = Vec::new();
        run_session(&mut session, &mut input, &mut output, false).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_quit_immediately() {
        let (_, output) = run("quit\n");
        assert!(output.starts_with("Type 'help' for commands."));
    }

    #[test]
    fn test_end_of_input_ends_session() {
        let (session, _) = run("add Offsite 2\n");
        assert_eq!(session.catalog().points("Offsite"), Some(2.0));
    }

    #[test]
    fn test_duplicate_add_reports_error() {
        let (_, output) = run("add Hackathon 3\nquit\n");
        assert!(output.contains("error: Event 'Hackathon' already exists"));
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let (session, output) = run("delete Design Crit\nn\nquit\n");
        assert!(output.contains("Aborted."));
        assert!(session.catalog().contains("Design Crit"));

        let (session, output) = run("delete Design Crit\ny\nquit\n");
        assert!(output.contains("Deleted 'Design Crit' (2 records removed)"));
        assert!(!session.catalog().contains("Design Crit"));
        assert_eq!(session.score("EMP-3321").unwrap().score, 76.0);
    }

    #[test]
    fn test_rename_and_points() {
        let (session, output) = run("rename Design Crit -> Design Review\npoints Design Review 6\nshow EMP-3321\n");
        assert!(output.contains("Renamed 'Design Crit' to 'Design Review'"));
        assert!(output.contains("Design Review [2024-03-04]: +6"));
        assert_eq!(session.score("EMP-3321").unwrap().score, 82.0);
    }

    #[test]
    fn test_weights_with_warning() {
        let (session, output) = run("weights 2 5\n");
        assert!(output.contains("warning: scoring.penalty_weight"));
        assert_eq!(session.scoring(), ScoringConfig::new(2.0, 5.0));
        assert_eq!(session.score("EMP-3321").unwrap().score, 76.0);
    }

    #[test]
    fn test_parse_error_keeps_going() {
        let (_, output) = run("bogus\nshow NOPE\nquit\n");
        assert!(output.contains("error: unknown command 'bogus'"));
        assert!(output.contains("error: no subject 'NOPE'"));
    }
}
