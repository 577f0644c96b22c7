use crate::catalog::parse_points;

/// Operator command entered in an interactive session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    List,
    Show(String),
    Events,
    Tiers,
    Summary,
    Add { name: String, points: f64 },
    Rename { old_name: String, new_name: String },
    Delete(String),
    Points { name: String, points: f64 },
    Weights { event_weight: f64, penalty_weight: f64 },
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  list                      ranked scores
  show ID                   score breakdown for one subject
  events                    event catalog
  tiers                     tier thresholds
  summary                   dashboard totals
  add NAME POINTS           add an event
  rename OLD -> NEW         rename an event everywhere
  delete NAME               delete an event and its records
  points NAME POINTS        change an event's base points
  weights EVENT PENALTY     set the global multipliers
  help                      this text
  quit                      leave the session";

/// Parse one input line. Event names may contain spaces; the point value is
/// always the last word.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "list" | "ls" => Ok(Command::List),
        "events" => Ok(Command::Events),
        "tiers" => Ok(Command::Tiers),
        "summary" => Ok(Command::Summary),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        "show" => non_empty(rest, "show ID").map(Command::Show),
        "delete" | "rm" => non_empty(rest, "delete NAME").map(Command::Delete),
        "add" => {
            let (name, points) = name_and_points(rest, "add NAME POINTS")?;
            Ok(Command::Add { name, points })
        }
        "points" => {
            let (name, points) = name_and_points(rest, "points NAME POINTS")?;
            Ok(Command::Points { name, points })
        }
        "rename" => {
            let (old_name, new_name) = rest
                .split_once("->")
                .map(|(old, new)| (old.trim(), new.trim()))
                .filter(|(old, new)| !old.is_empty() && !new.is_empty())
                .ok_or_else(|| "usage: rename OLD -> NEW".to_string())?;
            Ok(Command::Rename {
                old_name: old_name.to_string(),
                new_name: new_name.to_string(),
            })
        }
        "weights" => {
            let parts: Vec<&str> = rest.split_whitespace().collect();
            match parts.as_slice() {
                [event, penalty] => Ok(Command::Weights {
                    event_weight: parse_weight(event)?,
                    penalty_weight: parse_weight(penalty)?,
                }),
                _ => Err("usage: weights EVENT PENALTY".to_string()),
            }
        }
        "" => Err("empty command, type 'help'".to_string()),
        other => Err(format!("unknown command '{}', type 'help'", other)),
    }
}

fn non_empty(rest: &str, usage: &str) -> Result<String, String> {
    if rest.is_empty() {
        Err(format!("usage: {}", usage))
    } else {
        Ok(rest.to_string())
    }
}

fn name_and_points(rest: &str, usage: &str) -> Result<(String, f64), String> {
    let (name, literal) = rest
        .rsplit_once(char::is_whitespace)
        .map(|(name, literal)| (name.trim(), literal))
        .filter(|(name, _)| !name.is_empty())
        .ok_or_else(|| format!("usage: {}", usage))?;
    if literal.parse::<f64>().is_err() {
        return Err(format!("'{}' is not a number", literal));
    }
    Ok((name.to_string(), parse_points(literal)))
}

fn parse_weight(literal: &str) -> Result<f64, String> {
    literal
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| format!("'{}' is not a number", literal))
}
