use serde::{Deserialize, Serialize};

/// A subject's participation outcome for one occurrence of an event.
///
/// The point value is resolved against the current catalog at scoring time,
/// so edits to an event's base points apply retroactively.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct AttendanceRecord {
    pub event_name: String,
    pub attended: bool,
    /// ISO date (YYYY-MM-DD), or empty when unknown
    #[serde(default)]
    pub date: String,
}

/// The employee or team being scored.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Subject {
    pub id: String,

    /// Role or team label shown next to the id
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Starting score, 0-100
    pub base_score: f64,

    /// Inactivity decay in points, before `penalty_weight` is applied
    #[serde(default)]
    pub inactivity_penalty: f64,

    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}

impl Subject {
    /// Display label: the name when present, otherwise the id.
    pub fn label(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.id)
    }

    /// Count of (attended, total) records.
    pub fn attendance(&self) -> (usize, usize) {
        let attended = self.records.iter().filter(|r| r.attended).count();
        (attended, self.records.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subject_parse_with_defaults() {
        let yaml = r#"
id: EMP-1102
base_score: 83
"#;
        let subject: Subject = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(subject.id, "EMP-1102");
        assert!(subject.name.is_none());
        assert_eq!(subject.inactivity_penalty, 0.0);
        assert!(subject.records.is_empty());
        assert_eq!(subject.label(), "EMP-1102");
    }

    #[test]
    fn test_record_date_optional() {
        let yaml = r#"{ event_name: "Hackathon", attended: true }"#;
        let record: AttendanceRecord = serde_saphyr::from_str(yaml).unwrap();
        assert!(record.attended);
        assert!(record.date.is_empty());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = r#"
id: EMP-1
base_score: 50
score: 99
"#;
        assert!(serde_saphyr::from_str::<Subject>(yaml).is_err());
    }

    #[test]
    fn test_attendance_counts() {
        let subject = Subject {
            id: "EMP-1".to_string(),
            name: Some("QA Specialist".to_string()),
            base_score: 50.0,
            inactivity_penalty: 0.0,
            records: vec![
                AttendanceRecord {
                    event_name: "A".to_string(),
                    attended: true,
                    date: String::new(),
                },
                AttendanceRecord {
                    event_name: "B".to_string(),
                    attended: false,
                    date: String::new(),
                },
            ],
        };
        assert_eq!(subject.attendance(), (1, 2));
        assert_eq!(subject.label(), "QA Specialist");
    }
}
