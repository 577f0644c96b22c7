use super::types::{AttendanceRecord, Subject};
use crate::catalog::EventDefinition;

fn record(event_name: &str, attended: bool, date: &str) -> AttendanceRecord {
    AttendanceRecord {
        event_name: event_name.to_string(),
        attended,
        date: date.to_string(),
    }
}

fn subject(
    id: &str,
    name: &str,
    base_score: f64,
    inactivity_penalty: f64,
    records: Vec<AttendanceRecord>,
) -> Subject {
    Subject {
        id: id.to_string(),
        name: Some(name.to_string()),
        base_score,
        inactivity_penalty,
        records,
    }
}

/// Seed event catalog used by `--demo` and `init`.
pub fn demo_events() -> Vec<EventDefinition> {
    [
        ("Accessibility Workshop", 4.0),
        ("All Hands", 1.0),
        ("Design Crit", 4.0),
        ("Hackathon", 10.0),
        ("Mentoring Session", 5.0),
        ("Security Training", 3.0),
    ]
    .into_iter()
    .map(|(name, base_points)| EventDefinition {
        name: name.to_string(),
        base_points,
    })
    .collect()
}

/// Seed subjects used by `--demo` and `init`.
pub fn demo_subjects() -> Vec<Subject> {
    vec![
        subject(
            "EMP-9921",
            "Dev Team A",
            85.0,
            0.0,
            vec![
                record("Hackathon", true, "2024-02-10"),
                record("Security Training", true, "2024-02-21"),
                record("All Hands", true, "2024-03-01"),
            ],
        ),
        subject(
            "EMP-3321",
            "Design Lead",
            78.0,
            2.0,
            vec![
                record("Design Crit", true, "2024-03-04"),
                record("Accessibility Workshop", false, "2024-03-12"),
            ],
        ),
        subject(
            "EMP-1102",
            "Backend Eng",
            80.0,
            5.0,
            vec![
                record("Security Training", true, "2024-02-21"),
                record("Hackathon", false, "2024-02-10"),
                record("All Hands", true, "2024-03-01"),
            ],
        ),
        subject(
            "EMP-4402",
            "QA Specialist",
            62.0,
            15.0,
            vec![
                record("All Hands", true, "2024-03-01"),
                record("Security Training", false, "2024-02-21"),
                record("Mentoring Session", true, "2024-03-08"),
            ],
        ),
        subject(
            "EMP-5511",
            "Product Mgr",
            88.0,
            0.0,
            vec![
                record("Mentoring Session", true, "2024-03-08"),
                record("All Hands", true, "2024-03-01"),
                record("Design Crit", true, "2024-03-04"),
            ],
        ),
    ]
}
