pub mod demo;
pub mod types;

pub use demo::{demo_events, demo_subjects};
pub use types::{AttendanceRecord, Subject};
