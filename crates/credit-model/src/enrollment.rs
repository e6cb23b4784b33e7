//! Student enrollment rows.

use serde::{Deserialize, Serialize};

/// One enrolled class for one student. A student appears once per class.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    pub student_id: String,
    pub student_name: Option<String>,
    pub year: Option<String>,
    pub class_id: Option<String>,
    /// Enrolled time-of-day as stored; only used for conflict detection.
    pub time: Option<String>,
}

impl EnrollmentRecord {
    pub fn new(student_id: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            ..Self::default()
        }
    }

    /// Case-insensitive substring match against the student id or name.
    /// A blank term matches nobody.
    pub fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return false;
        }
        if self.student_id.to_lowercase().contains(&needle) {
            return true;
        }
        self.student_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(&needle))
    }
}
