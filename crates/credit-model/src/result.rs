//! Ranked credit-class results.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::class::MissedClassDescriptor;

/// Priority bucket for a candidate class. Lower tiers win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    Tier1,
    Tier2,
    Tier3,
}

impl Tier {
    /// All tiers in priority order.
    pub const ALL: [Tier; 3] = [Tier::Tier1, Tier::Tier2, Tier::Tier3];

    #[must_use]
    pub const fn rank(self) -> u8 {
        match self {
            Self::Tier1 => 1,
            Self::Tier2 => 2,
            Self::Tier3 => 3,
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tier {}", self.rank())
    }
}

/// A display-ready replacement class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreditClassOption {
    pub class_id: String,
    pub subject: String,
    /// Upper-cased stream label.
    pub stream: String,
    /// Title-cased ability label.
    pub ability: String,
    /// Title-cased day, or `N/A`.
    pub day: String,
    /// Formatted time range such as `9:00 AM - 10:00 AM`, or `N/A`.
    pub time: String,
}

impl CreditClassOption {
    /// The "`day` at `time`" phrase used by message templates.
    pub fn schedule_phrase(&self) -> String {
        format!("{} at {}", self.day, self.time)
    }
}

/// Header information for one student's results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSummary {
    pub id: String,
    pub name: String,
    pub year: String,
    /// Present when the student holds both streams of at least one subject.
    pub note: Option<String>,
    pub dual_stream_subjects: Vec<String>,
}

/// One entry of a match report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResultSection {
    /// Results for one student. An empty `options` list means no class is available.
    Student {
        student: StudentSummary,
        /// The tier the options were selected from; `None` when nothing qualified.
        tier: Option<Tier>,
        options: Vec<CreditClassOption>,
        missed_class: Option<MissedClassDescriptor>,
    },
    /// The search term matched no student.
    StudentNotFound { term: String },
    /// The missed class id did not resolve to a usable catalog row.
    MissedClassNotFound { class_id: String },
}

impl ResultSection {
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Student { .. })
    }
}

/// Ordered result sections, in student processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    pub sections: Vec<ResultSection>,
}

impl MatchReport {
    pub fn new(sections: Vec<ResultSection>) -> Self {
        Self { sections }
    }

    pub fn has_errors(&self) -> bool {
        self.sections.iter().any(ResultSection::is_error)
    }

    /// Number of student sections (error markers excluded).
    pub fn student_count(&self) -> usize {
        self.sections.iter().filter(|s| !s.is_error()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
