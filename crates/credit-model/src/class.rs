//! Class catalog rows.

use serde::{Deserialize, Serialize};

/// One row of the class catalog.
///
/// All values are canonical cell text; `None` marks an empty cell or a column
/// that the schema resolver could not find.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassRecord {
    /// Unique class identifier.
    pub id: String,
    pub subject: Option<String>,
    /// Stream label, e.g. "A" or "B".
    pub stream: Option<String>,
    /// Free-form ability/level label.
    pub ability: Option<String>,
    /// Compared by equality against the student's year.
    pub year: Option<String>,
    pub day: Option<String>,
    /// Start time as stored (usually `HH:MM:SS`).
    pub start_time: Option<String>,
    /// Duration in minutes as stored; non-numeric values fall back to the default.
    pub duration: Option<String>,
    pub class_type: Option<String>,
    pub status: Option<String>,
}

/// The subject/stream/ability triple of a class, present only when all three are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lesson<'a> {
    pub subject: &'a str,
    pub stream: &'a str,
    pub ability: &'a str,
}

impl ClassRecord {
    /// Creates a record with only an identifier set.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    /// Returns the subject/stream/ability triple if none of them is missing.
    pub fn lesson(&self) -> Option<Lesson<'_>> {
        Some(Lesson {
            subject: self.subject.as_deref()?,
            stream: self.stream.as_deref()?,
            ability: self.ability.as_deref()?,
        })
    }

    /// True when the class type equals `expected` ignoring case.
    pub fn has_class_type(&self, expected: &str) -> bool {
        self.class_type
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case(expected))
    }

    /// True when the status equals `expected` ignoring case.
    pub fn has_status(&self, expected: &str) -> bool {
        self.status
            .as_deref()
            .is_some_and(|value| value.eq_ignore_ascii_case(expected))
    }
}

/// The full class catalog plus what the loader learned about its columns.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassCatalog {
    pub classes: Vec<ClassRecord>,
    /// True when both the class-type and status columns were found. When
    /// either is missing, the type/status predicate is skipped entirely.
    pub filters_type_and_status: bool,
}

impl ClassCatalog {
    pub fn new(classes: Vec<ClassRecord>, filters_type_and_status: bool) -> Self {
        Self {
            classes,
            filters_type_and_status,
        }
    }

    /// First class with exactly this id.
    pub fn find(&self, class_id: &str) -> Option<&ClassRecord> {
        self.classes.iter().find(|class| class.id == class_id)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

/// The class a student missed, used to drive replacement mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissedClassDescriptor {
    pub class_id: String,
    pub subject: String,
    pub stream: String,
    pub ability: Option<String>,
    /// Human-facing name of the missed lesson, used in message templates.
    pub display_name: String,
}

impl MissedClassDescriptor {
    /// Builds a descriptor from a catalog row.
    ///
    /// Returns `None` when the row has no subject or no stream, since neither
    /// replacement tier can be computed without them.
    pub fn from_class(class: &ClassRecord) -> Option<Self> {
        let subject = class.subject.clone()?;
        let stream = class.stream.clone()?;
        Some(Self {
            class_id: class.id.clone(),
            display_name: subject.clone(),
            subject,
            stream,
            ability: class.ability.clone(),
        })
    }
}
