//! Keyword-based schema resolution.
//!
//! Spreadsheet headers vary between schools ("Student ID", "student_id",
//! "StudentID#"), so each semantic field is bound to the first header that
//! contains all of its keywords, ignoring case. Required fields that cannot be
//! bound are a [`SchemaError`]; optional ones resolve to `None` and the
//! matcher falls back to defaults or skips the corresponding filter.

use serde::Serialize;

use crate::error::{SchemaError, TableKind};

/// A semantic field and the keywords its header must contain.
#[derive(Debug, Clone, Copy)]
struct FieldRule {
    field: &'static str,
    keywords: &'static [&'static str],
}

const STUDENT_ID: FieldRule = FieldRule {
    field: "student id",
    keywords: &["student", "id"],
};
const STUDENT_NAME: FieldRule = FieldRule {
    field: "student name",
    keywords: &["student", "name"],
};
const CLASS_ID: FieldRule = FieldRule {
    field: "class id",
    keywords: &["class", "id"],
};
const YEAR: FieldRule = FieldRule {
    field: "year",
    keywords: &["year"],
};
const TIME: FieldRule = FieldRule {
    field: "time",
    keywords: &["time"],
};
const SUBJECT: FieldRule = FieldRule {
    field: "subject",
    keywords: &["subject"],
};
const STREAM: FieldRule = FieldRule {
    field: "stream",
    keywords: &["stream"],
};
const ABILITY: FieldRule = FieldRule {
    field: "ability",
    keywords: &["ability"],
};
const DAY: FieldRule = FieldRule {
    field: "day",
    keywords: &["day"],
};
const CLASS_TYPE: FieldRule = FieldRule {
    field: "class type",
    keywords: &["type"],
};
const STATUS: FieldRule = FieldRule {
    field: "status",
    keywords: &["status"],
};
const DURATION: FieldRule = FieldRule {
    field: "duration",
    keywords: &["duration"],
};

/// Returns the first column whose lower-cased name contains every keyword.
///
/// Keywords must be given in lower case.
pub fn find_column<'a, S: AsRef<str>>(columns: &'a [S], keywords: &[&str]) -> Option<&'a str> {
    columns
        .iter()
        .map(AsRef::<str>::as_ref)
        .find(|name| {
            let lower = name.to_lowercase();
            keywords.iter().all(|keyword| lower.contains(keyword))
        })
}

fn keyword_list(rule: FieldRule) -> String {
    rule.keywords
        .iter()
        .map(|keyword| format!("\"{keyword}\""))
        .collect::<Vec<_>>()
        .join(" and ")
}

fn required<S: AsRef<str>>(
    table: TableKind,
    columns: &[S],
    rule: FieldRule,
) -> Result<String, SchemaError> {
    find_column(columns, rule.keywords)
        .map(str::to_string)
        .ok_or_else(|| SchemaError::MissingColumn {
            table,
            field: rule.field,
            keywords: keyword_list(rule),
        })
}

fn optional<S: AsRef<str>>(table: TableKind, columns: &[S], rule: FieldRule) -> Option<String> {
    let column = find_column(columns, rule.keywords).map(str::to_string);
    if column.is_none() {
        tracing::warn!(
            table = %table,
            field = rule.field,
            "optional column not found; using defaults"
        );
    }
    column
}

/// Resolved columns of the student enrollment table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnrollmentSchema {
    pub student_id: String,
    pub student_name: Option<String>,
    pub class_id: String,
    pub year: String,
    pub time: Option<String>,
}

impl EnrollmentSchema {
    /// Binds the enrollment fields to the given header names.
    pub fn resolve<S: AsRef<str>>(columns: &[S]) -> Result<Self, SchemaError> {
        let table = TableKind::Enrollments;
        Ok(Self {
            student_id: required(table, columns, STUDENT_ID)?,
            student_name: optional(table, columns, STUDENT_NAME),
            class_id: required(table, columns, CLASS_ID)?,
            year: required(table, columns, YEAR)?,
            time: optional(table, columns, TIME),
        })
    }

    /// Field name and bound column, in display order.
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            (STUDENT_ID.field, Some(self.student_id.as_str())),
            (STUDENT_NAME.field, self.student_name.as_deref()),
            (CLASS_ID.field, Some(self.class_id.as_str())),
            (YEAR.field, Some(self.year.as_str())),
            (TIME.field, self.time.as_deref()),
        ]
    }
}

/// Resolved columns of the class catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSchema {
    pub class_id: String,
    pub subject: String,
    pub stream: String,
    pub ability: String,
    pub year: String,
    pub time: Option<String>,
    pub day: Option<String>,
    pub class_type: Option<String>,
    pub status: Option<String>,
    pub duration: Option<String>,
}

impl CatalogSchema {
    /// Binds the catalog fields to the given header names.
    pub fn resolve<S: AsRef<str>>(columns: &[S]) -> Result<Self, SchemaError> {
        let table = TableKind::Classes;
        Ok(Self {
            class_id: required(table, columns, CLASS_ID)?,
            subject: required(table, columns, SUBJECT)?,
            stream: required(table, columns, STREAM)?,
            ability: required(table, columns, ABILITY)?,
            year: required(table, columns, YEAR)?,
            time: optional(table, columns, TIME),
            day: optional(table, columns, DAY),
            class_type: optional(table, columns, CLASS_TYPE),
            status: optional(table, columns, STATUS),
            duration: optional(table, columns, DURATION),
        })
    }

    /// The type/status filter only applies when both columns exist.
    pub fn filters_type_and_status(&self) -> bool {
        self.class_type.is_some() && self.status.is_some()
    }

    /// Field name and bound column, in display order.
    pub fn fields(&self) -> Vec<(&'static str, Option<&str>)> {
        vec![
            (CLASS_ID.field, Some(self.class_id.as_str())),
            (SUBJECT.field, Some(self.subject.as_str())),
            (STREAM.field, Some(self.stream.as_str())),
            (ABILITY.field, Some(self.ability.as_str())),
            (YEAR.field, Some(self.year.as_str())),
            (TIME.field, self.time.as_deref()),
            (DAY.field, self.day.as_deref()),
            (CLASS_TYPE.field, self.class_type.as_deref()),
            (STATUS.field, self.status.as_deref()),
            (DURATION.field, self.duration.as_deref()),
        ]
    }
}
