//! Query parameters and rule configuration.

use serde::{Deserialize, Serialize};

/// Duration used when a class has no numeric duration.
pub const DEFAULT_DURATION_MINUTES: i64 = 60;

/// Which students a query processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentSelector {
    /// Case-insensitive substring of the student id or name.
    Search(String),
    /// Every distinct student id, in order of first appearance.
    All,
}

/// Inputs of one credit-class search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinderQuery {
    pub selector: StudentSelector,
    /// When set, replacement mode is used for this missed class.
    pub missed_class_id: Option<String>,
}

impl FinderQuery {
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            selector: StudentSelector::Search(term.into()),
            missed_class_id: None,
        }
    }

    pub fn all() -> Self {
        Self {
            selector: StudentSelector::All,
            missed_class_id: None,
        }
    }

    /// Switches the query to replacement mode. Blank ids are ignored.
    #[must_use]
    pub fn with_missed_class(mut self, class_id: Option<&str>) -> Self {
        self.missed_class_id = class_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string);
        self
    }
}

/// Tunable rule constants. Every field has a built-in default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinderOptions {
    /// Class type a candidate must have (compared ignoring case).
    pub class_type: String,
    /// Status a candidate must have (compared ignoring case).
    pub active_status: String,
    /// Minutes added to the start time when a class has no usable duration.
    pub default_duration_minutes: i64,
    /// Occasion named in message templates, e.g. "Christmas Day".
    pub occasion: Option<String>,
}

impl Default for FinderOptions {
    fn default() -> Self {
        Self {
            class_type: "group".to_string(),
            active_status: "active".to_string(),
            default_duration_minutes: DEFAULT_DURATION_MINUTES,
            occasion: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_missed_class_is_general_mode() {
        let query = FinderQuery::search("amira").with_missed_class(Some("   "));
        assert_eq!(query.missed_class_id, None);

        let query = FinderQuery::all().with_missed_class(Some(" C12 "));
        assert_eq!(query.missed_class_id.as_deref(), Some("C12"));
    }

    #[test]
    fn options_fill_missing_fields_with_defaults() {
        let options: FinderOptions =
            serde_json::from_str(r#"{"occasion": "Christmas Day"}"#).unwrap();
        assert_eq!(options.class_type, "group");
        assert_eq!(options.active_status, "active");
        assert_eq!(options.default_duration_minutes, 60);
        assert_eq!(options.occasion.as_deref(), Some("Christmas Day"));
    }
}
