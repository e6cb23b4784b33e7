//! Per-student derived view of the enrollment table.

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

/// Subject → stream → abilities the student already attends.
///
/// Ordered maps keep every derived list (dual-stream subjects, notes)
/// deterministic across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoverageMap {
    subjects: BTreeMap<String, BTreeMap<String, BTreeSet<String>>>,
}

impl CoverageMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subject: &str, stream: &str, ability: &str) {
        self.subjects
            .entry(subject.to_string())
            .or_default()
            .entry(stream.to_string())
            .or_default()
            .insert(ability.to_string());
    }

    pub fn has_subject(&self, subject: &str) -> bool {
        self.subjects.contains_key(subject)
    }

    pub fn has_stream(&self, subject: &str, stream: &str) -> bool {
        self.subjects
            .get(subject)
            .is_some_and(|streams| streams.contains_key(stream))
    }

    /// True if the ability is already covered for this exact subject and stream.
    pub fn covers(&self, subject: &str, stream: &str, ability: &str) -> bool {
        self.subjects
            .get(subject)
            .and_then(|streams| streams.get(stream))
            .is_some_and(|abilities| abilities.contains(ability))
    }

    /// True if the ability is covered by any stream of the subject.
    pub fn covers_in_any_stream(&self, subject: &str, ability: &str) -> bool {
        self.subjects
            .get(subject)
            .is_some_and(|streams| streams.values().any(|set| set.contains(ability)))
    }

    /// Number of distinct streams held for a subject.
    pub fn stream_count(&self, subject: &str) -> usize {
        self.subjects.get(subject).map_or(0, BTreeMap::len)
    }

    /// A subject is dual-stream when the student holds two or more of its streams.
    pub fn is_dual_stream(&self, subject: &str) -> bool {
        self.stream_count(subject) >= 2
    }

    pub fn dual_stream_subjects(&self) -> BTreeSet<String> {
        self.subjects
            .iter()
            .filter(|(_, streams)| streams.len() >= 2)
            .map(|(subject, _)| subject.clone())
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.subjects.is_empty()
    }
}

/// Everything the classifier needs to know about one student.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StudentProfile {
    pub student_id: String,
    pub name: String,
    pub year: Option<String>,
    pub enrolled_class_ids: BTreeSet<String>,
    pub enrolled_times: BTreeSet<String>,
    pub coverage: CoverageMap,
    /// Abilities across every enrolled class, regardless of subject.
    pub abilities: BTreeSet<String>,
}

impl StudentProfile {
    pub fn is_enrolled_in(&self, class_id: &str) -> bool {
        self.enrolled_class_ids.contains(class_id)
    }

    /// Exact equality on the stored time value; day of week is not considered.
    pub fn has_time_conflict(&self, time: &str) -> bool {
        self.enrolled_times.contains(time)
    }

    pub fn knows_ability(&self, ability: &str) -> bool {
        self.abilities.contains(ability)
    }

    pub fn dual_stream_subjects(&self) -> BTreeSet<String> {
        self.coverage.dual_stream_subjects()
    }
}
