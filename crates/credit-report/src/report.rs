//! Conversion of matcher outcomes into display-ready report sections.

use std::collections::BTreeSet;

use credit_match::{FinderOutcome, StudentMatch};
use credit_model::{
    ClassRecord, CreditClassOption, FinderOptions, MatchReport, ResultSection, StudentSummary,
};

use crate::text::title_case;
use crate::time::{NOT_AVAILABLE, format_time_range};

const UNKNOWN_YEAR: &str = "Unknown";

/// Note shown for a student holding both streams of some subjects.
pub fn dual_stream_note(subjects: &BTreeSet<String>) -> Option<String> {
    if subjects.is_empty() {
        return None;
    }
    let list = subjects.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
    Some(format!("Student has BOTH Stream A and Stream B in: {list}"))
}

/// Display form of a selected class.
pub fn format_option(class: &ClassRecord, default_duration: i64) -> CreditClassOption {
    CreditClassOption {
        class_id: class.id.clone(),
        subject: class.subject.clone().unwrap_or_default(),
        stream: class
            .stream
            .as_deref()
            .map(str::to_uppercase)
            .unwrap_or_default(),
        ability: class.ability.as_deref().map(title_case).unwrap_or_default(),
        day: class
            .day
            .as_deref()
            .map_or_else(|| NOT_AVAILABLE.to_string(), title_case),
        time: format_time_range(
            class.start_time.as_deref(),
            class.duration.as_deref(),
            default_duration,
        ),
    }
}

fn student_section(found: &StudentMatch<'_>, options: &FinderOptions) -> ResultSection {
    let profile = &found.profile;
    let dual = profile.dual_stream_subjects();
    let student = StudentSummary {
        id: profile.student_id.clone(),
        name: profile.name.clone(),
        year: profile
            .year
            .clone()
            .unwrap_or_else(|| UNKNOWN_YEAR.to_string()),
        note: dual_stream_note(&dual),
        dual_stream_subjects: dual.into_iter().collect(),
    };
    ResultSection::Student {
        student,
        tier: found.tier,
        options: found
            .classes
            .iter()
            .map(|class| format_option(class, options.default_duration_minutes))
            .collect(),
        missed_class: found.missed_class.clone(),
    }
}

/// Builds the report for a list of outcomes, keeping their order.
pub fn build_report(outcomes: &[FinderOutcome<'_>], options: &FinderOptions) -> MatchReport {
    let sections = outcomes
        .iter()
        .map(|outcome| match outcome {
            FinderOutcome::Student(found) => student_section(found, options),
            FinderOutcome::StudentNotFound { term } => {
                ResultSection::StudentNotFound { term: term.clone() }
            }
            FinderOutcome::MissedClassNotFound { class_id } => ResultSection::MissedClassNotFound {
                class_id: class_id.clone(),
            },
        })
        .collect();
    MatchReport::new(sections)
}
