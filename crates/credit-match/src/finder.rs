//! Query execution over all selected students.

use std::collections::HashSet;
use std::time::Instant;

use credit_model::{
    ClassCatalog, ClassRecord, EnrollmentRecord, FinderOptions, FinderQuery,
    MissedClassDescriptor, StudentProfile, StudentSelector, Tier,
};

use crate::availability::available_classes;
use crate::classify::{RuleSet, classify};
use crate::profile::build_profile;

/// Matching result for one student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentMatch<'a> {
    pub profile: StudentProfile,
    /// Winning tier, `None` when no candidate qualified.
    pub tier: Option<Tier>,
    /// Classes of the winning tier, in catalog order.
    pub classes: Vec<&'a ClassRecord>,
    pub missed_class: Option<MissedClassDescriptor>,
}

/// One entry of a query result, in processing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FinderOutcome<'a> {
    Student(StudentMatch<'a>),
    /// The search term matched no student.
    StudentNotFound { term: String },
    /// The missed class id has no catalog row with a subject and stream.
    MissedClassNotFound { class_id: String },
}

/// Distinct student ids selected by the query, in order of first appearance.
pub fn select_students<'e>(
    enrollments: &'e [EnrollmentRecord],
    selector: &StudentSelector,
) -> Vec<&'e str> {
    let mut seen = HashSet::new();
    enrollments
        .iter()
        .filter(|record| match selector {
            StudentSelector::All => true,
            StudentSelector::Search(term) => record.matches_search(term),
        })
        .map(|record| record.student_id.as_str())
        .filter(|id| seen.insert(*id))
        .collect()
}

fn resolve_missed_class(
    catalog: &ClassCatalog,
    class_id: &str,
) -> Option<MissedClassDescriptor> {
    let Some(class) = catalog.find(class_id) else {
        tracing::warn!(class_id = %class_id, "missed class is not in the catalog");
        return None;
    };
    let descriptor = MissedClassDescriptor::from_class(class);
    if descriptor.is_none() {
        tracing::warn!(class_id = %class_id, "missed class has no subject or stream");
    }
    descriptor
}

/// Runs a credit-class search.
///
/// A missed class id that does not resolve yields a single
/// [`FinderOutcome::MissedClassNotFound`]; a search term matching nobody
/// yields [`FinderOutcome::StudentNotFound`]. Otherwise there is one
/// [`FinderOutcome::Student`] per selected student.
pub fn find_credit_classes<'a>(
    catalog: &'a ClassCatalog,
    enrollments: &[EnrollmentRecord],
    query: &FinderQuery,
    options: &FinderOptions,
) -> Vec<FinderOutcome<'a>> {
    let start = Instant::now();

    let missed_class = match query.missed_class_id.as_deref() {
        Some(class_id) => match resolve_missed_class(catalog, class_id) {
            Some(descriptor) => Some(descriptor),
            None => {
                return vec![FinderOutcome::MissedClassNotFound {
                    class_id: class_id.to_string(),
                }];
            }
        },
        None => None,
    };

    let students = select_students(enrollments, &query.selector);
    if students.is_empty()
        && let StudentSelector::Search(term) = &query.selector
    {
        tracing::info!(term = %term, "no student matched the search");
        return vec![FinderOutcome::StudentNotFound { term: term.clone() }];
    }

    let rules = RuleSet::for_missed_class(missed_class.as_ref());
    let missed_class_id = missed_class.as_ref().map(|missed| missed.class_id.as_str());
    let mut outcomes = Vec::with_capacity(students.len());
    for student_id in students {
        let Some(profile) = build_profile(enrollments, catalog, student_id) else {
            continue;
        };
        let candidates = available_classes(catalog, &profile, missed_class_id, options);
        let (tier, classes) = classify(&profile, &candidates, rules)
            .into_selected()
            .map_or((None, Vec::new()), |(tier, classes)| (Some(tier), classes));
        tracing::debug!(
            student_id = %student_id,
            tier = ?tier,
            options = classes.len(),
            "student matched"
        );
        outcomes.push(FinderOutcome::Student(StudentMatch {
            profile,
            tier,
            classes,
            missed_class: missed_class.clone(),
        }));
    }

    tracing::info!(
        students = outcomes.len(),
        replacement = missed_class.is_some(),
        duration_ms = start.elapsed().as_millis(),
        "credit class search complete"
    );
    outcomes
}
