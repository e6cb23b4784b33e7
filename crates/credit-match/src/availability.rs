//! Candidate pool selection.

use credit_model::{ClassCatalog, ClassRecord, FinderOptions, StudentProfile};

/// Catalog classes in the given year with the eligible type and status.
///
/// The type/status predicate is only applied when the catalog has both
/// columns. A student without a year gets an empty pool.
pub fn candidate_pool<'a>(
    catalog: &'a ClassCatalog,
    year: Option<&str>,
    options: &FinderOptions,
) -> Vec<&'a ClassRecord> {
    let Some(year) = year else {
        return Vec::new();
    };
    catalog
        .classes
        .iter()
        .filter(|class| class.year.as_deref() == Some(year))
        .filter(|class| {
            !catalog.filters_type_and_status
                || (class.has_class_type(&options.class_type)
                    && class.has_status(&options.active_status))
        })
        .collect()
}

/// True when a pool class must not be offered to the student: it has no id,
/// it is already enrolled, it is the missed class, or its time equals an
/// enrolled time.
pub fn is_excluded(
    class: &ClassRecord,
    profile: &StudentProfile,
    missed_class_id: Option<&str>,
) -> bool {
    if class.id.is_empty() || profile.is_enrolled_in(&class.id) {
        return true;
    }
    if missed_class_id == Some(class.id.as_str()) {
        return true;
    }
    class
        .start_time
        .as_deref()
        .is_some_and(|time| profile.has_time_conflict(time))
}

/// Classes the student could attend, in catalog order.
pub fn available_classes<'a>(
    catalog: &'a ClassCatalog,
    profile: &StudentProfile,
    missed_class_id: Option<&str>,
    options: &FinderOptions,
) -> Vec<&'a ClassRecord> {
    let pool = candidate_pool(catalog, profile.year.as_deref(), options);
    let pool_size = pool.len();
    let available: Vec<_> = pool
        .into_iter()
        .filter(|class| !is_excluded(class, profile, missed_class_id))
        .collect();
    tracing::debug!(
        student_id = %profile.student_id,
        pool = pool_size,
        available = available.len(),
        "candidate pool filtered"
    );
    available
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class(id: &str, year: &str, class_type: &str, status: &str) -> ClassRecord {
        ClassRecord {
            year: Some(year.to_string()),
            class_type: Some(class_type.to_string()),
            status: Some(status.to_string()),
            ..ClassRecord::new(id)
        }
    }

    fn ids(classes: &[&ClassRecord]) -> Vec<String> {
        classes.iter().map(|class| class.id.clone()).collect()
    }

    fn catalog(filters: bool) -> ClassCatalog {
        ClassCatalog::new(
            vec![
                class("C1", "7", "Group", "Active"),
                class("C2", "7", "Private", "Active"),
                class("C3", "7", "group", "Cancelled"),
                class("C4", "8", "Group", "Active"),
                class("C5", "7", "GROUP", "ACTIVE"),
            ],
            filters,
        )
    }

    #[test]
    fn pool_filters_year_type_and_status() {
        let catalog = catalog(true);
        let pool = candidate_pool(&catalog, Some("7"), &FinderOptions::default());
        assert_eq!(ids(&pool), vec!["C1", "C5"]);
    }

    #[test]
    fn pool_skips_type_and_status_without_both_columns() {
        let catalog = catalog(false);
        let pool = candidate_pool(&catalog, Some("7"), &FinderOptions::default());
        assert_eq!(ids(&pool), vec!["C1", "C2", "C3", "C5"]);
    }

    #[test]
    fn pool_is_empty_without_year() {
        let catalog = catalog(true);
        assert!(candidate_pool(&catalog, None, &FinderOptions::default()).is_empty());
    }

    #[test]
    fn pool_uses_configured_type() {
        let catalog = catalog(true);
        let options = FinderOptions {
            class_type: "private".to_string(),
            ..FinderOptions::default()
        };
        assert_eq!(ids(&candidate_pool(&catalog, Some("7"), &options)), vec!["C2"]);
    }

    #[test]
    fn excludes_enrolled_missed_and_conflicting_classes() {
        let profile = StudentProfile {
            student_id: "S1".to_string(),
            year: Some("7".to_string()),
            enrolled_class_ids: ["C1".to_string()].into(),
            enrolled_times: ["09:00:00".to_string()].into(),
            ..StudentProfile::default()
        };
        let enrolled = ClassRecord::new("C1");
        let missed = ClassRecord::new("C2");
        let clash = ClassRecord {
            start_time: Some("09:00:00".to_string()),
            ..ClassRecord::new("C3")
        };
        let near_miss = ClassRecord {
            start_time: Some("09:00".to_string()),
            ..ClassRecord::new("C4")
        };

        assert!(is_excluded(&enrolled, &profile, None));
        assert!(is_excluded(&missed, &profile, Some("C2")));
        assert!(!is_excluded(&missed, &profile, None));
        assert!(is_excluded(&clash, &profile, None));
        assert!(!is_excluded(&near_miss, &profile, None));
        assert!(is_excluded(&ClassRecord::new(""), &profile, None));
    }
}
