//! Enrollment indexing.

use credit_model::{ClassCatalog, EnrollmentRecord, StudentProfile};

/// Display name for a student whose rows carry no name.
pub(crate) const UNKNOWN_STUDENT: &str = "Unknown";

/// Builds the profile of one student from their enrollment rows.
///
/// Rows are selected by exact student id. Name and year come from the first
/// row. Enrolled classes found in the catalog with a subject, stream and
/// ability extend the coverage map and the ability set.
///
/// Returns `None` when the student has no enrollment rows.
pub fn build_profile(
    enrollments: &[EnrollmentRecord],
    catalog: &ClassCatalog,
    student_id: &str,
) -> Option<StudentProfile> {
    let mut rows = enrollments
        .iter()
        .filter(|record| record.student_id == student_id)
        .peekable();
    let first = rows.peek()?;

    let mut profile = StudentProfile {
        student_id: student_id.to_string(),
        name: first
            .student_name
            .clone()
            .unwrap_or_else(|| UNKNOWN_STUDENT.to_string()),
        year: first.year.clone(),
        ..StudentProfile::default()
    };

    for record in rows {
        if let Some(time) = &record.time {
            profile.enrolled_times.insert(time.clone());
        }
        let Some(class_id) = &record.class_id else {
            continue;
        };
        profile.enrolled_class_ids.insert(class_id.clone());

        let Some(lesson) = catalog.find(class_id).and_then(|class| class.lesson()) else {
            tracing::debug!(class_id = %class_id, "enrolled class has no usable catalog row");
            continue;
        };
        profile
            .coverage
            .insert(lesson.subject, lesson.stream, lesson.ability);
        profile.abilities.insert(lesson.ability.to_string());
    }

    Some(profile)
}

#[cfg(test)]
mod tests {
    use credit_model::ClassRecord;

    use super::*;

    fn class(id: &str, subject: &str, stream: &str, ability: &str) -> ClassRecord {
        ClassRecord {
            subject: Some(subject.to_string()),
            stream: Some(stream.to_string()),
            ability: Some(ability.to_string()),
            year: Some("7".to_string()),
            ..ClassRecord::new(id)
        }
    }

    fn enrollment(student: &str, class_id: Option<&str>, time: Option<&str>) -> EnrollmentRecord {
        EnrollmentRecord {
            student_name: Some("Amira".to_string()),
            year: Some("7".to_string()),
            class_id: class_id.map(str::to_string),
            time: time.map(str::to_string),
            ..EnrollmentRecord::new(student)
        }
    }

    fn catalog() -> ClassCatalog {
        ClassCatalog::new(
            vec![
                class("M1", "Maths", "A", "Higher"),
                class("M2", "Maths", "B", "Higher"),
                class("E1", "English", "A", "Core"),
                ClassRecord::new("X1"),
            ],
            false,
        )
    }

    #[test]
    fn indexes_enrolled_classes() {
        let enrollments = vec![
            enrollment("S1", Some("M1"), Some("09:00:00")),
            enrollment("S1", Some("M2"), Some("10:00:00")),
            enrollment("S10", Some("E1"), None),
        ];

        let profile = build_profile(&enrollments, &catalog(), "S1").unwrap();

        assert_eq!(profile.name, "Amira");
        assert_eq!(profile.year.as_deref(), Some("7"));
        assert_eq!(profile.enrolled_class_ids.len(), 2);
        assert!(profile.has_time_conflict("10:00:00"));
        assert!(profile.coverage.is_dual_stream("Maths"));
        assert!(!profile.coverage.has_subject("English"));
        assert!(profile.knows_ability("Higher"));
    }

    #[test]
    fn classes_without_catalog_lesson_still_count_as_enrolled() {
        let enrollments = vec![
            enrollment("S1", Some("X1"), None),
            enrollment("S1", Some("GONE"), None),
            enrollment("S1", None, Some("11:00:00")),
        ];

        let profile = build_profile(&enrollments, &catalog(), "S1").unwrap();

        assert!(profile.is_enrolled_in("X1"));
        assert!(profile.is_enrolled_in("GONE"));
        assert!(profile.coverage.is_empty());
        assert!(profile.abilities.is_empty());
        assert!(profile.has_time_conflict("11:00:00"));
    }

    #[test]
    fn unknown_student_has_no_profile() {
        let enrollments = vec![enrollment("S1", Some("M1"), None)];
        assert!(build_profile(&enrollments, &catalog(), "S2").is_none());
    }

    #[test]
    fn missing_name_defaults_to_unknown() {
        let enrollments = vec![EnrollmentRecord::new("S1")];
        let profile = build_profile(&enrollments, &catalog(), "S1").unwrap();
        assert_eq!(profile.name, UNKNOWN_STUDENT);
        assert_eq!(profile.year, None);
    }
}
