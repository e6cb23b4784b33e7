//! Matching through to export text and message template.

use credit_match::find_credit_classes;
use credit_model::{
    ClassCatalog, ClassRecord, EnrollmentRecord, FinderOptions, FinderQuery, ResultSection, Tier,
};
use credit_report::{build_report, format_results_for_export, message_template};

fn class(id: &str, subject: &str, stream: &str, ability: &str, day: &str, time: &str) -> ClassRecord {
    ClassRecord {
        subject: Some(subject.to_string()),
        stream: Some(stream.to_string()),
        ability: Some(ability.to_string()),
        year: Some("7".to_string()),
        day: Some(day.to_string()),
        start_time: Some(time.to_string()),
        class_type: Some("group".to_string()),
        status: Some("active".to_string()),
        ..ClassRecord::new(id)
    }
}

fn enroll(class_id: &str, time: &str) -> EnrollmentRecord {
    EnrollmentRecord {
        student_name: Some("Amira Haddad".to_string()),
        year: Some("7".to_string()),
        class_id: Some(class_id.to_string()),
        time: Some(time.to_string()),
        ..EnrollmentRecord::new("S1")
    }
}

fn catalog() -> ClassCatalog {
    let mut long = class("MB1", "Maths", "b", "higher", "monday", "09:00:00");
    long.duration = Some("90".to_string());
    ClassCatalog::new(
        vec![
            class("MA1", "Maths", "a", "higher", "monday", "08:00:00"),
            long,
            class("MB2", "Maths", "b", "higher", "tuesday", "13:00:00"),
            class("EA1", "English", "a", "core", "friday", "11:00:00"),
        ],
        true,
    )
}

#[test]
fn replacement_search_renders_export_and_message() {
    let catalog = catalog();
    let enrollments = vec![enroll("MA1", "08:00:00"), enroll("EA1", "11:00:00")];
    let options = FinderOptions {
        occasion: Some("Christmas Day".to_string()),
        ..FinderOptions::default()
    };
    let query = FinderQuery::search("amira").with_missed_class(Some("MA1"));

    let outcomes = find_credit_classes(&catalog, &enrollments, &query, &options);
    let report = build_report(&outcomes, &options);

    let ResultSection::Student { tier, .. } = &report.sections[0] else {
        panic!("expected a student section");
    };
    assert_eq!(*tier, Some(Tier::Tier1));

    insta::assert_snapshot!(format_results_for_export(&report), @r"
    CREDIT CLASS FINDER - RESULTS
    ================================================================================

    Student: Amira Haddad (ID: S1) - Year 7
    --------------------------------------------------------------------------------

    Available Credit Classes: 2

      [1] Maths (Stream B) - Higher
          Monday @ 9:00 AM - 10:30 AM | ClassID: MB1

      [2] Maths (Stream B) - Higher
          Tuesday @ 1:00 PM - 2:00 PM | ClassID: MB2
    ");

    assert_eq!(
        message_template(&report, options.occasion.as_deref()).as_deref(),
        Some(
            "This is regarding Amira Haddad's cancelled Maths lesson on Christmas Day. \
             We'd like to arrange a replacement class for them on Monday at 9:00 AM - 10:30 AM \
             or Tuesday at 1:00 PM - 2:00 PM. Please let us know if this works for you, \
             and we'll happily book it in.\n\nBest regards,"
        )
    );
}

#[test]
fn unknown_student_renders_not_found() {
    let catalog = catalog();
    let enrollments = vec![enroll("MA1", "08:00:00")];
    let options = FinderOptions::default();

    let outcomes = find_credit_classes(&catalog, &enrollments, &FinderQuery::search("zed"), &options);
    let report = build_report(&outcomes, &options);

    assert!(report.has_errors());
    assert!(
        format_results_for_export(&report).contains("No student found matching 'zed'\n")
    );
    assert_eq!(message_template(&report, None), None);
}

#[test]
fn export_is_stable_across_runs() {
    let catalog = catalog();
    let enrollments = vec![enroll("MA1", "08:00:00")];
    let options = FinderOptions::default();
    let render = || {
        let outcomes = find_credit_classes(&catalog, &enrollments, &FinderQuery::all(), &options);
        format_results_for_export(&build_report(&outcomes, &options))
    };

    assert_eq!(render(), render());
}
