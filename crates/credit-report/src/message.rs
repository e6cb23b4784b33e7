//! Message templates offering replacement classes.

use credit_model::{MatchReport, ResultSection};

/// Joins phrases in natural language: `A`, `A or B`, `A, B, or C`.
pub fn join_options<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [first, second] => format!("{} or {}", first.as_ref(), second.as_ref()),
        [init @ .., last] => {
            let head = init.iter().map(AsRef::<str>::as_ref).collect::<Vec<_>>().join(", ");
            format!("{head}, or {}", last.as_ref())
        }
    }
}

/// Builds the message for the first student section that has options.
///
/// The lesson is named after the missed class when there is one, otherwise
/// after the first option's subject. Returns `None` when no student has any
/// option.
pub fn message_template(report: &MatchReport, occasion: Option<&str>) -> Option<String> {
    let (student, options, missed_class) =
        report.sections.iter().find_map(|section| match section {
            ResultSection::Student {
                student,
                options,
                missed_class,
                ..
            } if !options.is_empty() => Some((student, options, missed_class)),
            _ => None,
        })?;

    let subject = missed_class
        .as_ref()
        .map_or(options[0].subject.as_str(), |missed| {
            missed.display_name.as_str()
        });
    let occasion = occasion
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .map(|text| format!(" on {text}"))
        .unwrap_or_default();
    let phrases: Vec<String> = options.iter().map(|option| option.schedule_phrase()).collect();

    Some(format!(
        "This is regarding {}'s cancelled {subject} lesson{occasion}. \
         We'd like to arrange a replacement class for them on {}. \
         Please let us know if this works for you, and we'll happily book it in.\n\n\
         Best regards,",
        student.name,
        join_options(&phrases)
    ))
}

#[cfg(test)]
mod tests {
    use credit_model::{CreditClassOption, MissedClassDescriptor, StudentSummary};

    use super::*;

    fn option(day: &str, time: &str) -> CreditClassOption {
        CreditClassOption {
            class_id: "C1".to_string(),
            subject: "Science".to_string(),
            stream: "A".to_string(),
            ability: "Core".to_string(),
            day: day.to_string(),
            time: time.to_string(),
        }
    }

    fn section(name: &str, options: Vec<CreditClassOption>) -> ResultSection {
        ResultSection::Student {
            student: StudentSummary {
                id: "S1".to_string(),
                name: name.to_string(),
                year: "7".to_string(),
                note: None,
                dual_stream_subjects: Vec::new(),
            },
            tier: None,
            options,
            missed_class: Some(MissedClassDescriptor {
                class_id: "M1".to_string(),
                subject: "Maths".to_string(),
                stream: "A".to_string(),
                ability: None,
                display_name: "Maths".to_string(),
            }),
        }
    }

    #[test]
    fn joins_with_oxford_comma() {
        assert_eq!(join_options(&["A"]), "A");
        assert_eq!(join_options(&["A", "B"]), "A or B");
        assert_eq!(join_options(&["A", "B", "C"]), "A, B, or C");
        assert_eq!(join_options(&["A", "B", "C", "D"]), "A, B, C, or D");
        assert_eq!(join_options::<&str>(&[]), "");
    }

    #[test]
    fn two_options_message() {
        let report = MatchReport::new(vec![section(
            "Amira",
            vec![
                option("Monday", "9:00 AM - 10:00 AM"),
                option("Tuesday", "1:00 PM - 2:00 PM"),
            ],
        )]);

        let message = message_template(&report, None).unwrap();

        assert_eq!(
            message,
            "This is regarding Amira's cancelled Maths lesson. We'd like to arrange a \
             replacement class for them on Monday at 9:00 AM - 10:00 AM or Tuesday at \
             1:00 PM - 2:00 PM. Please let us know if this works for you, and we'll \
             happily book it in.\n\nBest regards,"
        );
    }

    #[test]
    fn occasion_is_named_when_given() {
        let report = MatchReport::new(vec![section("Amira", vec![option("Friday", "N/A")])]);

        let message = message_template(&report, Some("Christmas Day")).unwrap();

        assert!(message.starts_with(
            "This is regarding Amira's cancelled Maths lesson on Christmas Day. "
        ));
        assert!(message.contains("for them on Friday at N/A."));
    }

    #[test]
    fn uses_first_student_with_options() {
        let report = MatchReport::new(vec![
            section("Ben", Vec::new()),
            section("Amira", vec![option("Friday", "9:00 AM - 10:00 AM")]),
        ]);

        let message = message_template(&report, None).unwrap();

        assert!(message.starts_with("This is regarding Amira's"));
    }

    #[test]
    fn no_options_means_no_message() {
        let report = MatchReport::new(vec![section("Ben", Vec::new())]);
        assert_eq!(message_template(&report, None), None);
        assert_eq!(message_template(&MatchReport::default(), None), None);
    }
}
