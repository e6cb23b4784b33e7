//! Plain-text export of a match report.

use std::fmt::Write;

use credit_model::{CreditClassOption, MatchReport, ResultSection, StudentSummary};

/// Width of the `=` and `-` rules.
pub const RULE_WIDTH: usize = 80;

const TITLE: &str = "CREDIT CLASS FINDER - RESULTS";

fn write_student(text: &mut String, student: &StudentSummary, options: &[CreditClassOption]) {
    let _ = writeln!(
        text,
        "Student: {} (ID: {}) - Year {}",
        student.name, student.id, student.year
    );
    let _ = writeln!(text, "{}", "-".repeat(RULE_WIDTH));
    if let Some(note) = &student.note {
        let _ = write!(text, "{note}\n\n");
    }
    text.push('\n');

    if options.is_empty() {
        text.push_str("No classes available to be credits\n\n");
    } else {
        let _ = write!(text, "Available Credit Classes: {}\n\n", options.len());
        for (idx, option) in options.iter().enumerate() {
            let _ = writeln!(
                text,
                "  [{}] {} (Stream {}) - {}",
                idx + 1,
                option.subject,
                option.stream,
                option.ability
            );
            let _ = write!(
                text,
                "      {} @ {} | ClassID: {}\n\n",
                option.day, option.time, option.class_id
            );
        }
    }
}

/// Renders the report as the fixed plain-text export, sections in report order.
pub fn format_results_for_export(report: &MatchReport) -> String {
    let mut text = String::new();
    let _ = write!(text, "{TITLE}\n{}\n\n", "=".repeat(RULE_WIDTH));

    for section in &report.sections {
        match section {
            ResultSection::Student {
                student, options, ..
            } => write_student(&mut text, student, options),
            ResultSection::StudentNotFound { term } => {
                let _ = write!(text, "No student found matching '{term}'\n\n");
            }
            ResultSection::MissedClassNotFound { class_id } => {
                let _ = write!(text, "Missed class not found: {class_id}\n\n");
            }
        }
        text.push('\n');
    }
    text
}
