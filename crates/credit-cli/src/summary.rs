use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use credit_ingest::{CatalogSchema, EnrollmentSchema};
use credit_model::{CreditClassOption, MatchReport, ResultSection, StudentSummary, Tier};

pub fn print_report(report: &MatchReport) {
    if report.is_empty() {
        println!("No students to report.");
        return;
    }
    for section in &report.sections {
        match section {
            ResultSection::Student {
                student,
                tier,
                options,
                ..
            } => print_student(student, *tier, options),
            ResultSection::StudentNotFound { term } => {
                eprintln!("No student found matching '{term}'");
            }
            ResultSection::MissedClassNotFound { class_id } => {
                eprintln!("Missed class not found: {class_id}");
            }
        }
    }
}

fn print_student(student: &StudentSummary, tier: Option<Tier>, options: &[CreditClassOption]) {
    println!();
    println!(
        "Student: {} (ID: {}) - Year {}",
        student.name, student.id, student.year
    );
    if let Some(note) = &student.note {
        println!("{note}");
    }
    if options.is_empty() {
        println!("No classes available to be credits");
        return;
    }
    let tier_label = tier.map_or_else(|| "-".to_string(), |tier| tier.to_string());
    println!("Available credit classes: {} ({tier_label})", options.len());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Subject"),
        header_cell("Stream"),
        header_cell("Ability"),
        header_cell("Day"),
        header_cell("Time"),
        header_cell("Class ID"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Center);
    for (idx, option) in options.iter().enumerate() {
        table.add_row(vec![
            dim_cell(idx + 1),
            Cell::new(&option.subject)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&option.stream),
            Cell::new(&option.ability),
            not_available_cell(&option.day),
            not_available_cell(&option.time),
            Cell::new(&option.class_id),
        ]);
    }
    println!("{table}");
}

pub fn print_schemas(catalog: &CatalogSchema, enrollments: &EnrollmentSchema) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Field"),
        header_cell("Column"),
    ]);
    apply_table_style(&mut table);
    let rows = catalog
        .fields()
        .into_iter()
        .map(|field| ("classes", field))
        .chain(
            enrollments
                .fields()
                .into_iter()
                .map(|field| ("students", field)),
        );
    for (table_name, (field, column)) in rows {
        table.add_row(vec![
            Cell::new(table_name),
            Cell::new(field),
            column.map_or_else(|| dim_cell("-"), |name| Cell::new(name).fg(Color::Green)),
        ]);
    }
    println!("{table}");
    if !catalog.filters_type_and_status() {
        println!("Class type/status filter disabled: both columns are needed.");
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn not_available_cell(value: &str) -> Cell {
    if value == credit_report::NOT_AVAILABLE {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
