//! Typed record extraction from resolved tables.

use std::path::Path;

use credit_common::column_text;
use credit_model::{ClassCatalog, ClassRecord, EnrollmentRecord};
use polars::prelude::DataFrame;

use crate::error::Result;
use crate::schema::{CatalogSchema, EnrollmentSchema};
use crate::table::load_table;

/// Values of an optional column, or all-missing when the column was not resolved.
fn optional_column(df: &DataFrame, column: Option<&str>) -> Result<Vec<Option<String>>> {
    match column {
        Some(name) => Ok(column_text(df, name)?),
        None => Ok(vec![None; df.height()]),
    }
}

/// Extracts the class catalog from a DataFrame.
///
/// Rows without a class id are dropped: they can neither be offered nor be
/// looked up from an enrollment.
pub fn read_catalog(df: &DataFrame) -> Result<ClassCatalog> {
    let schema = CatalogSchema::resolve(&df.get_column_names_str())?;

    let ids = column_text(df, &schema.class_id)?;
    let mut subjects = column_text(df, &schema.subject)?.into_iter();
    let mut streams = column_text(df, &schema.stream)?.into_iter();
    let mut abilities = column_text(df, &schema.ability)?.into_iter();
    let mut years = column_text(df, &schema.year)?.into_iter();
    let mut days = optional_column(df, schema.day.as_deref())?.into_iter();
    let mut times = optional_column(df, schema.time.as_deref())?.into_iter();
    let mut durations = optional_column(df, schema.duration.as_deref())?.into_iter();
    let mut types = optional_column(df, schema.class_type.as_deref())?.into_iter();
    let mut statuses = optional_column(df, schema.status.as_deref())?.into_iter();

    let mut classes = Vec::with_capacity(ids.len());
    let mut skipped = 0usize;
    for id in ids {
        let record = ClassRecord {
            id: String::new(),
            subject: subjects.next().flatten(),
            stream: streams.next().flatten(),
            ability: abilities.next().flatten(),
            year: years.next().flatten(),
            day: days.next().flatten(),
            start_time: times.next().flatten(),
            duration: durations.next().flatten(),
            class_type: types.next().flatten(),
            status: statuses.next().flatten(),
        };
        match id {
            Some(id) => classes.push(ClassRecord { id, ..record }),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::debug!(skipped, "catalog rows without a class id were ignored");
    }
    tracing::info!(
        classes = classes.len(),
        filters_type_and_status = schema.filters_type_and_status(),
        "class catalog read"
    );
    Ok(ClassCatalog::new(classes, schema.filters_type_and_status()))
}

/// Extracts enrollment records from a DataFrame. Rows without a student id are dropped.
pub fn read_enrollments(df: &DataFrame) -> Result<Vec<EnrollmentRecord>> {
    let schema = EnrollmentSchema::resolve(&df.get_column_names_str())?;

    let student_ids = column_text(df, &schema.student_id)?;
    let mut names = optional_column(df, schema.student_name.as_deref())?.into_iter();
    let mut years = column_text(df, &schema.year)?.into_iter();
    let mut class_ids = column_text(df, &schema.class_id)?.into_iter();
    let mut times = optional_column(df, schema.time.as_deref())?.into_iter();

    let mut records = Vec::with_capacity(student_ids.len());
    let mut skipped = 0usize;
    for student_id in student_ids {
        let student_name = names.next().flatten();
        let year = years.next().flatten();
        let class_id = class_ids.next().flatten();
        let time = times.next().flatten();
        let Some(student_id) = student_id else {
            skipped += 1;
            continue;
        };
        records.push(EnrollmentRecord {
            student_id,
            student_name,
            year,
            class_id,
            time,
        });
    }

    if skipped > 0 {
        tracing::debug!(skipped, "enrollment rows without a student id were ignored");
    }
    tracing::info!(enrollments = records.len(), "enrollments read");
    Ok(records)
}

/// Loads and extracts the class catalog from a CSV or spreadsheet file.
pub fn load_catalog(path: &Path) -> Result<ClassCatalog> {
    let df = load_table(path)?;
    read_catalog(&df)
}

/// Loads and extracts enrollment records from a CSV or spreadsheet file.
pub fn load_enrollments(path: &Path) -> Result<Vec<EnrollmentRecord>> {
    let df = load_table(path)?;
    read_enrollments(&df)
}
