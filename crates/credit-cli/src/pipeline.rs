//! Load, match and render in one call.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use credit_ingest::{CatalogSchema, EnrollmentSchema, load_table, read_catalog, read_enrollments};
use credit_match::find_credit_classes;
use credit_model::{ClassCatalog, EnrollmentRecord, FinderOptions, FinderQuery, MatchReport};
use credit_report::{build_report, format_results_for_export, message_template};
use serde::Serialize;
use tracing::{info, info_span};

/// Everything needed to answer one search.
#[derive(Debug, Clone)]
pub struct FindRequest {
    pub classes: PathBuf,
    pub students: PathBuf,
    pub query: FinderQuery,
    pub options: FinderOptions,
}

/// Report plus its rendered text outputs.
#[derive(Debug, Clone)]
pub struct FindOutput {
    pub report: MatchReport,
    pub export_text: String,
    pub message: Option<String>,
}

/// Column bindings of both input tables.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSchemas {
    pub classes: CatalogSchema,
    pub students: EnrollmentSchema,
}

/// Loads the class catalog and the enrollment table.
pub fn load_inputs(classes: &Path, students: &Path) -> Result<(ClassCatalog, Vec<EnrollmentRecord>)> {
    let _span = info_span!("ingest").entered();
    let catalog_df =
        load_table(classes).with_context(|| format!("load classes {}", classes.display()))?;
    let catalog = read_catalog(&catalog_df).context("read class catalog")?;
    let students_df =
        load_table(students).with_context(|| format!("load students {}", students.display()))?;
    let enrollments = read_enrollments(&students_df).context("read enrollments")?;
    info!(
        classes = catalog.len(),
        enrollments = enrollments.len(),
        "inputs loaded"
    );
    Ok((catalog, enrollments))
}

/// Resolves the column schemas of both tables without matching.
pub fn resolve_schemas(classes: &Path, students: &Path) -> Result<ResolvedSchemas> {
    let catalog_df =
        load_table(classes).with_context(|| format!("load classes {}", classes.display()))?;
    let students_df =
        load_table(students).with_context(|| format!("load students {}", students.display()))?;
    Ok(ResolvedSchemas {
        classes: CatalogSchema::resolve(&catalog_df.get_column_names_str())
            .context("resolve class columns")?,
        students: EnrollmentSchema::resolve(&students_df.get_column_names_str())
            .context("resolve student columns")?,
    })
}

/// Runs a search end to end.
pub fn run_find(request: &FindRequest) -> Result<FindOutput> {
    let start = Instant::now();
    let (catalog, enrollments) = load_inputs(&request.classes, &request.students)?;

    let report = {
        let _span = info_span!("match").entered();
        let outcomes =
            find_credit_classes(&catalog, &enrollments, &request.query, &request.options);
        build_report(&outcomes, &request.options)
    };
    let export_text = format_results_for_export(&report);
    let message = message_template(&report, request.options.occasion.as_deref());

    info!(
        sections = report.sections.len(),
        students = report.student_count(),
        errors = report.has_errors(),
        duration_ms = start.elapsed().as_millis(),
        "search complete"
    );
    Ok(FindOutput {
        report,
        export_text,
        message,
    })
}
