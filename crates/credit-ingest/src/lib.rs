//! Class catalog and enrollment ingestion.
//!
//! This crate loads the two input tables into Polars DataFrames, resolves
//! their loosely named columns to semantic fields, and extracts typed records
//! for the matching engine.
//!
//! # Features
//!
//! - **Table Loading**: CSV through Polars, spreadsheets (xlsx/xls/ods) through calamine
//! - **Schema Resolution**: keyword-based column detection into typed schema structs
//! - **Record Extraction**: canonical-text [`ClassRecord`]s and [`EnrollmentRecord`]s
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use credit_ingest::{load_catalog, load_enrollments};
//!
//! let catalog = load_catalog(Path::new("data/classes.xlsx"))?;
//! let enrollments = load_enrollments(Path::new("data/students.csv"))?;
//! ```
//!
//! [`ClassRecord`]: credit_model::ClassRecord
//! [`EnrollmentRecord`]: credit_model::EnrollmentRecord

mod csv;
mod error;
mod records;
mod schema;
mod table;
mod xlsx;

// === Error Types ===
pub use error::{IngestError, Result, SchemaError, TableKind};

// === Table Loading ===
pub use csv::read_csv_table;
pub use table::{SourceFormat, load_table};
pub use xlsx::read_spreadsheet_table;

// === Schema Resolution ===
pub use schema::{CatalogSchema, EnrollmentSchema, find_column};

// === Record Extraction ===
pub use records::{load_catalog, load_enrollments, read_catalog, read_enrollments};
