//! Error types for table ingestion.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Which input table an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    /// The class catalog.
    Classes,
    /// The student enrollment table.
    Enrollments,
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Classes => write!(f, "classes"),
            Self::Enrollments => write!(f, "enrollments"),
        }
    }
}

/// A required semantic column could not be located in a table header.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{table} table has no {field} column (expected a header containing {keywords})")]
    MissingColumn {
        table: TableKind,
        field: &'static str,
        keywords: String,
    },
}

/// Errors that can occur while loading input tables.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file metadata or contents.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is neither CSV nor a spreadsheet format.
    #[error("unsupported file format '{extension}' for {path} (expected csv, xlsx, xlsm, xlsb, xls or ods)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    // === Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Failed to open or read a spreadsheet.
    #[error("failed to read spreadsheet {path}: {message}")]
    Spreadsheet { path: PathBuf, message: String },

    /// Spreadsheet has no worksheets.
    #[error("spreadsheet has no worksheets: {path}")]
    NoWorksheet { path: PathBuf },

    /// Table has a header but no data rows, or nothing at all.
    #[error("table is empty: {path}")]
    EmptyTable { path: PathBuf },

    // === Schema Errors ===
    /// A required column is missing.
    #[error(transparent)]
    Schema(#[from] SchemaError),

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;
