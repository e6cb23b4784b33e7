//! CSV file reading into Polars DataFrames.

use std::path::Path;

use polars::prelude::*;

use crate::error::{IngestError, Result};

/// Checks that the path exists and is a readable file.
pub(crate) fn ensure_readable(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    if !metadata.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

/// Validate DataFrame shape after loading.
///
/// Checks for:
/// - Empty DataFrame (no columns or no rows)
/// - Warns about blank column names, which the schema resolver can never match
pub(crate) fn validate_dataframe_shape(df: &DataFrame, path: &Path) -> Result<()> {
    if df.width() == 0 || df.height() == 0 {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    }

    let blank = df
        .get_column_names()
        .iter()
        .filter(|name| name.trim().is_empty())
        .count();
    if blank > 0 {
        tracing::warn!(
            path = %path.display(),
            blank_columns = blank,
            "table has columns without a header"
        );
    }

    Ok(())
}

/// Reads a CSV file with a single header row into a Polars DataFrame.
///
/// Column types are inferred from the first 100 rows; the matcher later reads
/// every cell back as canonical text, so inference only affects how numbers
/// are rendered (`7.0` and `7` both become `"7"`).
pub fn read_csv_table(path: &Path) -> Result<DataFrame> {
    ensure_readable(path)?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(100))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    validate_dataframe_shape(&df, path)?;
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "csv table loaded"
    );
    Ok(df)
}
