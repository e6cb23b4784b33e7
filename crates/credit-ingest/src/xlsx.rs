//! Spreadsheet reading (xlsx, xlsm, xls, ods) through calamine.
//!
//! The first worksheet is read; its first non-empty row is the header. Cells
//! are converted to canonical text before they reach Polars, so spreadsheet
//! time values arrive as `HH:MM:SS` just like a time typed into a CSV.

use std::collections::BTreeSet;
use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use chrono::{Duration, NaiveDate, NaiveTime};
use credit_common::format_numeric;
use polars::prelude::*;

use crate::csv::{ensure_readable, validate_dataframe_shape};
use crate::error::{IngestError, Result};

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Reads the first worksheet of a spreadsheet into a DataFrame of text columns.
pub fn read_spreadsheet_table(path: &Path) -> Result<DataFrame> {
    ensure_readable(path)?;

    let mut workbook = open_workbook_auto(path).map_err(|e| IngestError::Spreadsheet {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let sheet = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| IngestError::NoWorksheet {
            path: path.to_path_buf(),
        })?;
    let range = workbook
        .worksheet_range(&sheet)
        .map_err(|e| IngestError::Spreadsheet {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

    let mut rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_text).collect::<Vec<_>>())
        .filter(|row| row.iter().any(Option::is_some));

    let Some(header_row) = rows.next() else {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    };
    let headers = unique_headers(&header_row);
    let mut columns: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for row in rows {
        for (idx, values) in columns.iter_mut().enumerate() {
            values.push(row.get(idx).cloned().flatten());
        }
    }

    let columns: Vec<Column> = headers
        .iter()
        .zip(columns)
        .map(|(name, values)| Series::new(name.as_str().into(), values).into_column())
        .collect();
    let df = DataFrame::new(columns)?;

    validate_dataframe_shape(&df, path)?;
    tracing::debug!(
        path = %path.display(),
        sheet = %sheet,
        rows = df.height(),
        columns = df.width(),
        "spreadsheet table loaded"
    );
    Ok(df)
}

/// Converts a calamine cell to canonical text; empty and error cells are missing.
fn cell_to_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty | Data::Error(_) => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => format_numeric(*f),
        Data::Bool(b) => if *b { "Y" } else { "N" }.to_string(),
        Data::DateTime(dt) => serial_to_text(dt.as_f64()),
        Data::DateTimeIso(s) => s.trim().to_string(),
        Data::DurationIso(s) => s.trim().to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

/// Renders a spreadsheet date serial. A pure time of day (serial below one)
/// becomes `HH:MM:SS`; anything with a date part becomes `YYYY-MM-DD HH:MM:SS`.
fn serial_to_text(serial: f64) -> String {
    if !serial.is_finite() || serial < 0.0 {
        return format_numeric(serial);
    }
    let days = serial.trunc();
    let seconds = ((serial - days) * SECONDS_PER_DAY).round() as i64;
    let (days, seconds) = if seconds >= 86_400 {
        (days + 1.0, seconds - 86_400)
    } else {
        (days, seconds)
    };
    let Some(time) = u32::try_from(seconds)
        .ok()
        .and_then(|secs| NaiveTime::from_num_seconds_from_midnight_opt(secs, 0))
    else {
        return format_numeric(serial);
    };
    if days == 0.0 {
        return time.format("%H:%M:%S").to_string();
    }
    let Some(epoch) = NaiveDate::from_ymd_opt(1899, 12, 30) else {
        return format_numeric(serial);
    };
    match epoch.checked_add_signed(Duration::days(days as i64)) {
        Some(date) => format!("{} {}", date.format("%Y-%m-%d"), time.format("%H:%M:%S")),
        None => format_numeric(serial),
    }
}

/// Header names: blanks get a positional name and repeats get a numeric suffix,
/// since a DataFrame cannot hold two columns with the same name.
fn unique_headers(row: &[Option<String>]) -> Vec<String> {
    let mut seen = BTreeSet::new();
    row.iter()
        .enumerate()
        .map(|(idx, cell)| {
            let base = cell
                .clone()
                .unwrap_or_else(|| format!("column_{}", idx + 1));
            let mut name = base.clone();
            let mut suffix = 2;
            while !seen.insert(name.clone()) {
                name = format!("{base}_{suffix}");
                suffix += 1;
            }
            name
        })
        .collect()
}
