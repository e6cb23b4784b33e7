//! Shared utilities for Credit Class Finder crates.
//!
//! Tables from every source (CSV, spreadsheets) end up as Polars DataFrames.
//! The helpers here turn their cells into the canonical text form the matching
//! engine compares on.

pub mod polars;

pub use polars::{any_to_string, any_to_text, column_text, format_numeric, parse_f64};
