//! CLI argument definitions for the Credit Class Finder.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "credit-finder",
    version,
    about = "Credit Class Finder - find replacement classes for students",
    long_about = "Match students to credit classes from a class catalog and an enrollment table.\n\n\
                  Reads CSV or spreadsheet (xlsx, xls, ods) files and ranks same-year group\n\
                  classes by priority tier, optionally replacing a specific missed class."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow student names in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find credit classes for one or more students.
    Find(FindArgs),

    /// Show which source column each field was resolved to.
    Columns(ColumnsArgs),
}

/// The two input tables.
#[derive(Args)]
pub struct InputArgs {
    /// Class catalog (csv, xlsx, xls, ods).
    #[arg(long = "classes", value_name = "FILE")]
    pub classes: PathBuf,

    /// Student enrollment table (csv, xlsx, xls, ods).
    #[arg(long = "students", value_name = "FILE")]
    pub students: PathBuf,
}

#[derive(Parser)]
pub struct ColumnsArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Print the bindings as JSON instead of a table.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct FindArgs {
    #[command(flatten)]
    pub inputs: InputArgs,

    /// Student name or id to search for (case-insensitive substring).
    #[arg(
        long = "student",
        value_name = "TERM",
        value_parser = non_blank_term,
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub student: Option<String>,

    /// Process every student in the enrollment table.
    #[arg(long = "all")]
    pub all: bool,

    /// Class id the student missed; switches to replacement ranking.
    #[arg(long = "missed-class", value_name = "CLASS_ID")]
    pub missed_class: Option<String>,

    /// Write the plain-text results to this file.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Print a message template offering the found classes.
    #[arg(long = "message")]
    pub message: bool,

    /// Occasion named in the message, e.g. "Christmas Day" (overrides the config file).
    #[arg(long = "occasion", value_name = "TEXT")]
    pub occasion: Option<String>,

    /// TOML file with rule options.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the report as JSON instead of tables.
    #[arg(long = "json")]
    pub json: bool,
}

fn non_blank_term(value: &str) -> Result<String, String> {
    let term = value.trim();
    if term.is_empty() {
        return Err("enter a student name or id, or use --all".to_string());
    }
    Ok(term.to_string())
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
