//! Rule configuration loaded from TOML.
//!
//! ```toml
//! class_type = "group"
//! active_status = "active"
//! default_duration_minutes = 60
//! occasion = "Christmas Day"
//! ```
//!
//! Every key is optional; missing keys keep the built-in defaults.

use std::fs;
use std::path::{Path, PathBuf};

use credit_model::FinderOptions;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("default_duration_minutes must be positive, got {0}")]
    InvalidDuration(i64),
}

/// Parses options from TOML text.
pub fn parse_options(text: &str) -> Result<FinderOptions, toml::de::Error> {
    toml::from_str(text)
}

fn validate(options: FinderOptions) -> Result<FinderOptions, ConfigError> {
    if options.default_duration_minutes <= 0 {
        return Err(ConfigError::InvalidDuration(options.default_duration_minutes));
    }
    Ok(options)
}

/// Loads options from a config file, or the defaults when no file is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed, or if it sets a
/// non-positive default duration.
pub fn load_options(path: Option<&Path>) -> Result<FinderOptions, ConfigError> {
    let Some(path) = path else {
        return Ok(FinderOptions::default());
    };
    let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let options = parse_options(&text).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), "loaded finder options");
    validate(options)
}
