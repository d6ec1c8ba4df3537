//! Timestamp configuration loaded from TOML.
//!
//! ```toml
//! offset = "+08:00"
//! formats = ["%d|%m|%Y"]
//! ```

use std::path::{Path, PathBuf};

use chrono::FixedOffset;
use cvt::prelude::{TimeFormat, TimeOptions};
use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Invalid TOML in {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Invalid offset {0:?}: expected Z or ±HH:MM")]
    InvalidOffset(String),
}

/// All fields are optional; absent fields keep the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Offset for inputs without one and for Unix timestamps.
    #[serde(default)]
    pub offset: Option<String>,

    /// Extra strftime layouts, tried after the built-in ones.
    #[serde(default)]
    pub formats: Vec<String>,
}

pub fn load_config(path: &Path) -> Result<ConfigFile, ConfigError> {
    let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

/// Build options from the file, with a command-line offset taking precedence.
pub fn time_options(
    file: &ConfigFile,
    offset_override: Option<&str>,
) -> Result<TimeOptions, ConfigError> {
    let mut opts = TimeOptions::default();
    for pattern in &file.formats {
        opts = opts.with_format(TimeFormat::custom(pattern.as_str()));
    }
    if let Some(offset) = offset_override.or(file.offset.as_deref()) {
        opts = opts.with_offset(parse_offset(offset)?);
    }
    Ok(opts)
}

pub fn parse_offset(s: &str) -> Result<FixedOffset, ConfigError> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("z") || trimmed.eq_ignore_ascii_case("utc") {
        return FixedOffset::east_opt(0).ok_or_else(|| ConfigError::InvalidOffset(s.to_string()));
    }
    trimmed
        .parse::<FixedOffset>()
        .map_err(|_| ConfigError::InvalidOffset(s.to_string()))
}
