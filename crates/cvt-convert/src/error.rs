use std::fmt;

use cvt_core::Value;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable, machine-readable codes for conversion failures.
///
/// These codes are intended for programmatic handling, while the error's
/// `Display` remains human-oriented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The input's shape has no rule for the requested target.
    ConversionFail,
    /// Right shape, but the value exceeds the target's range.
    OutOfRange,
    FieldNotFound,
    /// `nil` where the operation needs an actual value.
    UnsupportedNil,
    UnparsableDate,
    InvalidJson,
}

impl ErrorCode {
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorCode::ConversionFail => "conversion_fail",
            ErrorCode::OutOfRange => "out_of_range",
            ErrorCode::FieldNotFound => "field_not_found",
            ErrorCode::UnsupportedNil => "unsupported_nil",
            ErrorCode::UnparsableDate => "unparsable_date",
            ErrorCode::InvalidJson => "invalid_json",
        }
    }
}

/// Bound that a value crossed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Limit {
    Int(i128),
    Float(f64),
}

impl fmt::Display for Limit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Limit::Int(n) => write!(f, "{n}"),
            Limit::Float(x) => write!(f, "{x}"),
        }
    }
}

/// Inner reason of a [`ConvertError`], reachable through `Error::source()`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Cause {
    #[error("convert failed")]
    ConversionFail,
    #[error("out of limit value({limit})")]
    OutOfRange { limit: Limit },
    #[error("field not found({field})")]
    FieldNotFound { field: String },
    #[error("unsupported type: nil")]
    UnsupportedNil,
    #[error("unable to parse date: {input}")]
    UnparsableDate { input: String },
    #[error("invalid json: {message}")]
    InvalidJson { message: String },
}

impl Cause {
    pub fn code(&self) -> ErrorCode {
        match self {
            Cause::ConversionFail => ErrorCode::ConversionFail,
            Cause::OutOfRange { .. } => ErrorCode::OutOfRange,
            Cause::FieldNotFound { .. } => ErrorCode::FieldNotFound,
            Cause::UnsupportedNil => ErrorCode::UnsupportedNil,
            Cause::UnparsableDate { .. } => ErrorCode::UnparsableDate,
            Cause::InvalidJson { .. } => ErrorCode::InvalidJson,
        }
    }
}

/// A failed conversion.
///
/// Carries a rendering of the original input, its dynamic type, the target
/// that was attempted and the inner cause.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertError {
    value: String,
    type_name: String,
    target: &'static str,
    cause: Cause,
}

impl ConvertError {
    pub fn new(val: &Value, target: &'static str, cause: Cause) -> Self {
        tracing::trace!(target_type = target, code = cause.code().as_str(), "conversion failed");
        Self {
            value: val.to_string(),
            type_name: val.type_name(),
            target,
            cause,
        }
    }

    /// Plain "no rule for this shape" failure.
    pub fn fail(val: &Value, target: &'static str) -> Self {
        Self::new(val, target, Cause::ConversionFail)
    }

    pub fn code(&self) -> ErrorCode {
        self.cause.code()
    }

    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    pub fn target(&self) -> &'static str {
        self.target
    }

    /// Rendering of the input value.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The crossed bound, for `OutOfRange` failures.
    pub fn limit(&self) -> Option<Limit> {
        match self.cause {
            Cause::OutOfRange { limit } => Some(limit),
            _ => None,
        }
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(self.cause, Cause::OutOfRange { .. })
    }
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unable to convert {} of type {} to {}",
            self.value, self.type_name, self.target
        )?;
        match &self.cause {
            Cause::ConversionFail => Ok(()),
            other => write!(f, ", {other}"),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.cause)
    }
}
