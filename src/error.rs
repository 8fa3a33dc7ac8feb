use std::num::{IntErrorKind, ParseIntError};

use serde::Serialize;
use thiserror::Error;

use crate::consts::DIAGNOSTIC_PREFIX;

/// Broad class of a record failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    /// Wrong number of comma-separated fields
    Format,
    /// A field is not a valid integer or duration
    Parse,
    /// A parsed value violates a domain constraint
    Validation,
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("invalid data format: expected {expected} values, got {got}, data: {data:?}")]
    Format {
        expected: usize,
        got: usize,
        data: String,
    },

    #[error("strconv.Atoi: parsing {input:?}: {}", int_error_reason(.source))]
    Steps {
        input: String,
        #[source]
        source: ParseIntError,
    },

    #[error("step count must be greater than zero")]
    NonPositiveSteps,

    #[error("{0}")]
    Duration(#[from] DurationError),
}

impl RecordError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RecordError::Format { .. } => ErrorKind::Format,
            RecordError::Steps { .. } | RecordError::Duration(_) => ErrorKind::Parse,
            RecordError::NonPositiveSteps => ErrorKind::Validation,
        }
    }

    /// User-facing line for a record that could not be processed
    pub fn diagnostic(&self) -> String {
        format!("{DIAGNOSTIC_PREFIX}: {self}")
    }
}

fn int_error_reason(err: &ParseIntError) -> &'static str {
    match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => "value out of range",
        _ => "invalid syntax",
    }
}

/// Quote text for duration errors: printable ASCII kept,
/// `"` and `\` escaped, every byte of a control or non-ASCII character
/// written as `\xNN`.
fn quote_ascii(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if !c.is_ascii() || c < ' ' {
            let mut buf = [0u8; 4];
            for b in c.encode_utf8(&mut buf).bytes() {
                out.push_str(&format!("\\x{b:02x}"));
            }
        } else {
            if c == '"' || c == '\\' {
                out.push('\\');
            }
            out.push(c);
        }
    }
    out.push('"');
    out
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("time: invalid duration {}", quote_ascii(.input))]
    Invalid { input: String },

    #[error("time: missing unit in duration {}", quote_ascii(.input))]
    MissingUnit { input: String },

    #[error("time: unknown unit {} in duration {}", quote_ascii(.unit), quote_ascii(.input))]
    UnknownUnit { unit: String, input: String },
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Missing {name}: pass --{name} or set `{name}` in the config file")]
    MissingBiometric { name: &'static str },

    #[error("Failed to read records from {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
