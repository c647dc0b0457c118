//! Conversions from external infrastructure errors into domain errors.

use std::io::{Error as IoError, ErrorKind};

use csv::Error as CsvError;
use serde_json::Error as JsonError;
use shiftpulse_domain::ShiftPulseError;
use toml::de::Error as TomlDeError;
use toml::ser::Error as TomlSerError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub ShiftPulseError);

impl From<InfraError> for ShiftPulseError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ShiftPulseError> for InfraError {
    fn from(value: ShiftPulseError) -> Self {
        InfraError(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoShiftPulseError {
    fn into_shiftpulse(self) -> ShiftPulseError;
}

/* -------------------------------------------------------------------------- */
/* std::io::Error → ShiftPulseError */
/* -------------------------------------------------------------------------- */

impl IntoShiftPulseError for IoError {
    fn into_shiftpulse(self) -> ShiftPulseError {
        match self.kind() {
            ErrorKind::NotFound => ShiftPulseError::NotFound(format!("file not found: {self}")),
            ErrorKind::PermissionDenied => {
                ShiftPulseError::Io(format!("permission denied: {self}"))
            }
            ErrorKind::InvalidData => ShiftPulseError::Parse(format!("invalid data: {self}")),
            _ => ShiftPulseError::Io(self.to_string()),
        }
    }
}

impl From<IoError> for InfraError {
    fn from(value: IoError) -> Self {
        InfraError(value.into_shiftpulse())
    }
}

/* -------------------------------------------------------------------------- */
/* csv::Error → ShiftPulseError */
/* -------------------------------------------------------------------------- */

impl IntoShiftPulseError for CsvError {
    fn into_shiftpulse(self) -> ShiftPulseError {
        let line = self.position().map(csv::Position::line);
        let located = |message: String| match line {
            Some(line) => format!("line {line}: {message}"),
            None => message,
        };

        match self.kind() {
            csv::ErrorKind::Io(err) => ShiftPulseError::Io(format!("csv read failed: {err}")),
            csv::ErrorKind::UnequalLengths { expected_len, len, .. } => {
                ShiftPulseError::InvalidInput(located(format!(
                    "expected {expected_len} fields, found {len}"
                )))
            }
            csv::ErrorKind::Deserialize { err, .. } => {
                ShiftPulseError::InvalidInput(located(err.to_string()))
            }
            csv::ErrorKind::Utf8 { err, .. } => {
                ShiftPulseError::InvalidInput(located(format!("invalid UTF-8: {err}")))
            }
            csv::ErrorKind::Serialize(message) => {
                ShiftPulseError::Internal(format!("csv write failed: {message}"))
            }
            _ => ShiftPulseError::Parse(located(self.to_string())),
        }
    }
}

impl From<CsvError> for InfraError {
    fn from(value: CsvError) -> Self {
        InfraError(value.into_shiftpulse())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ShiftPulseError */
/* -------------------------------------------------------------------------- */

impl IntoShiftPulseError for JsonError {
    fn into_shiftpulse(self) -> ShiftPulseError {
        use serde_json::error::Category;

        match self.classify() {
            Category::Io => ShiftPulseError::Io(format!("json read failed: {self}")),
            Category::Syntax | Category::Eof => {
                ShiftPulseError::Parse(format!("invalid JSON: {self}"))
            }
            Category::Data => {
                ShiftPulseError::InvalidInput(format!("unexpected JSON data: {self}"))
            }
        }
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        InfraError(value.into_shiftpulse())
    }
}

/* -------------------------------------------------------------------------- */
/* toml errors → ShiftPulseError */
/* -------------------------------------------------------------------------- */

impl IntoShiftPulseError for TomlDeError {
    fn into_shiftpulse(self) -> ShiftPulseError {
        ShiftPulseError::Parse(format!("invalid TOML: {}", self.message()))
    }
}

impl From<TomlDeError> for InfraError {
    fn from(value: TomlDeError) -> Self {
        InfraError(value.into_shiftpulse())
    }
}

impl IntoShiftPulseError for TomlSerError {
    fn into_shiftpulse(self) -> ShiftPulseError {
        ShiftPulseError::Internal(format!("failed to serialize TOML: {self}"))
    }
}

impl From<TomlSerError> for InfraError {
    fn from(value: TomlSerError) -> Self {
        InfraError(value.into_shiftpulse())
    }
}
