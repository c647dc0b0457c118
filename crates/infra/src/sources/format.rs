//! File format detection and generic row reading/writing
//!
//! - CSV: header row, one record per line, cells trimmed
//! - JSON: a top-level array of objects
//! - TOML: an array of tables under a source-specific key (`[[records]]`,
//!   `[[calendar]]`, `[[mappings]]`)

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use shiftpulse_domain::{Result, ShiftPulseError};

use crate::errors::InfraError;

/// Supported tabular file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Comma-separated with a header row
    Csv,
    /// Array of row objects
    Json,
    /// Array of tables under a per-table key
    Toml,
}

impl FileFormat {
    /// Detect the format from a file extension (case-insensitive)
    ///
    /// # Errors
    /// Returns `ShiftPulseError::InvalidInput` for missing or unknown
    /// extensions.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        match extension.as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            "toml" => Ok(Self::Toml),
            _ => Err(ShiftPulseError::InvalidInput(format!(
                "unsupported file format for {} (expected .csv, .json or .toml)",
                path.display()
            ))),
        }
    }
}

/// Read every row of a tabular file
pub(crate) fn read_rows<T: DeserializeOwned>(path: &Path, toml_key: &str) -> Result<Vec<T>> {
    let format = FileFormat::from_path(path)?;
    let file = File::open(path).map_err(InfraError::from)?;

    let rows = match format {
        FileFormat::Csv => {
            let mut reader =
                csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(BufReader::new(file));
            let mut rows = Vec::new();
            for row in reader.deserialize() {
                rows.push(row.map_err(InfraError::from)?);
            }
            rows
        }
        FileFormat::Json => {
            serde_json::from_reader(BufReader::new(file)).map_err(InfraError::from)?
        }
        FileFormat::Toml => {
            let contents = std::fs::read_to_string(path).map_err(InfraError::from)?;
            let mut document: toml::Table = toml::from_str(&contents).map_err(InfraError::from)?;
            match document.remove(toml_key) {
                Some(value) => value.try_into().map_err(InfraError::from)?,
                None => Vec::new(),
            }
        }
    };

    tracing::debug!(path = %path.display(), rows = rows.len(), "Rows read");
    Ok(rows)
}

/// Overwrite a tabular file with `rows`
///
/// The file is written to a sibling temporary file first and renamed into
/// place, so readers never see a half-written table.
pub(crate) fn write_rows<T: Serialize>(path: &Path, toml_key: &str, rows: &[T]) -> Result<()> {
    let bytes = match FileFormat::from_path(path)? {
        FileFormat::Csv => {
            let mut writer = csv::Writer::from_writer(Vec::new());
            for row in rows {
                writer.serialize(row).map_err(InfraError::from)?;
            }
            writer
                .into_inner()
                .map_err(|e| ShiftPulseError::Io(format!("csv write failed: {e}")))?
        }
        FileFormat::Json => serde_json::to_vec_pretty(rows).map_err(InfraError::from)?,
        FileFormat::Toml => {
            let mut document = toml::Table::new();
            let value = toml::Value::try_from(rows).map_err(InfraError::from)?;
            document.insert(toml_key.to_string(), value);
            toml::to_string(&document).map_err(InfraError::from)?.into_bytes()
        }
    };

    let mut staging = path.as_os_str().to_owned();
    staging.push(".tmp");
    std::fs::write(&staging, bytes).map_err(InfraError::from)?;
    std::fs::rename(&staging, path).map_err(InfraError::from)?;

    tracing::debug!(path = %path.display(), rows = rows.len(), "Rows written");
    Ok(())
}
