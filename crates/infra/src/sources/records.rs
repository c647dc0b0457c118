//! File-backed activity record source

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::Deserialize;
use shiftpulse_core::ports::ActivityRecordSource;
use shiftpulse_domain::types::ActivityRecord;
use shiftpulse_domain::{Result, ShiftPulseError};
use tracing::info;

use super::format::read_rows;

/// Accepted timestamp layouts, tried in order
pub const TIMESTAMP_FORMATS: [&str; 4] =
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"];

/// Rate applied when the `rate` column is absent
const DEFAULT_RATE_PCT: f64 = 100.0;

/// Rework cell as found in CSV, JSON or TOML
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum FlagCell {
    Bool(bool),
    Int(i64),
    Text(String),
}

/// One record row before validation
#[derive(Debug, Deserialize)]
struct RecordRow {
    #[serde(default)]
    worker: String,
    #[serde(default)]
    process: String,
    #[serde(default)]
    start: Option<String>,
    #[serde(default)]
    end: Option<String>,
    #[serde(default)]
    actual_minutes: Option<f64>,
    #[serde(default)]
    standard_time: Option<f64>,
    #[serde(default)]
    rate: Option<f64>,
    #[serde(default)]
    result_cnt: Option<String>,
    #[serde(default)]
    rework: Option<FlagCell>,
}

/// Parse a timestamp cell; empty means absent.
///
/// # Errors
/// Returns `ShiftPulseError::InvalidInput` naming the row if the value
/// matches none of [`TIMESTAMP_FORMATS`].
pub fn parse_timestamp(row: usize, column: &str, value: &str) -> Result<Option<NaiveDateTime>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    TIMESTAMP_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(Some)
        .ok_or_else(|| {
            ShiftPulseError::invalid_row(row, format!("unparseable {column} timestamp '{value}'"))
        })
}

/// Parse a rework flag; empty means `false`.
///
/// # Errors
/// Returns `ShiftPulseError::InvalidInput` naming the row for unknown
/// values.
pub fn parse_rework(row: usize, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "y" | "yes" => Ok(true),
        "false" | "0" | "n" | "no" | "" => Ok(false),
        other => Err(ShiftPulseError::invalid_row(row, format!("invalid rework flag '{other}'"))),
    }
}

fn rework_flag(row: usize, cell: Option<FlagCell>) -> Result<bool> {
    match cell {
        None => Ok(false),
        Some(FlagCell::Bool(flag)) => Ok(flag),
        Some(FlagCell::Int(value)) => parse_rework(row, &value.to_string()),
        Some(FlagCell::Text(text)) => parse_rework(row, &text),
    }
}

fn into_record(row: usize, raw: RecordRow) -> Result<ActivityRecord> {
    let start = parse_timestamp(row, "start", raw.start.as_deref().unwrap_or_default())?;
    let end = parse_timestamp(row, "end", raw.end.as_deref().unwrap_or_default())?;

    Ok(ActivityRecord {
        row,
        worker: raw.worker.trim().to_string(),
        process: raw.process,
        start,
        end,
        actual_minutes: raw.actual_minutes.unwrap_or_default(),
        standard_time: raw.standard_time.unwrap_or_default(),
        rate_pct: raw.rate.unwrap_or(DEFAULT_RATE_PCT),
        result_cnt: raw.result_cnt.unwrap_or_default(),
        rework: rework_flag(row, raw.rework)?,
    })
}

/// Reads activity records from a `.csv`, `.json` or `.toml` file
///
/// Columns: `worker, process, start, end, actual_minutes, standard_time,
/// rate, result_cnt, rework`. Row ordinals are 1-based data rows.
#[derive(Debug, Clone)]
pub struct FileRecordSource {
    path: PathBuf,
}

impl FileRecordSource {
    /// Source reading the records file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the records file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ActivityRecordSource for FileRecordSource {
    fn load_records(&self) -> Result<Vec<ActivityRecord>> {
        let rows: Vec<RecordRow> = read_rows(&self.path, "records")?;
        let records = rows
            .into_iter()
            .enumerate()
            .map(|(index, raw)| into_record(index + 1, raw))
            .collect::<Result<Vec<_>>>()?;

        info!(path = %self.path.display(), records = records.len(), "Activity records loaded");
        Ok(records)
    }
}
