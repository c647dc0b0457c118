//! File-backed shift calendar source

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;
use shiftpulse_core::ports::ShiftCalendarSource;
use shiftpulse_domain::types::ShiftCalendarEntry;
use shiftpulse_domain::{Result, ShiftPulseError};
use tracing::info;

use super::format::read_rows;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Deserialize)]
struct CalendarRow {
    date: String,
    #[serde(default)]
    day_shift: Option<String>,
    #[serde(default)]
    night_shift: Option<String>,
}

fn into_entry(row: usize, raw: CalendarRow) -> Result<ShiftCalendarEntry> {
    let date = NaiveDate::parse_from_str(raw.date.trim(), DATE_FORMAT).map_err(|e| {
        ShiftPulseError::invalid_row(row, format!("invalid date '{}': {e}", raw.date))
    })?;
    let letter = |cell: Option<String>| cell.map(|s| s.trim().to_uppercase()).unwrap_or_default();

    Ok(ShiftCalendarEntry::new(date, letter(raw.day_shift), letter(raw.night_shift)))
}

/// Reads the shift calendar from a `.csv`, `.json` or `.toml` file
///
/// Columns: `date, day_shift, night_shift`. Entries are returned in file
/// order; duplicate dates are resolved by the calendar (last wins).
#[derive(Debug, Clone)]
pub struct FileShiftCalendarSource {
    path: PathBuf,
}

impl FileShiftCalendarSource {
    /// Source reading the calendar file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the calendar file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ShiftCalendarSource for FileShiftCalendarSource {
    fn load_calendar(&self) -> Result<Vec<ShiftCalendarEntry>> {
        let rows: Vec<CalendarRow> = read_rows(&self.path, "calendar")?;
        let entries = rows
            .into_iter()
            .enumerate()
            .map(|(index, raw)| into_entry(index + 1, raw))
            .collect::<Result<Vec<_>>>()?;

        info!(path = %self.path.display(), entries = entries.len(), "Shift calendar loaded");
        Ok(entries)
    }
}
