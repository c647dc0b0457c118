//! Shift calendar and process mapping rows

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::UNMAPPED_SEQUENCE;
use crate::impl_label_conversions;
use crate::types::record::ShiftDesignation;

/// Staffing assignment for one calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftCalendarEntry {
    /// Calendar date
    pub date: NaiveDate,
    /// Crew letter on the day shift (single letter or empty)
    #[serde(default)]
    pub day_shift: String,
    /// Crew letter on the night shift (single letter or empty)
    #[serde(default)]
    pub night_shift: String,
}

impl ShiftCalendarEntry {
    /// Calendar row for one date.
    pub fn new(
        date: NaiveDate,
        day_shift: impl Into<String>,
        night_shift: impl Into<String>,
    ) -> Self {
        Self { date, day_shift: day_shift.into(), night_shift: night_shift.into() }
    }

    /// Crew letter for the given shift half.
    #[must_use]
    pub fn letter_for(&self, designation: ShiftDesignation) -> &str {
        match designation {
            ShiftDesignation::Day => &self.day_shift,
            ShiftDesignation::Night => &self.night_shift,
        }
    }
}

/// One row of the process mapping table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessMappingEntry {
    /// Raw description as it appears in timekeeping exports (join key)
    pub raw_description: String,
    /// Coarse grouping, e.g. "BT Process"
    pub category: String,
    /// Canonical process name
    pub process_name: String,
    /// Display ordering only
    pub sequence: i64,
}

/// How a raw process description was resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappingStatus {
    /// Found in the mapping table
    Matched,
    /// Not in the table; categorized by keyword heuristics
    NotFoundAutoCategorized,
    /// Blank description
    Empty,
}

impl_label_conversions!(MappingStatus {
    Matched => "matched",
    NotFoundAutoCategorized => "not_found_auto_categorized",
    Empty => "empty",
});

/// Normalized (category, name, sequence) triple for a process description
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResolution {
    /// Resolved category
    pub category: String,
    /// Resolved canonical name
    pub process_name: String,
    /// Display ordering
    pub sequence: i64,
    /// How the description was resolved
    pub status: MappingStatus,
}

impl ProcessResolution {
    /// Resolution for a missing or blank description.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            category: String::new(),
            process_name: String::new(),
            sequence: UNMAPPED_SEQUENCE,
            status: MappingStatus::Empty,
        }
    }
}

impl From<&ProcessMappingEntry> for ProcessResolution {
    fn from(entry: &ProcessMappingEntry) -> Self {
        Self {
            category: entry.category.clone(),
            process_name: entry.process_name.clone(),
            sequence: entry.sequence,
            status: MappingStatus::Matched,
        }
    }
}
