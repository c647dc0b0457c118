//! Activity records as delivered by ingestion, and their annotated form

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::constants::VALID_RESULT_MARKER;
use crate::impl_label_conversions;
use crate::types::catalog::ProcessResolution;
use crate::utils::normalize::normalize_marker;

/// Shift half a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShiftDesignation {
    /// 06:00 to 18:00
    Day,
    /// 18:00 to 06:00 the following morning
    Night,
}

impl_label_conversions!(ShiftDesignation {
    Day => "Day",
    Night => "Night",
});

/// Logical shift a timestamp belongs to
///
/// `working_day` may precede the calendar date of the timestamp for
/// early-morning night-shift activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkingShift {
    /// Calendar date the shift started on
    pub working_day: NaiveDate,
    /// Day or night half
    pub designation: ShiftDesignation,
}

/// One timekeeping row from the ingestion collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Originating row ordinal, used only for diagnostics
    pub row: usize,
    /// Worker identifier
    pub worker: String,
    /// Raw process description, resolved through the process catalog
    pub process: String,
    /// Start of the interval
    pub start: Option<NaiveDateTime>,
    /// End of the interval
    pub end: Option<NaiveDateTime>,
    /// Reported active minutes (the un-merged original value)
    pub actual_minutes: f64,
    /// Standard time in minutes
    pub standard_time: f64,
    /// Rated performance percentage applied to the standard time
    pub rate_pct: f64,
    /// Opaque result-count marker; only "X" (normalized) is valid
    pub result_cnt: String,
    /// Rework records are excluded from aggregation
    pub rework: bool,
}

impl ActivityRecord {
    /// Whether the result-count marker normalizes to the valid marker.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        normalize_marker(&self.result_cnt) == VALID_RESULT_MARKER
    }

    /// Whether the record has at least one timestamp.
    #[must_use]
    pub const fn has_timestamp(&self) -> bool {
        self.start.is_some() || self.end.is_some()
    }

    /// Timestamp used for shift classification: start, else end.
    #[must_use]
    pub fn classification_timestamp(&self) -> Option<NaiveDateTime> {
        self.start.or(self.end)
    }

    /// The `[start, end)` interval, if both ends are present and ordered.
    #[must_use]
    pub fn interval(&self) -> Option<(NaiveDateTime, NaiveDateTime)> {
        match (self.start, self.end) {
            (Some(start), Some(end)) if start < end => Some((start, end)),
            _ => None,
        }
    }

    /// Both timestamps present but `end <= start`.
    #[must_use]
    pub fn has_inverted_interval(&self) -> bool {
        matches!((self.start, self.end), (Some(start), Some(end)) if end <= start)
    }

    /// Standard time scaled by the rated percentage.
    #[must_use]
    pub fn assigned_standard_time(&self) -> f64 {
        self.standard_time * self.rate_pct / 100.0
    }
}

/// Activity record enriched with shift, staffing and process information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedRecord {
    /// Record as ingested
    pub record: ActivityRecord,
    /// Whether the result marker is valid
    pub is_valid: bool,
    /// `None` when the record has no timestamp at all
    pub shift: Option<WorkingShift>,
    /// Crew letter from the shift calendar; empty when the date is unknown
    pub staffing_letter: String,
    /// Process resolution from the catalog
    pub resolution: ProcessResolution,
    /// Minutes credited after overlap merging
    pub adjusted_minutes: f64,
    /// Whether `adjusted_minutes` came from an overlap group split
    pub is_overlap: bool,
}

impl AnnotatedRecord {
    /// Whether the record contributes to detail aggregation.
    #[must_use]
    pub const fn is_aggregatable(&self) -> bool {
        self.is_valid && !self.record.rework && self.shift.is_some()
    }

    /// Whether the record takes part in per-worker interval merging.
    ///
    /// Eligibility reads timestamps only; invalid results still occupy
    /// wall-clock time. Rework records are left out of every aggregation
    /// step, merging included.
    #[must_use]
    pub fn is_mergeable(&self) -> bool {
        !self.record.rework && self.record.interval().is_some()
    }
}
