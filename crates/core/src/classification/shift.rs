//! Shift classification
//!
//! The Day window is `[day_start, day_end)`. Everything else is Night;
//! activity before `day_start` belongs to the night shift that started on
//! the previous calendar date.

use chrono::{NaiveDateTime, NaiveTime};
use shiftpulse_domain::constants::{DAY_SHIFT_END_HOUR, DAY_SHIFT_START_HOUR};
use shiftpulse_domain::types::{ActivityRecord, ShiftDesignation, WorkingShift};

/// Maps timestamps to working shifts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftClassifier {
    day_start: NaiveTime,
    day_end: NaiveTime,
}

impl Default for ShiftClassifier {
    fn default() -> Self {
        let day_start =
            NaiveTime::from_hms_opt(DAY_SHIFT_START_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
        let day_end = NaiveTime::from_hms_opt(DAY_SHIFT_END_HOUR, 0, 0).unwrap_or(NaiveTime::MIN);
        Self { day_start, day_end }
    }
}

impl ShiftClassifier {
    /// Classifier with a custom Day window; `day_start` must precede `day_end`
    #[must_use]
    pub const fn new(day_start: NaiveTime, day_end: NaiveTime) -> Self {
        Self { day_start, day_end }
    }

    /// Start of the day shift, inclusive
    #[must_use]
    pub const fn day_start(&self) -> NaiveTime {
        self.day_start
    }

    /// End of the day shift, exclusive
    #[must_use]
    pub const fn day_end(&self) -> NaiveTime {
        self.day_end
    }

    /// Working shift of a timestamp
    #[must_use]
    pub fn classify(&self, timestamp: NaiveDateTime) -> WorkingShift {
        let date = timestamp.date();
        let time = timestamp.time();

        if time >= self.day_start && time < self.day_end {
            WorkingShift { working_day: date, designation: ShiftDesignation::Day }
        } else if time < self.day_start {
            // Early-morning tail of the previous day's night shift
            let working_day = date.pred_opt().unwrap_or(date);
            WorkingShift { working_day, designation: ShiftDesignation::Night }
        } else {
            WorkingShift { working_day: date, designation: ShiftDesignation::Night }
        }
    }

    /// Working shift of an optional timestamp
    #[must_use]
    pub fn classify_opt(&self, timestamp: Option<NaiveDateTime>) -> Option<WorkingShift> {
        timestamp.map(|ts| self.classify(ts))
    }

    /// Working shift of a record, keyed on its start (or end if start is absent)
    #[must_use]
    pub fn classify_record(&self, record: &ActivityRecord) -> Option<WorkingShift> {
        self.classify_opt(record.classification_timestamp())
    }
}
