//! Shift calendar: date → {day crew, night crew} lookup table

use std::collections::BTreeMap;

use chrono::NaiveDate;
use shiftpulse_domain::types::{ShiftCalendarEntry, WorkingShift};

/// Immutable staffing calendar keyed by date
///
/// Built from a flat ordered list; when a date appears more than once the
/// later entry wins. Edits return a new calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShiftCalendar {
    entries: BTreeMap<NaiveDate, ShiftCalendarEntry>,
}

impl ShiftCalendar {
    /// Create an empty calendar
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a calendar from an ordered list (last entry per date wins)
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ShiftCalendarEntry>,
    {
        let entries = entries.into_iter().map(|entry| (entry.date, entry)).collect();
        Self { entries }
    }

    /// Number of dates in the calendar
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no date is known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry for a date, if present
    #[must_use]
    pub fn get(&self, date: NaiveDate) -> Option<&ShiftCalendarEntry> {
        self.entries.get(&date)
    }

    /// Crew letter for a working shift.
    ///
    /// `None` when the working day is not in the calendar; `Some("")` when
    /// the date is known but the shift half has no crew assigned.
    #[must_use]
    pub fn letter_for(&self, shift: WorkingShift) -> Option<&str> {
        self.get(shift.working_day).map(|entry| entry.letter_for(shift.designation))
    }

    /// Entries in date order
    pub fn entries(&self) -> impl Iterator<Item = &ShiftCalendarEntry> {
        self.entries.values()
    }

    /// New calendar with one entry inserted or replaced
    #[must_use]
    pub fn with_entry(&self, entry: ShiftCalendarEntry) -> Self {
        let mut entries = self.entries.clone();
        entries.insert(entry.date, entry);
        Self { entries }
    }
}
