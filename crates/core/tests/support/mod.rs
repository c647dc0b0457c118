//! Shared test helpers for `shiftpulse-core` integration tests.
//!
//! These helpers provide reusable fixtures and in-memory sources so that
//! pipeline tests can focus on behaviour instead of boilerplate.

#![allow(dead_code)]

pub mod sources;

use chrono::{NaiveDate, NaiveDateTime};
use shiftpulse_domain::types::{ActivityRecord, ProcessMappingEntry, ShiftCalendarEntry};

/// 2026-03-`day` at `hour:minute`
pub fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap().and_hms_opt(hour, minute, 0).unwrap()
}

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, day).unwrap()
}

pub fn mapping(raw: &str, category: &str, name: &str, sequence: i64) -> ProcessMappingEntry {
    ProcessMappingEntry {
        raw_description: raw.to_string(),
        category: category.to_string(),
        process_name: name.to_string(),
        sequence,
    }
}

/// Mapping table used across pipeline tests
pub fn sample_mappings() -> Vec<ProcessMappingEntry> {
    vec![
        mapping("Cut", "BT Process", "Cut", 1),
        mapping("Fit-Up", "BT Process", "Fit Up", 2),
        mapping("Paint", "BT Complete", "Paint", 5),
    ]
}

/// Crew letters for 2026-03-09 through 2026-03-11
pub fn sample_calendar() -> Vec<ShiftCalendarEntry> {
    vec![
        ShiftCalendarEntry::new(date(9), "C", "D"),
        ShiftCalendarEntry::new(date(10), "A", "B"),
        ShiftCalendarEntry::new(date(11), "B", "C"),
    ]
}

/// Builder for valid, non-rework records
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    record: ActivityRecord,
}

impl RecordBuilder {
    pub fn new(row: usize, worker: &str, process: &str) -> Self {
        Self {
            record: ActivityRecord {
                row,
                worker: worker.to_string(),
                process: process.to_string(),
                result_cnt: "X".to_string(),
                rate_pct: 100.0,
                ..Default::default()
            },
        }
    }

    pub fn interval(mut self, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        self.record.start = Some(start);
        self.record.end = Some(end);
        self
    }

    pub fn minutes(mut self, actual: f64) -> Self {
        self.record.actual_minutes = actual;
        self
    }

    pub fn standard(mut self, standard_time: f64, rate_pct: f64) -> Self {
        self.record.standard_time = standard_time;
        self.record.rate_pct = rate_pct;
        self
    }

    pub fn result(mut self, marker: &str) -> Self {
        self.record.result_cnt = marker.to_string();
        self
    }

    pub fn rework(mut self) -> Self {
        self.record.rework = true;
        self
    }

    pub fn build(self) -> ActivityRecord {
        self.record
    }
}

/// Compare floats with a tolerance suited to percentage rates
pub fn assert_close(actual: f64, expected: f64) {
    assert!((actual - expected).abs() < 0.01, "expected {expected}, got {actual}");
}
