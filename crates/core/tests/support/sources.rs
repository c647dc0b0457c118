//! In-memory implementations of the core ports.

use std::sync::{Arc, Mutex};

use shiftpulse_core::ports::{ActivityRecordSource, ProcessMappingSource, ShiftCalendarSource};
use shiftpulse_domain::types::{ActivityRecord, ProcessMappingEntry, ShiftCalendarEntry};
use shiftpulse_domain::{Result as DomainResult, ShiftPulseError};

/// Fixed record list.
#[derive(Default, Clone)]
pub struct MockRecordSource {
    records: Vec<ActivityRecord>,
}

impl MockRecordSource {
    pub fn new(records: Vec<ActivityRecord>) -> Self {
        Self { records }
    }
}

impl ActivityRecordSource for MockRecordSource {
    fn load_records(&self) -> DomainResult<Vec<ActivityRecord>> {
        Ok(self.records.clone())
    }
}

/// Calendar source that can be swapped between loads, or made to fail.
#[derive(Default, Clone)]
pub struct MockCalendarSource {
    entries: Arc<Mutex<Option<Vec<ShiftCalendarEntry>>>>,
}

impl MockCalendarSource {
    pub fn new(entries: Vec<ShiftCalendarEntry>) -> Self {
        Self { entries: Arc::new(Mutex::new(Some(entries))) }
    }

    /// Subsequent loads fail with an I/O error.
    pub fn fail(&self) {
        *self.entries.lock().unwrap() = None;
    }

    pub fn set(&self, entries: Vec<ShiftCalendarEntry>) {
        *self.entries.lock().unwrap() = Some(entries);
    }
}

impl ShiftCalendarSource for MockCalendarSource {
    fn load_calendar(&self) -> DomainResult<Vec<ShiftCalendarEntry>> {
        self.entries
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ShiftPulseError::Io("calendar unavailable".to_string()))
    }
}

/// Mapping table kept in memory; `save_mappings` overwrites it.
#[derive(Default, Clone)]
pub struct MockMappingSource {
    entries: Arc<Mutex<Vec<ProcessMappingEntry>>>,
}

impl MockMappingSource {
    pub fn new(entries: Vec<ProcessMappingEntry>) -> Self {
        Self { entries: Arc::new(Mutex::new(entries)) }
    }

    pub fn stored(&self) -> Vec<ProcessMappingEntry> {
        self.entries.lock().unwrap().clone()
    }
}

impl ProcessMappingSource for MockMappingSource {
    fn load_mappings(&self) -> DomainResult<Vec<ProcessMappingEntry>> {
        Ok(self.stored())
    }

    fn save_mappings(&self, entries: &[ProcessMappingEntry]) -> DomainResult<()> {
        *self.entries.lock().unwrap() = entries.to_vec();
        Ok(())
    }
}
