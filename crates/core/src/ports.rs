//! Collaborator port interfaces
//!
//! Ingestion and catalog persistence live outside the core. Implementations
//! are provided by `shiftpulse-infra` (file-backed) or by tests.

use shiftpulse_domain::types::{ActivityRecord, ProcessMappingEntry, ShiftCalendarEntry};
use shiftpulse_domain::Result;

/// Supplier of raw timekeeping records
pub trait ActivityRecordSource: Send + Sync {
    /// Load every record, in source order
    fn load_records(&self) -> Result<Vec<ActivityRecord>>;
}

/// Supplier of the shift calendar
pub trait ShiftCalendarSource: Send + Sync {
    /// Load the full calendar as an ordered list; later dates win on load
    fn load_calendar(&self) -> Result<Vec<ShiftCalendarEntry>>;
}

/// Persistent process mapping table
pub trait ProcessMappingSource: Send + Sync {
    /// Load every mapping row in stored order
    fn load_mappings(&self) -> Result<Vec<ProcessMappingEntry>>;

    /// Overwrite the stored table with `entries`
    fn save_mappings(&self, entries: &[ProcessMappingEntry]) -> Result<()>;
}
