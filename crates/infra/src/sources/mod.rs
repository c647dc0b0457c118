//! File-backed implementations of the core ports
//!
//! The format of every source is chosen by file extension
//! (see [`FileFormat`]).

pub mod calendar;
pub mod format;
pub mod mapping;
pub mod records;

pub use calendar::FileShiftCalendarSource;
pub use format::FileFormat;
pub use mapping::FileMappingSource;
pub use records::{parse_timestamp, FileRecordSource, TIMESTAMP_FORMATS};
