//! Domain types and models
//!
//! - [`record`]: raw activity records and their annotated form
//! - [`catalog`]: shift calendar and process mapping rows
//! - [`report`]: aggregates, bands, filters and the finished report

pub mod catalog;
pub mod record;
pub mod report;

pub use catalog::{MappingStatus, ProcessMappingEntry, ProcessResolution, ShiftCalendarEntry};
pub use record::{ActivityRecord, AnnotatedRecord, ShiftDesignation, WorkingShift};
pub use report::{
    Band, DetailAggregate, DetailKey, MetricType, PerformanceReport, ReportDiagnostics,
    ReportFilter, ReportRequest, ReportTotals, WorkerSummary,
};
