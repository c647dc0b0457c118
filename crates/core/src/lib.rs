//! # ShiftPulse Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - Shift calendar and process catalog (immutable, versioned snapshots)
//! - Shift classification and record annotation
//! - Per-worker interval merging
//! - Detail and worker aggregation, performance bands
//! - The report service and collaborator ports
//!
//! ## Architecture Principles
//! - Only depends on `shiftpulse-domain`
//! - No file, database or network code
//! - Loading and persistence via traits in [`ports`]
//! - Every computation is synchronous and total

pub mod aggregation;
pub mod calendar;
pub mod catalog;
pub mod classification;
pub mod merge;
pub mod ports;
pub mod report;

// Re-export specific items to avoid ambiguity
pub use aggregation::{BandThresholds, DetailAggregator, WorkerSummaryAggregator};
pub use calendar::ShiftCalendar;
pub use catalog::{CatalogSnapshot, CatalogStore, ProcessCatalog};
pub use classification::{RecordAnnotator, ShiftClassifier};
pub use merge::{merge_annotated, MergeSummary};
pub use ports::{ActivityRecordSource, ProcessMappingSource, ShiftCalendarSource};
pub use report::{AnnotatedBatch, ReportService};
