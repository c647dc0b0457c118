//! Per-record classification
//!
//! - [`shift`]: timestamp → (working day, Day/Night)
//! - [`annotator`]: full record annotation against a catalog snapshot

pub mod annotator;
pub mod shift;

pub use annotator::{DiagnosticsCollector, RecordAnnotator};
pub use shift::ShiftClassifier;
