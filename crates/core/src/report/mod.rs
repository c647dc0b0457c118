//! Report pipeline: annotate → merge → filter → aggregate → summarise

pub mod service;

pub use service::{AnnotatedBatch, ReportService};
