//! Presentation adapters for report output

pub mod report_view;

pub use report_view::{render_table, DetailRowView, ReportView, WorkerRowView};
