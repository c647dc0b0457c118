//! Display views over a [`PerformanceReport`]
//!
//! Views only copy and round values already computed by the aggregation
//! pass. Rates are rounded to two decimals; minute totals to one.

use std::fmt::Write as _;

use chrono::NaiveDate;
use serde::Serialize;
use shiftpulse_domain::types::{
    Band, DetailAggregate, MetricType, PerformanceReport, ReportDiagnostics, ReportTotals,
    WorkerSummary,
};

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10_f64.powi(places);
    (value * factor).round() / factor
}

fn rate(value: f64) -> f64 {
    round_to(value, 2)
}

fn minutes(value: f64) -> f64 {
    round_to(value, 1)
}

/// One detail row as shown to users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRowView {
    /// Worker identifier
    pub worker: String,
    /// Working day of the shift
    pub working_day: NaiveDate,
    /// "Day" or "Night"
    pub shift: &'static str,
    /// Crew letter; empty when the date is unknown
    pub staffing_letter: String,
    /// Process category
    pub category: String,
    /// Canonical process name
    pub process: String,
    /// Display ordering of the process
    pub sequence: i64,
    /// Merged minutes, one decimal
    pub adjusted_minutes: f64,
    /// Reported minutes, one decimal
    pub original_minutes: f64,
    /// Assigned standard time, one decimal
    pub assigned_standard_time: f64,
    /// Legacy column name for `assigned_standard_time`
    pub worker_st: f64,
    /// Records aggregated
    pub valid_count: u32,
    /// Utilization percent, two decimals
    pub utilization_rate: f64,
    /// Efficiency percent, two decimals
    pub efficiency_rate: f64,
    /// Band of the utilization rate
    pub utilization_band: Band,
    /// Band of the efficiency rate
    pub efficiency_band: Band,
    /// Efficiency above the outlier ceiling
    pub is_outlier: bool,
}

impl From<&DetailAggregate> for DetailRowView {
    fn from(detail: &DetailAggregate) -> Self {
        let standard = minutes(detail.assigned_standard_time);
        Self {
            worker: detail.key.worker.clone(),
            working_day: detail.key.working_day,
            shift: detail.key.designation.label(),
            staffing_letter: detail.key.staffing_letter.clone(),
            category: detail.category.clone(),
            process: detail.key.process.clone(),
            sequence: detail.sequence,
            adjusted_minutes: minutes(detail.adjusted_minutes),
            original_minutes: minutes(detail.original_minutes),
            assigned_standard_time: standard,
            worker_st: standard,
            valid_count: detail.valid_count,
            utilization_rate: rate(detail.utilization_rate),
            efficiency_rate: rate(detail.efficiency_rate),
            utilization_band: detail.utilization_band,
            efficiency_band: detail.efficiency_band,
            is_outlier: detail.is_outlier,
        }
    }
}

/// One worker summary row as shown to users
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerRowView {
    /// Worker identifier
    pub worker: String,
    /// Distinct shifts worked
    pub shift_instance_count: usize,
    /// Merged minutes, one decimal
    pub adjusted_minutes: f64,
    /// Reported minutes, one decimal
    pub original_minutes: f64,
    /// Assigned standard time, one decimal
    pub assigned_standard_time: f64,
    /// Records behind the summary
    pub valid_count: u32,
    /// Process with the most adjusted minutes
    pub primary_process: String,
    /// Category of the primary process
    pub primary_category: String,
    /// Utilization percent, two decimals
    pub utilization_rate: f64,
    /// Efficiency percent, two decimals
    pub efficiency_rate: f64,
    /// Band of the utilization rate
    pub utilization_band: Band,
    /// Band of the efficiency rate
    pub efficiency_band: Band,
}

impl From<&WorkerSummary> for WorkerRowView {
    fn from(worker: &WorkerSummary) -> Self {
        Self {
            worker: worker.worker.clone(),
            shift_instance_count: worker.shift_instance_count,
            adjusted_minutes: minutes(worker.adjusted_minutes),
            original_minutes: minutes(worker.original_minutes),
            assigned_standard_time: minutes(worker.assigned_standard_time),
            valid_count: worker.valid_count,
            primary_process: worker.primary_process.clone(),
            primary_category: worker.primary_category.clone(),
            utilization_rate: rate(worker.utilization_rate),
            efficiency_rate: rate(worker.efficiency_rate),
            utilization_band: worker.utilization_band,
            efficiency_band: worker.efficiency_band,
        }
    }
}

/// Whole report in display form, used for JSON output
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportView {
    /// Report identifier
    pub id: String,
    /// Active metric
    pub metric: MetricType,
    /// Efficiency outlier ceiling in percent
    pub outlier_threshold_pct: f64,
    /// Catalog snapshot version
    pub catalog_version: u64,
    /// Detail rows
    pub details: Vec<DetailRowView>,
    /// Worker rows
    pub workers: Vec<WorkerRowView>,
    /// Team totals, unrounded
    pub totals: ReportTotals,
    /// Data issues seen while annotating
    pub diagnostics: ReportDiagnostics,
}

impl From<&PerformanceReport> for ReportView {
    fn from(report: &PerformanceReport) -> Self {
        let totals = ReportTotals {
            adjusted_minutes: minutes(report.totals.adjusted_minutes),
            original_minutes: minutes(report.totals.original_minutes),
            assigned_standard_time: minutes(report.totals.assigned_standard_time),
            utilization_rate: rate(report.totals.utilization_rate),
            efficiency_rate: rate(report.totals.efficiency_rate),
            ..report.totals.clone()
        };
        Self {
            id: report.id.clone(),
            metric: report.metric,
            outlier_threshold_pct: report.outlier_threshold_pct,
            catalog_version: report.catalog_version,
            details: report.details.iter().map(DetailRowView::from).collect(),
            workers: report.workers.iter().map(WorkerRowView::from).collect(),
            totals,
            diagnostics: report.diagnostics.clone(),
        }
    }
}

/// Render both report levels as fixed-width text tables.
///
/// Rate and band columns follow the report's active metric; outlier detail
/// rows are marked with `*`.
#[must_use]
pub fn render_table(report: &PerformanceReport) -> String {
    let view = ReportView::from(report);
    let metric = report.metric;
    let mut out = String::new();

    let _ = writeln!(out, "Details ({metric}, outlier threshold {}%)", view.outlier_threshold_pct);
    let _ = writeln!(
        out,
        "{:<12} {:<10} {:<5} {:<4} {:<20} {:>9} {:>9} {:>9} {:>8} {:<9}",
        "Worker",
        "Day",
        "Shift",
        "Crew",
        "Process",
        "Adj min",
        "Orig min",
        "Std min",
        "Rate %",
        "Band"
    );
    for (row, detail) in view.details.iter().zip(&report.details) {
        let marker = if row.is_outlier { " *" } else { "" };
        let _ = writeln!(
            out,
            "{:<12} {:<10} {:<5} {:<4} {:<20} {:>9.1} {:>9.1} {:>9.1} {:>8.2} {:<9}{marker}",
            row.worker,
            row.working_day,
            row.shift,
            row.staffing_letter,
            row.process,
            row.adjusted_minutes,
            row.original_minutes,
            row.assigned_standard_time,
            rate(detail.rate(metric)),
            detail.band(metric).label(),
        );
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "Workers");
    let _ = writeln!(
        out,
        "{:<12} {:>6} {:>9} {:>9} {:<20} {:>8} {:<9}",
        "Worker", "Shifts", "Adj min", "Std min", "Primary process", "Rate %", "Band"
    );
    for (row, worker) in view.workers.iter().zip(&report.workers) {
        let _ = writeln!(
            out,
            "{:<12} {:>6} {:>9.1} {:>9.1} {:<20} {:>8.2} {:<9}",
            row.worker,
            row.shift_instance_count,
            row.adjusted_minutes,
            row.assigned_standard_time,
            row.primary_process,
            rate(worker.rate(metric)),
            worker.band(metric).label(),
        );
    }

    let totals = &view.totals;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Team: {} workers, {} shifts, utilization {:.2}%, efficiency {:.2}% \
         ({} outlier rows excluded)",
        totals.worker_count,
        totals.shift_instance_count,
        totals.utilization_rate,
        totals.efficiency_rate,
        totals.outlier_count,
    );

    let diagnostics = &view.diagnostics;
    let _ = writeln!(
        out,
        "Records: {} total, {} rework, {} invalid result, {} missing timestamp, {} overlap groups",
        diagnostics.total_records,
        diagnostics.rework_excluded,
        diagnostics.invalid_result,
        diagnostics.missing_timestamp,
        diagnostics.overlap_groups,
    );
    if !diagnostics.unmatched_processes.is_empty() {
        let _ = writeln!(out, "Unmapped processes: {}", diagnostics.unmatched_processes.join(", "));
    }
    if !diagnostics.unknown_calendar_dates.is_empty() {
        let dates: Vec<String> =
            diagnostics.unknown_calendar_dates.iter().map(ToString::to_string).collect();
        let _ = writeln!(out, "Dates missing from calendar: {}", dates.join(", "));
    }
    out
}
