//! Metric aggregation
//!
//! - [`detail`]: (worker, day, shift, letter, process) groups
//! - [`worker`]: per-worker consolidation of non-outlier detail rows
//! - [`band`]: rate → performance band

pub mod band;
pub mod detail;
pub mod worker;

pub use band::{band_for, efficiency_band, utilization_band, BandThresholds};
pub use detail::DetailAggregator;
pub use worker::WorkerSummaryAggregator;
use shiftpulse_domain::constants::SHIFT_MINUTES;
use shiftpulse_domain::types::{DetailAggregate, ReportTotals, WorkerSummary};

/// Utilization over `shifts` standard shifts; 0 when no shift was worked.
#[must_use]
pub fn utilization_rate(adjusted_minutes: f64, shifts: usize) -> f64 {
    if shifts == 0 {
        return 0.0;
    }
    let shifts = u32::try_from(shifts).unwrap_or(u32::MAX);
    adjusted_minutes / (SHIFT_MINUTES * f64::from(shifts)) * 100.0
}

/// Assigned standard time over reported minutes; 0 when nothing was reported.
#[must_use]
pub fn efficiency_rate(assigned_standard_time: f64, original_minutes: f64) -> f64 {
    if original_minutes > 0.0 {
        assigned_standard_time / original_minutes * 100.0
    } else {
        0.0
    }
}

/// Team totals over the worker summaries (outlier rows already excluded)
#[must_use]
pub fn team_totals(details: &[DetailAggregate], workers: &[WorkerSummary]) -> ReportTotals {
    let mut totals = ReportTotals {
        worker_count: workers.len(),
        detail_count: details.len(),
        outlier_count: details.iter().filter(|detail| detail.is_outlier).count(),
        ..ReportTotals::default()
    };

    for worker in workers {
        totals.adjusted_minutes += worker.adjusted_minutes;
        totals.original_minutes += worker.original_minutes;
        totals.assigned_standard_time += worker.assigned_standard_time;
        totals.shift_instance_count += worker.shift_instance_count;
    }
    totals.utilization_rate =
        utilization_rate(totals.adjusted_minutes, totals.shift_instance_count);
    totals.efficiency_rate =
        efficiency_rate(totals.assigned_standard_time, totals.original_minutes);
    totals
}
