//! Report generation commands

use shiftpulse_core::ports::ActivityRecordSource;
use shiftpulse_domain::types::{MetricType, PerformanceReport, ReportFilter, ReportRequest};
use shiftpulse_domain::{Result, ShiftPulseError};
use tracing::info;

use crate::utils::logging::logged;
use crate::AppContext;

/// Per-invocation overrides of the configured report defaults
#[derive(Debug, Clone, Default)]
pub struct ReportOptions {
    /// Metric override
    pub metric: Option<MetricType>,
    /// Outlier ceiling override in percent
    pub outlier_threshold_pct: Option<f64>,
    /// Record filter
    pub filter: ReportFilter,
}

/// Build the report request from config defaults and overrides.
///
/// # Errors
/// Returns `ShiftPulseError::InvalidInput` for a non-positive or
/// non-finite threshold override.
pub fn build_request(ctx: &AppContext, options: ReportOptions) -> Result<ReportRequest> {
    let mut request = ctx.config.report.request(options.filter);
    if let Some(metric) = options.metric {
        request.metric = metric;
    }
    if let Some(threshold) = options.outlier_threshold_pct {
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ShiftPulseError::InvalidInput(format!(
                "outlier threshold must be a positive number, got {threshold}"
            )));
        }
        request.outlier_threshold_pct = threshold;
    }
    Ok(request)
}

/// Load records from `source` and run one report pass.
///
/// # Errors
/// Propagates record loading errors and invalid overrides.
pub fn generate_report(
    ctx: &AppContext,
    source: &dyn ActivityRecordSource,
    options: ReportOptions,
) -> Result<PerformanceReport> {
    logged("report::generate_report", || {
        let request = build_request(ctx, options)?;
        let records = source.load_records()?;
        info!(
            records = records.len(),
            metric = %request.metric,
            threshold = request.outlier_threshold_pct,
            "Generating report"
        );
        Ok(ctx.report_service.compute(&records, &request))
    })
}
