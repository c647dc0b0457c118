//! Report service - the full aggregation pass

use std::sync::Arc;

use shiftpulse_domain::types::{
    ActivityRecord, AnnotatedRecord, PerformanceReport, ReportDiagnostics, ReportRequest,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::aggregation::{team_totals, DetailAggregator, WorkerSummaryAggregator};
use crate::catalog::CatalogStore;
use crate::classification::{RecordAnnotator, ShiftClassifier};
use crate::merge::merge_annotated;

/// Annotated and merged records, ready for repeated aggregation
///
/// Switching metric, threshold or filter reuses the batch; only a catalog
/// edit requires annotating again.
#[derive(Debug, Clone, PartialEq)]
pub struct AnnotatedBatch {
    /// Version of the snapshot used for annotation
    pub catalog_version: u64,
    /// Annotated records with merged minutes
    pub records: Vec<AnnotatedRecord>,
    /// Data issues seen while annotating
    pub diagnostics: ReportDiagnostics,
}

/// Computes performance reports against the current catalog snapshot
#[derive(Debug, Clone)]
pub struct ReportService {
    store: Arc<CatalogStore>,
    classifier: ShiftClassifier,
}

impl ReportService {
    /// Create a report service with the default 06:00-18:00 day window
    pub fn new(store: Arc<CatalogStore>) -> Self {
        Self::with_classifier(store, ShiftClassifier::default())
    }

    /// Create a report service with a custom shift window
    pub fn with_classifier(store: Arc<CatalogStore>, classifier: ShiftClassifier) -> Self {
        Self { store, classifier }
    }

    /// Catalog store the service reads from
    pub fn store(&self) -> &Arc<CatalogStore> {
        &self.store
    }

    /// Shift classifier used for annotation
    pub const fn classifier(&self) -> &ShiftClassifier {
        &self.classifier
    }

    /// Annotate records against one snapshot and merge overlapping intervals
    pub fn annotate(&self, records: &[ActivityRecord]) -> AnnotatedBatch {
        let snapshot = self.store.snapshot();
        let annotator = RecordAnnotator::new(&self.classifier, &snapshot);

        let (mut annotated, mut diagnostics) = annotator.annotate_all(records.iter().cloned());
        let merge = merge_annotated(&mut annotated);
        diagnostics.set_overlap_groups(merge.overlap_groups);
        let diagnostics = diagnostics.finish();

        log_diagnostics(&diagnostics);
        AnnotatedBatch { catalog_version: snapshot.version, records: annotated, diagnostics }
    }

    /// Full pass from raw records
    pub fn compute(
        &self,
        records: &[ActivityRecord],
        request: &ReportRequest,
    ) -> PerformanceReport {
        let batch = self.annotate(records);
        self.compute_from_annotated(&batch, request)
    }

    /// Re-filter and re-aggregate an annotated batch
    pub fn compute_from_annotated(
        &self,
        batch: &AnnotatedBatch,
        request: &ReportRequest,
    ) -> PerformanceReport {
        let filtered = batch.records.iter().filter(|record| request.filter.matches(record));
        let details = DetailAggregator::from_request(request).aggregate(filtered);
        let workers = WorkerSummaryAggregator::new(request.metric).aggregate(&details);
        let totals = team_totals(&details, &workers);

        info!(
            metric = %request.metric,
            details = totals.detail_count,
            workers = totals.worker_count,
            outliers = totals.outlier_count,
            utilization = totals.utilization_rate,
            efficiency = totals.efficiency_rate,
            "Report computed"
        );

        PerformanceReport {
            id: Uuid::now_v7().to_string(),
            metric: request.metric,
            outlier_threshold_pct: request.outlier_threshold_pct,
            catalog_version: batch.catalog_version,
            details,
            workers,
            totals,
            diagnostics: batch.diagnostics.clone(),
        }
    }
}

fn log_diagnostics(diagnostics: &ReportDiagnostics) {
    let issues = diagnostics.missing_timestamp
        + diagnostics.invalid_interval
        + diagnostics.unmatched_processes.len()
        + diagnostics.unknown_calendar_dates.len();

    if issues > 0 {
        warn!(
            records = diagnostics.total_records,
            missing_timestamp = diagnostics.missing_timestamp,
            invalid_interval = diagnostics.invalid_interval,
            unmatched_processes = diagnostics.unmatched_processes.len(),
            unknown_calendar_dates = diagnostics.unknown_calendar_dates.len(),
            "Records annotated with data issues"
        );
    } else {
        info!(
            records = diagnostics.total_records,
            overlap_groups = diagnostics.overlap_groups,
            "Records annotated"
        );
    }
}
