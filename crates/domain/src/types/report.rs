//! Aggregates, performance bands, report requests and the finished report

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_OUTLIER_THRESHOLD_PCT;
use crate::impl_label_conversions;
use crate::types::record::{AnnotatedRecord, ShiftDesignation, WorkingShift};

/// Which metric drives thresholds, outlier flags and sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    /// Adjusted minutes against standard shift minutes
    #[default]
    Utilization,
    /// Assigned standard time against reported minutes
    Efficiency,
}

impl_label_conversions!(MetricType {
    Utilization => "utilization",
    Efficiency => "efficiency",
});

/// Qualitative performance band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Band {
    /// At or above the excellent threshold
    Excellent,
    /// At or above the normal threshold
    Normal,
    /// At or above the poor threshold
    Poor,
    /// Below the poor threshold
    Critical,
}

impl_label_conversions!(Band {
    Excellent => "Excellent",
    Normal => "Normal",
    Poor => "Poor",
    Critical => "Critical",
});

/// Grouping key of a detail aggregate
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct DetailKey {
    /// Worker identifier
    pub worker: String,
    /// Working day of the shift
    pub working_day: NaiveDate,
    /// Day or night half
    pub designation: ShiftDesignation,
    /// Crew letter on that shift; empty when the date is unknown
    pub staffing_letter: String,
    /// Canonical process name
    pub process: String,
}

impl DetailKey {
    /// Working shift this key belongs to.
    #[must_use]
    pub const fn shift(&self) -> WorkingShift {
        WorkingShift { working_day: self.working_day, designation: self.designation }
    }
}

/// Totals and rates for one (worker, day, shift, letter, process) group
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailAggregate {
    /// Grouping key
    pub key: DetailKey,
    /// Catalog category of the process
    pub category: String,
    /// Display ordering of the process
    pub sequence: i64,
    /// Merged minutes credited to the group
    pub adjusted_minutes: f64,
    /// Number of records aggregated
    pub valid_count: u32,
    /// Sum of standard time scaled by each rate
    pub assigned_standard_time: f64,
    /// Sum of reported active minutes
    pub original_minutes: f64,
    /// Adjusted minutes over one standard shift, in percent
    pub utilization_rate: f64,
    /// Assigned standard time over reported minutes, in percent
    pub efficiency_rate: f64,
    /// Band of `utilization_rate`
    pub utilization_band: Band,
    /// Band of `efficiency_rate`
    pub efficiency_band: Band,
    /// Display-only flag; never removes the row from detail totals
    pub is_outlier: bool,
}

impl DetailAggregate {
    /// Rate of the active metric.
    #[must_use]
    pub const fn rate(&self, metric: MetricType) -> f64 {
        match metric {
            MetricType::Utilization => self.utilization_rate,
            MetricType::Efficiency => self.efficiency_rate,
        }
    }

    /// Band of the active metric.
    #[must_use]
    pub const fn band(&self, metric: MetricType) -> Band {
        match metric {
            MetricType::Utilization => self.utilization_band,
            MetricType::Efficiency => self.efficiency_band,
        }
    }
}

/// Per-worker consolidation of non-outlier detail rows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkerSummary {
    /// Worker identifier
    pub worker: String,
    /// Merged minutes over non-outlier rows
    pub adjusted_minutes: f64,
    /// Reported minutes over non-outlier rows
    pub original_minutes: f64,
    /// Assigned standard time over non-outlier rows
    pub assigned_standard_time: f64,
    /// Records behind the non-outlier rows
    pub valid_count: u32,
    /// Distinct (working day, designation) pairs worked
    pub shift_instances: BTreeSet<WorkingShift>,
    /// Length of `shift_instances`
    pub shift_instance_count: usize,
    /// Process with the most accumulated adjusted minutes
    pub primary_process: String,
    /// Category of `primary_process`
    pub primary_category: String,
    /// Adjusted minutes over all shifts worked, in percent
    pub utilization_rate: f64,
    /// Assigned standard time over reported minutes, in percent
    pub efficiency_rate: f64,
    /// Band of `utilization_rate`
    pub utilization_band: Band,
    /// Band of `efficiency_rate`
    pub efficiency_band: Band,
}

impl WorkerSummary {
    /// Rate of the active metric.
    #[must_use]
    pub const fn rate(&self, metric: MetricType) -> f64 {
        match metric {
            MetricType::Utilization => self.utilization_rate,
            MetricType::Efficiency => self.efficiency_rate,
        }
    }

    /// Band of the active metric.
    #[must_use]
    pub const fn band(&self, metric: MetricType) -> Band {
        match metric {
            MetricType::Utilization => self.utilization_band,
            MetricType::Efficiency => self.efficiency_band,
        }
    }
}

/// Record-level filter applied before aggregation
///
/// Empty/`None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportFilter {
    /// Accepted workers
    #[serde(default)]
    pub workers: Vec<String>,
    /// First working day, inclusive
    #[serde(default)]
    pub from: Option<NaiveDate>,
    /// Last working day, inclusive
    #[serde(default)]
    pub to: Option<NaiveDate>,
    /// Shift half
    #[serde(default)]
    pub designation: Option<ShiftDesignation>,
    /// Crew letter, compared case-insensitively
    #[serde(default)]
    pub staffing_letter: Option<String>,
    /// Process category, compared case-insensitively
    #[serde(default)]
    pub category: Option<String>,
}

impl ReportFilter {
    /// Whether no criterion is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Whether an annotated record passes every criterion.
    ///
    /// Records without a working shift fail any date or designation
    /// criterion. A record with an empty staffing letter fails any
    /// staffing-letter criterion.
    #[must_use]
    pub fn matches(&self, record: &AnnotatedRecord) -> bool {
        if !self.workers.is_empty() && !self.workers.iter().any(|w| *w == record.record.worker) {
            return false;
        }

        if self.from.is_some() || self.to.is_some() || self.designation.is_some() {
            let Some(shift) = record.shift else {
                return false;
            };
            if self.from.is_some_and(|from| shift.working_day < from)
                || self.to.is_some_and(|to| shift.working_day > to)
                || self.designation.is_some_and(|d| d != shift.designation)
            {
                return false;
            }
        }

        if let Some(letter) = &self.staffing_letter {
            if record.staffing_letter.is_empty()
                || !record.staffing_letter.eq_ignore_ascii_case(letter.trim())
            {
                return false;
            }
        }

        if let Some(category) = &self.category {
            if !record.resolution.category.eq_ignore_ascii_case(category.trim()) {
                return false;
            }
        }

        true
    }
}

/// Parameters of one aggregation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Metric driving bands and ordering
    pub metric: MetricType,
    /// Efficiency ceiling (percent) for outlier flagging
    pub outlier_threshold_pct: f64,
    /// Record filter applied before aggregation
    #[serde(default)]
    pub filter: ReportFilter,
}

impl Default for ReportRequest {
    fn default() -> Self {
        Self {
            metric: MetricType::default(),
            outlier_threshold_pct: DEFAULT_OUTLIER_THRESHOLD_PCT,
            filter: ReportFilter::default(),
        }
    }
}

/// Recoverable data issues observed during one pass
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDiagnostics {
    /// Records seen
    pub total_records: usize,
    /// Rework records left out of aggregation
    pub rework_excluded: usize,
    /// Records whose result marker is not valid
    pub invalid_result: usize,
    /// Records with neither start nor end
    pub missing_timestamp: usize,
    /// Records whose end does not follow their start
    pub invalid_interval: usize,
    /// Merge groups with two or more records
    pub overlap_groups: usize,
    /// Records with a blank process description
    pub empty_process: usize,
    /// Distinct raw descriptions that fell back to auto-categorization
    pub unmatched_processes: Vec<String>,
    /// Distinct working days absent from the shift calendar
    pub unknown_calendar_dates: Vec<NaiveDate>,
}

/// Team-level totals over the worker summaries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReportTotals {
    /// Worker summaries in the report
    pub worker_count: usize,
    /// Detail rows, outliers included
    pub detail_count: usize,
    /// Detail rows flagged as outliers
    pub outlier_count: usize,
    /// Merged minutes over the worker summaries
    pub adjusted_minutes: f64,
    /// Reported minutes over the worker summaries
    pub original_minutes: f64,
    /// Assigned standard time over the worker summaries
    pub assigned_standard_time: f64,
    /// Shift instances summed over workers
    pub shift_instance_count: usize,
    /// Team utilization in percent
    pub utilization_rate: f64,
    /// Team efficiency in percent
    pub efficiency_rate: f64,
}

/// Output of one aggregation pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// Unique report identifier
    pub id: String,
    /// Metric the report was computed for
    pub metric: MetricType,
    /// Efficiency ceiling used for outlier flagging
    pub outlier_threshold_pct: f64,
    /// Version of the catalog snapshot the pass ran against
    pub catalog_version: u64,
    /// Detail rows in display order
    pub details: Vec<DetailAggregate>,
    /// Worker summaries in display order
    pub workers: Vec<WorkerSummary>,
    /// Team-level totals
    pub totals: ReportTotals,
    /// Data issues seen while annotating
    pub diagnostics: ReportDiagnostics,
}
