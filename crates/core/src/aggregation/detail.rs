//! Detail-level aggregation
//!
//! Groups aggregatable records by [`DetailKey`] and computes both rates for
//! every group. The outlier flag depends on the active metric and threshold
//! but never changes any accumulated value.

use ahash::AHashMap as HashMap;
use shiftpulse_domain::constants::{DEFAULT_OUTLIER_THRESHOLD_PCT, SHIFT_MINUTES};
use shiftpulse_domain::types::{
    AnnotatedRecord, DetailAggregate, DetailKey, MetricType, ReportRequest,
};

use super::band::{efficiency_band, utilization_band};
use super::efficiency_rate;

/// Running sums of one detail group
#[derive(Debug)]
struct DetailAccumulator {
    key: DetailKey,
    category: String,
    sequence: i64,
    adjusted_minutes: f64,
    valid_count: u32,
    assigned_standard_time: f64,
    original_minutes: f64,
}

impl DetailAccumulator {
    fn add(&mut self, record: &AnnotatedRecord) {
        self.adjusted_minutes += record.adjusted_minutes;
        self.valid_count += 1;
        self.assigned_standard_time += record.record.assigned_standard_time();
        self.original_minutes += record.record.actual_minutes;
    }

    fn finish(self, metric: MetricType, outlier_threshold_pct: f64) -> DetailAggregate {
        let utilization_rate = self.adjusted_minutes / SHIFT_MINUTES * 100.0;
        let efficiency_rate = efficiency_rate(self.assigned_standard_time, self.original_minutes);
        DetailAggregate {
            key: self.key,
            category: self.category,
            sequence: self.sequence,
            adjusted_minutes: self.adjusted_minutes,
            valid_count: self.valid_count,
            assigned_standard_time: self.assigned_standard_time,
            original_minutes: self.original_minutes,
            utilization_rate,
            efficiency_rate,
            utilization_band: utilization_band(utilization_rate),
            efficiency_band: efficiency_band(efficiency_rate),
            is_outlier: metric == MetricType::Efficiency && efficiency_rate > outlier_threshold_pct,
        }
    }
}

/// Builds detail aggregates for one pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailAggregator {
    metric: MetricType,
    outlier_threshold_pct: f64,
}

impl Default for DetailAggregator {
    fn default() -> Self {
        Self::new(MetricType::default(), DEFAULT_OUTLIER_THRESHOLD_PCT)
    }
}

impl DetailAggregator {
    /// Aggregator for `metric` with an efficiency outlier ceiling in percent
    #[must_use]
    pub const fn new(metric: MetricType, outlier_threshold_pct: f64) -> Self {
        Self { metric, outlier_threshold_pct }
    }

    /// Aggregator configured from a request
    #[must_use]
    pub const fn from_request(request: &ReportRequest) -> Self {
        Self::new(request.metric, request.outlier_threshold_pct)
    }

    /// Aggregate records into detail rows
    ///
    /// Records that are invalid, rework or unclassified are skipped. Rows
    /// are sorted by sequence, then worker; other ties keep the order in
    /// which their groups were first seen.
    pub fn aggregate<'a, I>(&self, records: I) -> Vec<DetailAggregate>
    where
        I: IntoIterator<Item = &'a AnnotatedRecord>,
    {
        let mut index: HashMap<DetailKey, usize> = HashMap::new();
        let mut groups: Vec<DetailAccumulator> = Vec::new();

        for record in records {
            let Some(shift) = record.shift else {
                continue;
            };
            if !record.is_aggregatable() {
                continue;
            }

            let key = DetailKey {
                worker: record.record.worker.clone(),
                working_day: shift.working_day,
                designation: shift.designation,
                staffing_letter: record.staffing_letter.clone(),
                process: record.resolution.process_name.clone(),
            };

            let position = match index.get(&key) {
                Some(&position) => position,
                None => {
                    index.insert(key.clone(), groups.len());
                    groups.push(DetailAccumulator {
                        key,
                        category: record.resolution.category.clone(),
                        sequence: record.resolution.sequence,
                        adjusted_minutes: 0.0,
                        valid_count: 0,
                        assigned_standard_time: 0.0,
                        original_minutes: 0.0,
                    });
                    groups.len() - 1
                }
            };
            groups[position].add(record);
        }

        let mut details: Vec<_> = groups
            .into_iter()
            .map(|group| group.finish(self.metric, self.outlier_threshold_pct))
            .collect();
        details.sort_by(|a, b| {
            a.sequence.cmp(&b.sequence).then_with(|| a.key.worker.cmp(&b.key.worker))
        });
        details
    }
}
