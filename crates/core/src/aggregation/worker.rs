//! Worker-level consolidation of detail rows

use std::collections::BTreeSet;

use ahash::AHashMap as HashMap;
use shiftpulse_domain::types::{DetailAggregate, MetricType, WorkerSummary, WorkingShift};

use super::band::{efficiency_band, utilization_band};
use super::{efficiency_rate, utilization_rate};

#[derive(Debug, Default)]
struct WorkerAccumulator {
    worker: String,
    adjusted_minutes: f64,
    original_minutes: f64,
    assigned_standard_time: f64,
    valid_count: u32,
    shift_instances: BTreeSet<WorkingShift>,
    /// (process, category, adjusted minutes) in first-seen order
    processes: Vec<(String, String, f64)>,
}

impl WorkerAccumulator {
    fn add(&mut self, detail: &DetailAggregate) {
        self.adjusted_minutes += detail.adjusted_minutes;
        self.original_minutes += detail.original_minutes;
        self.assigned_standard_time += detail.assigned_standard_time;
        self.valid_count += detail.valid_count;
        self.shift_instances.insert(detail.key.shift());

        match self.processes.iter_mut().find(|(process, _, _)| *process == detail.key.process) {
            Some((_, _, minutes)) => *minutes += detail.adjusted_minutes,
            None => self.processes.push((
                detail.key.process.clone(),
                detail.category.clone(),
                detail.adjusted_minutes,
            )),
        }
    }

    fn finish(self) -> WorkerSummary {
        // Strictly greater keeps the first-seen process on ties
        let mut primary: Option<&(String, String, f64)> = None;
        for candidate in &self.processes {
            if primary.map_or(true, |best| candidate.2 > best.2) {
                primary = Some(candidate);
            }
        }
        let (primary_process, primary_category) = primary
            .map(|(process, category, _)| (process.clone(), category.clone()))
            .unwrap_or_default();

        let shift_instance_count = self.shift_instances.len();
        let utilization_rate = utilization_rate(self.adjusted_minutes, shift_instance_count);
        let efficiency_rate = efficiency_rate(self.assigned_standard_time, self.original_minutes);

        WorkerSummary {
            worker: self.worker,
            adjusted_minutes: self.adjusted_minutes,
            original_minutes: self.original_minutes,
            assigned_standard_time: self.assigned_standard_time,
            valid_count: self.valid_count,
            shift_instances: self.shift_instances,
            shift_instance_count,
            primary_process,
            primary_category,
            utilization_rate,
            efficiency_rate,
            utilization_band: utilization_band(utilization_rate),
            efficiency_band: efficiency_band(efficiency_rate),
        }
    }
}

/// Consolidates detail rows into one summary per worker
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkerSummaryAggregator {
    metric: MetricType,
}

impl WorkerSummaryAggregator {
    /// Aggregator ordering by `metric`
    #[must_use]
    pub const fn new(metric: MetricType) -> Self {
        Self { metric }
    }

    /// Summarise non-outlier detail rows, sorted by the active rate
    /// descending with ties broken by worker name.
    #[must_use]
    pub fn aggregate(&self, details: &[DetailAggregate]) -> Vec<WorkerSummary> {
        let mut index: HashMap<&str, usize> = HashMap::new();
        let mut workers: Vec<WorkerAccumulator> = Vec::new();

        for detail in details.iter().filter(|detail| !detail.is_outlier) {
            let position = *index.entry(detail.key.worker.as_str()).or_insert_with(|| {
                workers.push(WorkerAccumulator {
                    worker: detail.key.worker.clone(),
                    ..WorkerAccumulator::default()
                });
                workers.len() - 1
            });
            workers[position].add(detail);
        }

        let metric = self.metric;
        let mut summaries: Vec<_> = workers.into_iter().map(WorkerAccumulator::finish).collect();
        summaries.sort_by(|a, b| {
            b.rate(metric).total_cmp(&a.rate(metric)).then_with(|| a.worker.cmp(&b.worker))
        });
        summaries
    }
}
