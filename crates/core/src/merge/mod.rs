//! Per-worker overlapping-interval merging
//!
//! A worker's mergeable intervals are swept in start order. Intervals whose
//! start falls strictly before the running group end join the group. A
//! group of N ≥ 2 records credits each member `wall_clock_minutes / N`;
//! singletons keep their reported minutes.
//!
//! Merging reads timestamps only and resets every record before crediting,
//! so running it twice yields the same result.

use std::cmp::max;

use ahash::AHashMap as HashMap;
use chrono::NaiveDateTime;
use shiftpulse_domain::types::AnnotatedRecord;
use tracing::debug;

/// Outcome of one merge pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeSummary {
    /// Groups of two or more overlapping intervals
    pub overlap_groups: usize,
    /// Records credited from an overlap group
    pub overlapped_records: usize,
}

/// Result of sweeping one worker's intervals
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IntervalShares {
    /// Credited minutes per input interval; `None` for singletons
    pub shares: Vec<Option<f64>>,
    /// Groups of two or more overlapping intervals
    pub overlap_groups: usize,
}

/// Sweep a set of `[start, end)` intervals and split overlap groups evenly.
///
/// Intervals are assumed ordered (`start < end`); `shares` follows the input
/// order.
#[must_use]
pub fn overlap_shares(intervals: &[(NaiveDateTime, NaiveDateTime)]) -> IntervalShares {
    let mut result = IntervalShares { shares: vec![None; intervals.len()], overlap_groups: 0 };
    if intervals.len() < 2 {
        return result;
    }

    let mut order: Vec<usize> = (0..intervals.len()).collect();
    // Stable sort keeps input order among equal starts
    order.sort_by_key(|&i| intervals[i].0);

    let mut group: Vec<usize> = vec![order[0]];
    let mut group_start = intervals[order[0]].0;
    let mut group_end = intervals[order[0]].1;

    for &index in &order[1..] {
        let (start, end) = intervals[index];
        if group_end > start {
            group.push(index);
            group_end = max(group_end, end);
        } else {
            close_group(&group, group_start, group_end, &mut result);
            group.clear();
            group.push(index);
            group_start = start;
            group_end = end;
        }
    }
    close_group(&group, group_start, group_end, &mut result);

    result
}

fn close_group(
    group: &[usize],
    start: NaiveDateTime,
    end: NaiveDateTime,
    result: &mut IntervalShares,
) {
    if group.len() < 2 {
        return;
    }

    let seconds = i32::try_from((end - start).num_seconds()).unwrap_or(i32::MAX);
    let members = u32::try_from(group.len()).unwrap_or(u32::MAX);
    let share = f64::from(seconds) / 60.0 / f64::from(members);
    for &index in group {
        result.shares[index] = Some(share);
    }
    result.overlap_groups += 1;
}

/// Merge overlapping intervals worker by worker, in place.
///
/// Every non-rework record with an ordered interval takes part, whatever its
/// result marker; validity is applied later by the aggregators. Every other
/// record is reset to its reported minutes.
pub fn merge_annotated(records: &mut [AnnotatedRecord]) -> MergeSummary {
    let mut by_worker: HashMap<String, Vec<usize>> = HashMap::new();
    for (index, annotated) in records.iter_mut().enumerate() {
        annotated.adjusted_minutes = annotated.record.actual_minutes;
        annotated.is_overlap = false;
        if annotated.is_mergeable() {
            by_worker.entry(annotated.record.worker.clone()).or_default().push(index);
        }
    }

    let mut summary = MergeSummary::default();
    for (worker, indices) in &by_worker {
        let intervals: Vec<_> =
            indices.iter().filter_map(|&index| records[index].record.interval()).collect();
        let shares = overlap_shares(&intervals);
        if shares.overlap_groups == 0 {
            continue;
        }

        for (&index, share) in indices.iter().zip(shares.shares) {
            if let Some(minutes) = share {
                let annotated = &mut records[index];
                annotated.adjusted_minutes = minutes;
                annotated.is_overlap = true;
                summary.overlapped_records += 1;
            }
        }
        summary.overlap_groups += shares.overlap_groups;
        debug!(worker = %worker, groups = shares.overlap_groups, "Merged overlapping intervals");
    }

    summary
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use shiftpulse_domain::types::{
        ActivityRecord, ProcessResolution, ShiftDesignation, WorkingShift,
    };

    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, 10).unwrap().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn annotated(
        worker: &str,
        start: NaiveDateTime,
        end: NaiveDateTime,
        actual: f64,
    ) -> AnnotatedRecord {
        AnnotatedRecord {
            record: ActivityRecord {
                worker: worker.into(),
                start: Some(start),
                end: Some(end),
                actual_minutes: actual,
                result_cnt: "X".into(),
                ..Default::default()
            },
            is_valid: true,
            shift: Some(WorkingShift {
                working_day: start.date(),
                designation: ShiftDesignation::Day,
            }),
            staffing_letter: "A".into(),
            resolution: ProcessResolution::empty(),
            adjusted_minutes: actual,
            is_overlap: false,
        }
    }

    fn adjusted(records: &[AnnotatedRecord]) -> Vec<f64> {
        records.iter().map(|r| r.adjusted_minutes).collect()
    }

    #[test]
    fn disjoint_intervals_conserve_minutes() {
        let mut records = vec![
            annotated("W1", at(8, 0), at(9, 0), 55.0),
            annotated("W1", at(10, 0), at(10, 30), 30.0),
            annotated("W1", at(9, 0), at(10, 0), 60.0),
        ];
        let summary = merge_annotated(&mut records);

        assert_eq!(summary, MergeSummary::default());
        assert_eq!(adjusted(&records), vec![55.0, 30.0, 60.0]);
        assert!(records.iter().all(|r| !r.is_overlap));
    }

    #[test]
    fn identical_intervals_split_evenly() {
        let mut records = vec![
            annotated("W1", at(8, 0), at(9, 30), 60.0),
            annotated("W1", at(8, 0), at(9, 30), 60.0),
        ];
        let summary = merge_annotated(&mut records);

        assert_eq!(summary.overlap_groups, 1);
        assert_eq!(summary.overlapped_records, 2);
        assert_eq!(adjusted(&records), vec![45.0, 45.0]);
        assert!(records.iter().all(|r| r.is_overlap));
    }

    #[test]
    fn chained_overlaps_form_one_group() {
        // 08:00-09:00, 08:30-09:30, 09:15-10:00 → wall clock 120 minutes
        let mut records = vec![
            annotated("W1", at(9, 15), at(10, 0), 45.0),
            annotated("W1", at(8, 0), at(9, 0), 60.0),
            annotated("W1", at(8, 30), at(9, 30), 60.0),
        ];
        merge_annotated(&mut records);
        assert_eq!(adjusted(&records), vec![40.0, 40.0, 40.0]);
    }

    #[test]
    fn contained_interval_extends_nothing() {
        let mut records = vec![
            annotated("W1", at(8, 0), at(10, 0), 120.0),
            annotated("W1", at(8, 30), at(9, 0), 30.0),
            annotated("W1", at(10, 0), at(11, 0), 60.0),
        ];
        let summary = merge_annotated(&mut records);

        assert_eq!(summary.overlap_groups, 1);
        assert_eq!(adjusted(&records), vec![60.0, 60.0, 60.0]);
        assert!(!records[2].is_overlap);
    }

    #[test]
    fn workers_are_merged_independently() {
        let mut records = vec![
            annotated("W1", at(8, 0), at(9, 0), 60.0),
            annotated("W2", at(8, 0), at(9, 0), 60.0),
        ];
        let summary = merge_annotated(&mut records);
        assert_eq!(summary.overlap_groups, 0);
        assert_eq!(adjusted(&records), vec![60.0, 60.0]);
    }

    #[test]
    fn ineligible_records_keep_reported_minutes() {
        let mut rework = annotated("W1", at(8, 0), at(9, 0), 60.0);
        rework.record.rework = true;
        let mut inverted = annotated("W1", at(9, 0), at(8, 0), 25.0);
        inverted.adjusted_minutes = 0.0;

        let mut records = vec![annotated("W1", at(8, 0), at(9, 0), 50.0), rework, inverted];
        let summary = merge_annotated(&mut records);

        assert_eq!(summary.overlap_groups, 0);
        assert_eq!(adjusted(&records), vec![50.0, 60.0, 25.0]);
    }

    #[test]
    fn invalid_results_share_wall_clock_with_valid_ones() {
        // 08:00-09:00 valid, 08:30-09:30 invalid marker, 08:30-09:30 rework
        let mut invalid = annotated("W1", at(8, 30), at(9, 30), 60.0);
        invalid.is_valid = false;
        invalid.record.result_cnt = String::new();
        let mut rework = annotated("W1", at(8, 30), at(9, 30), 60.0);
        rework.record.rework = true;

        let mut records = vec![annotated("W1", at(8, 0), at(9, 0), 60.0), invalid, rework];
        let summary = merge_annotated(&mut records);

        assert_eq!(summary.overlap_groups, 1);
        assert_eq!(summary.overlapped_records, 2);
        assert_eq!(adjusted(&records), vec![45.0, 45.0, 60.0]);
        assert!(records[0].is_overlap && records[1].is_overlap);
        assert!(!records[2].is_overlap);
    }

    #[test]
    fn merging_twice_is_a_no_op() {
        let mut records = vec![
            annotated("W1", at(8, 0), at(9, 30), 60.0),
            annotated("W1", at(8, 0), at(9, 30), 60.0),
            annotated("W1", at(12, 0), at(12, 30), 20.0),
        ];
        merge_annotated(&mut records);
        let first = records.clone();
        merge_annotated(&mut records);
        assert_eq!(first, records);
    }

    #[test]
    fn fewer_than_two_intervals_yield_no_shares() {
        assert_eq!(overlap_shares(&[]).shares, Vec::<Option<f64>>::new());
        let single = overlap_shares(&[(at(8, 0), at(9, 0))]);
        assert_eq!(single.shares, vec![None]);
        assert_eq!(single.overlap_groups, 0);
    }
}
