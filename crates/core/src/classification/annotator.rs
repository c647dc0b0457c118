//! Record annotation against a catalog snapshot
//!
//! Annotation never fails. Data problems are counted into
//! [`ReportDiagnostics`] and logged at `debug!`; the record is kept in the
//! annotated set either way.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use shiftpulse_domain::types::{
    ActivityRecord, AnnotatedRecord, MappingStatus, ReportDiagnostics,
};
use tracing::debug;

use super::ShiftClassifier;
use crate::catalog::CatalogSnapshot;

/// Accumulates diagnostics over one annotation pass
#[derive(Debug, Default)]
pub struct DiagnosticsCollector {
    diagnostics: ReportDiagnostics,
    unmatched: BTreeSet<String>,
    unknown_dates: BTreeSet<NaiveDate>,
}

impl DiagnosticsCollector {
    /// Empty collector
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn observe(&mut self, annotated: &AnnotatedRecord, date_known: bool) {
        let record = &annotated.record;
        let counts = &mut self.diagnostics;
        counts.total_records += 1;

        if record.rework {
            counts.rework_excluded += 1;
        } else if !annotated.is_valid {
            counts.invalid_result += 1;
        }

        if !record.has_timestamp() {
            counts.missing_timestamp += 1;
            debug!(row = record.row, worker = %record.worker, "Record has no timestamp");
        }

        if record.has_inverted_interval() {
            counts.invalid_interval += 1;
            debug!(row = record.row, worker = %record.worker, "Record end does not follow start");
        }

        match annotated.resolution.status {
            MappingStatus::Matched => {}
            MappingStatus::Empty => counts.empty_process += 1,
            MappingStatus::NotFoundAutoCategorized => {
                self.unmatched.insert(record.process.trim().to_string());
            }
        }

        if let Some(shift) = annotated.shift {
            if !date_known && self.unknown_dates.insert(shift.working_day) {
                debug!(working_day = %shift.working_day, "Working day missing from shift calendar");
            }
        }
    }

    /// Record the number of overlap groups found by interval merging.
    pub fn set_overlap_groups(&mut self, groups: usize) {
        self.diagnostics.overlap_groups = groups;
    }

    /// Finished diagnostics with distinct, sorted lists
    #[must_use]
    pub fn finish(self) -> ReportDiagnostics {
        ReportDiagnostics {
            unmatched_processes: self.unmatched.into_iter().collect(),
            unknown_calendar_dates: self.unknown_dates.into_iter().collect(),
            ..self.diagnostics
        }
    }
}

/// Annotates raw records with validity, shift, crew letter and process
#[derive(Debug, Clone, Copy)]
pub struct RecordAnnotator<'a> {
    classifier: &'a ShiftClassifier,
    snapshot: &'a CatalogSnapshot,
}

impl<'a> RecordAnnotator<'a> {
    /// Annotator over one classifier and snapshot
    #[must_use]
    pub const fn new(classifier: &'a ShiftClassifier, snapshot: &'a CatalogSnapshot) -> Self {
        Self { classifier, snapshot }
    }

    /// Annotate one record
    ///
    /// `adjusted_minutes` starts at the reported minutes; interval merging
    /// adjusts it afterwards.
    pub fn annotate(
        &self,
        record: ActivityRecord,
        diagnostics: &mut DiagnosticsCollector,
    ) -> AnnotatedRecord {
        let shift = self.classifier.classify_record(&record);
        let letter = shift.and_then(|shift| self.snapshot.calendar.letter_for(shift));
        let date_known = letter.is_some();
        let staffing_letter = letter.unwrap_or_default().to_string();
        let resolution = self.snapshot.catalog.resolve(&record.process);

        let annotated = AnnotatedRecord {
            is_valid: record.is_valid(),
            shift,
            staffing_letter,
            resolution,
            adjusted_minutes: record.actual_minutes,
            is_overlap: false,
            record,
        };
        diagnostics.observe(&annotated, date_known);
        annotated
    }

    /// Annotate a batch of records in input order
    pub fn annotate_all<I>(&self, records: I) -> (Vec<AnnotatedRecord>, DiagnosticsCollector)
    where
        I: IntoIterator<Item = ActivityRecord>,
    {
        let mut diagnostics = DiagnosticsCollector::new();
        let annotated =
            records.into_iter().map(|record| self.annotate(record, &mut diagnostics)).collect();
        (annotated, diagnostics)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use chrono::{NaiveDate, NaiveDateTime};
    use shiftpulse_domain::types::{
        ProcessMappingEntry, ShiftCalendarEntry, ShiftDesignation,
    };

    use super::*;
    use crate::calendar::ShiftCalendar;
    use crate::catalog::ProcessCatalog;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 3, day).unwrap().and_hms_opt(hour, 0, 0).unwrap()
    }

    fn snapshot() -> CatalogSnapshot {
        let date = NaiveDate::from_ymd_opt(2026, 3, 9).unwrap();
        CatalogSnapshot {
            version: 3,
            calendar: Arc::new(ShiftCalendar::from_entries(vec![ShiftCalendarEntry::new(
                date, "A", "C",
            )])),
            catalog: Arc::new(ProcessCatalog::from_entries(vec![ProcessMappingEntry {
                raw_description: "Cut".into(),
                category: "BT Process".into(),
                process_name: "Cutting".into(),
                sequence: 1,
            }])),
        }
    }

    fn record(row: usize, process: &str, start: Option<NaiveDateTime>) -> ActivityRecord {
        ActivityRecord {
            row,
            worker: "W1".into(),
            process: process.into(),
            start,
            end: start.map(|s| s + chrono::Duration::minutes(30)),
            actual_minutes: 30.0,
            result_cnt: "X".into(),
            ..Default::default()
        }
    }

    #[test]
    fn annotates_shift_letter_and_process() {
        let classifier = ShiftClassifier::default();
        let snapshot = snapshot();
        let annotator = RecordAnnotator::new(&classifier, &snapshot);

        let mut diagnostics = DiagnosticsCollector::new();
        // 02:00 on the 10th belongs to the night shift of the 9th
        let annotated = annotator.annotate(record(1, "cut", Some(at(10, 2))), &mut diagnostics);

        let shift = annotated.shift.unwrap();
        assert_eq!(shift.designation, ShiftDesignation::Night);
        assert_eq!(annotated.staffing_letter, "C");
        assert_eq!(annotated.resolution.process_name, "Cutting");
        assert!((annotated.adjusted_minutes - 30.0).abs() < f64::EPSILON);
        assert!(annotated.is_aggregatable());
    }

    #[test]
    fn diagnostics_count_each_problem() {
        let classifier = ShiftClassifier::default();
        let snapshot = snapshot();
        let annotator = RecordAnnotator::new(&classifier, &snapshot);

        let mut inverted = record(4, "Cut", Some(at(9, 10)));
        inverted.end = Some(at(9, 9));
        let mut rework = record(5, "Cut", Some(at(9, 10)));
        rework.rework = true;
        let mut invalid = record(6, "Cut", Some(at(9, 10)));
        invalid.result_cnt = "-".into();

        let (annotated, diagnostics) = annotator.annotate_all(vec![
            record(1, "Weld", Some(at(12, 8))),
            record(2, "   ", Some(at(9, 8))),
            record(3, "Cut", None),
            inverted,
            rework,
            invalid,
            record(7, "Weld", Some(at(12, 9))),
        ]);
        let diagnostics = diagnostics.finish();

        assert_eq!(annotated.len(), 7);
        assert_eq!(diagnostics.total_records, 7);
        assert_eq!(diagnostics.missing_timestamp, 1);
        assert_eq!(diagnostics.invalid_interval, 1);
        assert_eq!(diagnostics.rework_excluded, 1);
        assert_eq!(diagnostics.invalid_result, 1);
        assert_eq!(diagnostics.empty_process, 1);
        assert_eq!(diagnostics.unmatched_processes, vec!["Weld".to_string()]);
        let unknown = NaiveDate::from_ymd_opt(2026, 3, 12).unwrap();
        assert_eq!(diagnostics.unknown_calendar_dates, vec![unknown]);
        assert!(annotated[0].staffing_letter.is_empty());
        assert!(annotated[2].shift.is_none());
    }

    #[test]
    fn reannotating_yields_identical_output() {
        let classifier = ShiftClassifier::default();
        let snapshot = snapshot();
        let annotator = RecordAnnotator::new(&classifier, &snapshot);
        let input = vec![record(1, "Cut", Some(at(10, 2))), record(2, "Paint", Some(at(10, 12)))];

        let (first, _) = annotator.annotate_all(input.clone());
        let (second, _) = annotator.annotate_all(first.iter().map(|a| a.record.clone()));
        assert_eq!(first, second);
    }
}
