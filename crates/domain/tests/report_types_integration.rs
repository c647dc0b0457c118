//! Integration tests for report types
//!
//! Covers filter semantics over annotated records and the serialized shape
//! of values that cross the application boundary.

use chrono::NaiveDate;
use shiftpulse_domain::types::{
    ActivityRecord, AnnotatedRecord, MappingStatus, ProcessResolution, ReportFilter,
    ReportRequest, ShiftDesignation, WorkingShift,
};
use shiftpulse_domain::{MetricType, ShiftPulseError};

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
}

fn annotated(
    worker: &str,
    shift: Option<WorkingShift>,
    letter: &str,
    category: &str,
) -> AnnotatedRecord {
    AnnotatedRecord {
        record: ActivityRecord {
            worker: worker.into(),
            result_cnt: "X".into(),
            ..ActivityRecord::default()
        },
        is_valid: true,
        shift,
        staffing_letter: letter.into(),
        resolution: ProcessResolution {
            category: category.into(),
            process_name: "Cut".into(),
            sequence: 1,
            status: MappingStatus::Matched,
        },
        adjusted_minutes: 0.0,
        is_overlap: false,
    }
}

fn night(d: u32) -> Option<WorkingShift> {
    Some(WorkingShift { working_day: day(d), designation: ShiftDesignation::Night })
}

// ============================================================================
// ReportFilter
// ============================================================================

#[test]
fn empty_filter_matches_everything() {
    let filter = ReportFilter::default();
    assert!(filter.is_empty());
    assert!(filter.matches(&annotated("W1", None, "", "")));
    assert!(filter.matches(&annotated("W2", night(10), "B", "BT Process")));
}

#[test]
fn date_range_is_inclusive_on_working_day() {
    let filter = ReportFilter { from: Some(day(9)), to: Some(day(10)), ..ReportFilter::default() };
    assert!(filter.matches(&annotated("W1", night(9), "D", "BT Process")));
    assert!(filter.matches(&annotated("W1", night(10), "B", "BT Process")));
    assert!(!filter.matches(&annotated("W1", night(11), "C", "BT Process")));
    assert!(!filter.matches(&annotated("W1", None, "", "BT Process")));
}

#[test]
fn unknown_calendar_date_fails_letter_but_not_designation() {
    let record = annotated("W1", night(20), "", "BT Process");

    let by_letter = ReportFilter { staffing_letter: Some("B".into()), ..ReportFilter::default() };
    assert!(!by_letter.matches(&record));

    let by_shift =
        ReportFilter { designation: Some(ShiftDesignation::Night), ..ReportFilter::default() };
    assert!(by_shift.matches(&record));
}

#[test]
fn letter_and_category_compare_case_insensitively() {
    let record = annotated("W1", night(10), "B", "BT Process");
    let filter = ReportFilter {
        workers: vec!["W1".into()],
        staffing_letter: Some(" b ".into()),
        category: Some("bt process".into()),
        ..ReportFilter::default()
    };
    assert!(filter.matches(&record));

    let other_worker = ReportFilter { workers: vec!["W2".into()], ..ReportFilter::default() };
    assert!(!other_worker.matches(&record));
}

// ============================================================================
// Serialized shapes
// ============================================================================

#[test]
fn errors_serialize_tagged() {
    let json = serde_json::to_value(ShiftPulseError::invalid_row(3, "missing worker")).unwrap();
    assert_eq!(json["type"], "InvalidInput");
    assert_eq!(json["message"], "row 3: missing worker");
}

#[test]
fn request_deserializes_with_default_filter() {
    let json = r#"{"metric": "efficiency", "outlier_threshold_pct": 250.0}"#;
    let request: ReportRequest = serde_json::from_str(json).unwrap();
    assert_eq!(request.metric, MetricType::Efficiency);
    assert!(request.filter.is_empty());
}

#[test]
fn filter_round_trips_through_json() {
    let filter = ReportFilter {
        workers: vec!["W1".into()],
        from: Some(day(1)),
        designation: Some(ShiftDesignation::Day),
        ..ReportFilter::default()
    };
    let json = serde_json::to_string(&filter).unwrap();
    assert!(json.contains(r#""from":"2026-03-01""#));
    assert_eq!(serde_json::from_str::<ReportFilter>(&json).unwrap(), filter);
}
