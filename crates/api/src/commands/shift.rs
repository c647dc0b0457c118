//! Shift classification commands

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use shiftpulse_domain::types::ShiftDesignation;
use shiftpulse_domain::{Result, ShiftPulseError};
use shiftpulse_infra::sources::parse_timestamp;

use crate::utils::logging::logged;
use crate::AppContext;

/// Working shift of a single timestamp
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShiftLookup {
    /// Parsed timestamp
    pub timestamp: NaiveDateTime,
    /// Working day the timestamp belongs to
    pub working_day: NaiveDate,
    /// Day or night half
    pub designation: ShiftDesignation,
    /// `None` when the working day is missing from the calendar
    pub staffing_letter: Option<String>,
}

/// Classify a timestamp given as text.
///
/// # Errors
/// Returns `ShiftPulseError::InvalidInput` if the text is blank or matches
/// no accepted timestamp layout.
pub fn classify_timestamp(ctx: &AppContext, raw: &str) -> Result<ShiftLookup> {
    logged("shift::classify_timestamp", || {
        let timestamp = parse_timestamp(1, "input", raw)?
            .ok_or_else(|| ShiftPulseError::InvalidInput("empty timestamp".to_string()))?;

        let shift = ctx.report_service.classifier().classify(timestamp);
        let snapshot = ctx.store.snapshot();
        Ok(ShiftLookup {
            timestamp,
            working_day: shift.working_day,
            designation: shift.designation,
            staffing_letter: snapshot.calendar.letter_for(shift).map(str::to_string),
        })
    })
}
