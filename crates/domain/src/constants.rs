//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Shift geometry
/// Minutes in one standard shift (11 working hours).
pub const SHIFT_MINUTES: f64 = 660.0;
/// Hour at which the day shift starts (inclusive).
pub const DAY_SHIFT_START_HOUR: u32 = 6;
/// Hour at which the day shift ends (exclusive); night shift starts here.
pub const DAY_SHIFT_END_HOUR: u32 = 18;

// Record validity
/// Result-count marker that makes a record count toward the metrics.
pub const VALID_RESULT_MARKER: &str = "X";

// Process catalog
/// Sequence assigned to unmapped or empty processes so they sort last.
pub const UNMAPPED_SEQUENCE: i64 = 999;
/// Characters removed from process descriptions before matching.
pub const PROCESS_KEY_STRIP_CHARS: [char; 6] = ['-', '*', '/', '(', ')', '%'];

// Outliers
/// Default efficiency ceiling (percent) above which a detail row is an outlier.
pub const DEFAULT_OUTLIER_THRESHOLD_PCT: f64 = 1000.0;

// Band thresholds (lower bounds, inclusive)
/// Utilization lower bound of the Excellent band.
pub const UTILIZATION_EXCELLENT_PCT: f64 = 80.0;
/// Utilization lower bound of the Normal band.
pub const UTILIZATION_NORMAL_PCT: f64 = 50.0;
/// Utilization lower bound of the Poor band.
pub const UTILIZATION_POOR_PCT: f64 = 30.0;
/// Efficiency lower bound of the Excellent band.
pub const EFFICIENCY_EXCELLENT_PCT: f64 = 120.0;
/// Efficiency lower bound of the Normal band.
pub const EFFICIENCY_NORMAL_PCT: f64 = 100.0;
/// Efficiency lower bound of the Poor band.
pub const EFFICIENCY_POOR_PCT: f64 = 80.0;

// Logging
/// Filter directive used when no level is configured.
pub const DEFAULT_LOG_LEVEL: &str = "info";
