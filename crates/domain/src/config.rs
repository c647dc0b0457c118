//! Configuration management

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LOG_LEVEL, DEFAULT_OUTLIER_THRESHOLD_PCT};
use crate::errors::{Result, ShiftPulseError};
use crate::types::report::{MetricType, ReportFilter, ReportRequest};

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Report defaults
    #[serde(default)]
    pub report: ReportConfig,
    /// Catalog file locations
    #[serde(default)]
    pub catalogs: CatalogConfig,
    /// Logging setup
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report computation defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Efficiency ceiling (percent) for outlier flagging
    #[serde(default = "default_outlier_threshold")]
    pub outlier_threshold_pct: f64,
    /// Default metric
    #[serde(default)]
    pub metric: MetricType,
}

/// Locations of the shift calendar and process mapping tables
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Shift calendar file
    #[serde(default)]
    pub shift_calendar_path: Option<PathBuf>,
    /// Process mapping file
    #[serde(default)]
    pub process_mapping_path: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Emit JSON lines instead of text
    #[serde(default)]
    pub json: bool,
}

fn default_outlier_threshold() -> f64 {
    DEFAULT_OUTLIER_THRESHOLD_PCT
}

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { outlier_threshold_pct: DEFAULT_OUTLIER_THRESHOLD_PCT, metric: MetricType::default() }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_log_level(), json: false }
    }
}

impl ReportConfig {
    /// Build a report request from these defaults and a filter.
    #[must_use]
    pub fn request(&self, filter: ReportFilter) -> ReportRequest {
        ReportRequest {
            metric: self.metric,
            outlier_threshold_pct: self.outlier_threshold_pct,
            filter,
        }
    }
}

impl Config {
    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    /// Returns `ShiftPulseError::Config` if the outlier threshold is not a
    /// positive finite number or the log level is blank.
    pub fn validate(&self) -> Result<()> {
        let threshold = self.report.outlier_threshold_pct;
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ShiftPulseError::Config(format!(
                "outlier_threshold_pct must be a positive number, got {threshold}"
            )));
        }
        if self.logging.level.trim().is_empty() {
            return Err(ShiftPulseError::Config("logging.level must not be empty".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_constants() {
        let config = Config::default();
        assert!((config.report.outlier_threshold_pct - 1000.0).abs() < f64::EPSILON);
        assert_eq!(config.report.metric, MetricType::Utilization);
        assert_eq!(config.logging.level, "info");
        assert!(config.catalogs.shift_calendar_path.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config =
            serde_json::from_str(r#"{"report":{"metric":"efficiency"}}"#).unwrap();
        assert_eq!(config.report.metric, MetricType::Efficiency);
        assert!((config.report.outlier_threshold_pct - 1000.0).abs() < f64::EPSILON);
        assert!(!config.logging.json);
    }

    #[test]
    fn rejects_non_positive_threshold() {
        let mut config = Config::default();
        config.report.outlier_threshold_pct = 0.0;
        assert!(matches!(config.validate(), Err(ShiftPulseError::Config(_))));

        config.report.outlier_threshold_pct = f64::NAN;
        assert!(config.validate().is_err());
    }

    #[test]
    fn request_carries_metric_and_threshold() {
        let report = ReportConfig { outlier_threshold_pct: 500.0, metric: MetricType::Efficiency };
        let request = report.request(ReportFilter::default());
        assert_eq!(request.metric, MetricType::Efficiency);
        assert!((request.outlier_threshold_pct - 500.0).abs() < f64::EPSILON);
    }
}
