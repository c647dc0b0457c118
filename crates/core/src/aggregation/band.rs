//! Performance bands
//!
//! Lower bounds are inclusive: a utilization of exactly 80.0 is Excellent
//! and 79.999 is Normal.

use shiftpulse_domain::constants::{
    EFFICIENCY_EXCELLENT_PCT, EFFICIENCY_NORMAL_PCT, EFFICIENCY_POOR_PCT,
    UTILIZATION_EXCELLENT_PCT, UTILIZATION_NORMAL_PCT, UTILIZATION_POOR_PCT,
};
use shiftpulse_domain::types::{Band, MetricType};

/// Inclusive lower bounds of the Excellent, Normal and Poor bands
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BandThresholds {
    /// Lower bound of Excellent
    pub excellent: f64,
    /// Lower bound of Normal
    pub normal: f64,
    /// Lower bound of Poor
    pub poor: f64,
}

impl BandThresholds {
    /// Utilization thresholds: 80 / 50 / 30
    pub const UTILIZATION: Self = Self {
        excellent: UTILIZATION_EXCELLENT_PCT,
        normal: UTILIZATION_NORMAL_PCT,
        poor: UTILIZATION_POOR_PCT,
    };

    /// Efficiency thresholds: 120 / 100 / 80
    pub const EFFICIENCY: Self = Self {
        excellent: EFFICIENCY_EXCELLENT_PCT,
        normal: EFFICIENCY_NORMAL_PCT,
        poor: EFFICIENCY_POOR_PCT,
    };

    /// Thresholds of a metric
    #[must_use]
    pub const fn for_metric(metric: MetricType) -> Self {
        match metric {
            MetricType::Utilization => Self::UTILIZATION,
            MetricType::Efficiency => Self::EFFICIENCY,
        }
    }

    /// Band of a rate. NaN falls through to Critical.
    #[must_use]
    pub fn classify(&self, rate: f64) -> Band {
        if rate >= self.excellent {
            Band::Excellent
        } else if rate >= self.normal {
            Band::Normal
        } else if rate >= self.poor {
            Band::Poor
        } else {
            Band::Critical
        }
    }
}

/// Band of a utilization rate
#[must_use]
pub fn utilization_band(rate: f64) -> Band {
    BandThresholds::UTILIZATION.classify(rate)
}

/// Band of an efficiency rate
#[must_use]
pub fn efficiency_band(rate: f64) -> Band {
    BandThresholds::EFFICIENCY.classify(rate)
}

/// Band of a rate under `metric`
#[must_use]
pub fn band_for(metric: MetricType, rate: f64) -> Band {
    BandThresholds::for_metric(metric).classify(rate)
}
