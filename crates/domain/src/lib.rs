//! # ShiftPulse Domain
//!
//! Business domain types and models for ShiftPulse.
//!
//! This crate contains:
//! - Activity records, catalog rows, aggregates and report types
//! - Domain error types and Result definitions
//! - Configuration structures
//! - Domain constants (shift length, band thresholds, markers)
//!
//! ## Architecture
//! - No dependencies on other ShiftPulse crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
