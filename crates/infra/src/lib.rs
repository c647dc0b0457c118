//! # ShiftPulse Infrastructure
//!
//! Infrastructure implementations of core domain ports.
//!
//! This crate contains:
//! - File-backed record, calendar and mapping sources (CSV, JSON, TOML)
//! - Configuration loading (files + environment overrides)
//! - Logging initialisation
//! - Conversions from external errors into domain errors
//!
//! ## Architecture
//! - Implements traits defined in `shiftpulse-core`
//! - Depends on `shiftpulse-domain` and `shiftpulse-core`
//! - Contains all "impure" code (file system, process environment)

pub mod config;
pub mod errors;
pub mod observability;
pub mod sources;

// Re-export commonly used items
pub use errors::InfraError;
pub use observability::init_logging;
pub use sources::{FileFormat, FileMappingSource, FileRecordSource, FileShiftCalendarSource};
