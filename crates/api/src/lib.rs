//! # ShiftPulse App
//!
//! Application layer - commands, presentation and the CLI entry point.
//!
//! This crate contains:
//! - Commands (CLI → core bridge)
//! - Application context (dependency injection)
//! - Report views and the text table renderer
//!
//! ## Architecture
//! - Depends on `domain`, `core`, and `infra`
//! - Wires file-backed sources into the core services

pub mod adapters;
pub mod commands;
pub mod context;
pub mod utils;

// Re-export for convenience
pub use commands::*;
pub use context::*;
