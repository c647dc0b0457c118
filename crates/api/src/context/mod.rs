//! Application context - dependency injection container

use std::path::PathBuf;
use std::sync::Arc;

use shiftpulse_core::ports::{ProcessMappingSource, ShiftCalendarSource};
use shiftpulse_core::{CatalogStore, ProcessCatalog, ReportService, ShiftCalendar};
use shiftpulse_domain::types::ProcessMappingEntry;
use shiftpulse_domain::{Config, Result, ShiftPulseError};
use shiftpulse_infra::{FileMappingSource, FileShiftCalendarSource};
use tracing::{info, warn};

/// Catalog file locations given on the command line
///
/// Each path, when set, wins over the matching `catalogs.*` config entry.
#[derive(Debug, Clone, Default)]
pub struct CatalogPaths {
    /// Shift calendar file
    pub calendar: Option<PathBuf>,
    /// Process mapping file
    pub mapping: Option<PathBuf>,
}

/// Application context - holds the catalogs and the report service
pub struct AppContext {
    /// Effective configuration
    pub config: Config,
    /// Live catalog snapshot holder
    pub store: Arc<CatalogStore>,
    /// Aggregation service over `store`
    pub report_service: ReportService,
    calendar_source: Option<FileShiftCalendarSource>,
    mapping_source: Option<FileMappingSource>,
}

impl AppContext {
    /// Build the context, loading both catalogs.
    ///
    /// A missing calendar or mapping location yields an empty catalog. A
    /// configured mapping file that does not exist yet is also treated as
    /// empty so the first `mapping add` can create it.
    ///
    /// # Errors
    /// Propagates errors from reading or parsing the catalog files.
    pub fn new(config: Config, paths: CatalogPaths) -> Result<Self> {
        let calendar_source = paths
            .calendar
            .or_else(|| config.catalogs.shift_calendar_path.clone())
            .map(FileShiftCalendarSource::new);
        let mapping_source = paths
            .mapping
            .or_else(|| config.catalogs.process_mapping_path.clone())
            .map(FileMappingSource::new);

        let calendar = match &calendar_source {
            Some(source) => ShiftCalendar::from_entries(source.load_calendar()?),
            None => {
                warn!("No shift calendar configured; staffing letters will be empty");
                ShiftCalendar::new()
            }
        };

        let catalog = match &mapping_source {
            Some(source) if source.path().exists() => {
                ProcessCatalog::from_entries(source.load_mappings()?)
            }
            Some(source) => {
                info!(
                    path = %source.path().display(),
                    "Process mapping file not found, starting empty"
                );
                ProcessCatalog::new()
            }
            None => {
                warn!("No process mapping configured; every process will be auto-categorized");
                ProcessCatalog::new()
            }
        };

        let store = Arc::new(CatalogStore::new(calendar, catalog));
        let report_service = ReportService::new(Arc::clone(&store));
        info!(
            calendar_dates = store.snapshot().calendar.len(),
            mappings = store.snapshot().catalog.len(),
            "Application context initialized"
        );

        Ok(Self { config, store, report_service, calendar_source, mapping_source })
    }

    /// Re-read the shift calendar file into the store.
    ///
    /// # Errors
    /// Returns `ShiftPulseError::Config` when no calendar is configured, or
    /// the source error (the current snapshot is kept).
    pub fn reload_calendar(&self) -> Result<u64> {
        let source = self.calendar_source.as_ref().ok_or_else(|| {
            ShiftPulseError::Config("no shift calendar file configured".to_string())
        })?;
        self.store.reload_calendar(source)
    }

    /// Write a mapping table to the configured mapping file.
    ///
    /// # Errors
    /// Returns `ShiftPulseError::Config` when no mapping file is configured,
    /// or the write error.
    pub fn save_mappings(&self, entries: &[ProcessMappingEntry]) -> Result<()> {
        let source = self.mapping_source.as_ref().ok_or_else(|| {
            ShiftPulseError::Config("no process mapping file configured".to_string())
        })?;
        source.save_mappings(entries)
    }
}
