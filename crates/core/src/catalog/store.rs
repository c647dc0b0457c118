//! Versioned catalog snapshots
//!
//! A report pass reads one [`CatalogSnapshot`] for its whole duration. Edits
//! build a new calendar or mapping table and swap the snapshot pointer, so
//! a pass in flight keeps the version it started with.

use std::sync::Arc;

use parking_lot::RwLock;
use shiftpulse_domain::types::{ProcessMappingEntry, ShiftCalendarEntry};
use shiftpulse_domain::Result;
use tracing::info;

use super::ProcessCatalog;
use crate::calendar::ShiftCalendar;
use crate::ports::{ProcessMappingSource, ShiftCalendarSource};

/// Immutable pair of catalogs used by one aggregation pass
#[derive(Debug, Clone, Default)]
pub struct CatalogSnapshot {
    /// Incremented on every swap
    pub version: u64,
    /// Shift calendar
    pub calendar: Arc<ShiftCalendar>,
    /// Process catalog
    pub catalog: Arc<ProcessCatalog>,
}

/// Holder of the current catalog snapshot
#[derive(Debug, Default)]
pub struct CatalogStore {
    current: RwLock<Arc<CatalogSnapshot>>,
}

impl CatalogStore {
    /// Create a store with the given catalogs at version 0
    #[must_use]
    pub fn new(calendar: ShiftCalendar, catalog: ProcessCatalog) -> Self {
        let snapshot = CatalogSnapshot {
            version: 0,
            calendar: Arc::new(calendar),
            catalog: Arc::new(catalog),
        };
        Self { current: RwLock::new(Arc::new(snapshot)) }
    }

    /// Load both catalogs from their sources
    ///
    /// # Errors
    /// Propagates any error raised by either source.
    pub fn load(
        calendar_source: &dyn ShiftCalendarSource,
        mapping_source: &dyn ProcessMappingSource,
    ) -> Result<Self> {
        let calendar = ShiftCalendar::from_entries(calendar_source.load_calendar()?);
        let catalog = ProcessCatalog::from_entries(mapping_source.load_mappings()?);
        info!(
            calendar_dates = calendar.len(),
            mappings = catalog.len(),
            "Catalogs loaded"
        );
        Ok(Self::new(calendar, catalog))
    }

    /// Current snapshot (copy-on-read)
    #[must_use]
    pub fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&self.current.read())
    }

    /// Current version number
    #[must_use]
    pub fn version(&self) -> u64 {
        self.current.read().version
    }

    fn swap<F>(&self, edit: F) -> Arc<CatalogSnapshot>
    where
        F: FnOnce(&CatalogSnapshot) -> CatalogSnapshot,
    {
        let mut guard = self.current.write();
        let mut next = edit(&guard);
        next.version = guard.version + 1;
        let next = Arc::new(next);
        *guard = Arc::clone(&next);
        next
    }

    /// Replace the whole shift calendar (last entry per date wins)
    pub fn replace_calendar<I>(&self, entries: I) -> u64
    where
        I: IntoIterator<Item = ShiftCalendarEntry>,
    {
        let calendar = Arc::new(ShiftCalendar::from_entries(entries));
        let next = self.swap(|current| CatalogSnapshot {
            calendar,
            catalog: Arc::clone(&current.catalog),
            ..CatalogSnapshot::default()
        });
        info!(version = next.version, dates = next.calendar.len(), "Shift calendar replaced");
        next.version
    }

    /// Reload the shift calendar from a source
    ///
    /// # Errors
    /// Propagates the source error; the current snapshot is kept.
    pub fn reload_calendar(&self, source: &dyn ShiftCalendarSource) -> Result<u64> {
        let entries = source.load_calendar()?;
        Ok(self.replace_calendar(entries))
    }

    /// Replace the whole process mapping table
    pub fn replace_mappings<I>(&self, entries: I) -> u64
    where
        I: IntoIterator<Item = ProcessMappingEntry>,
    {
        let catalog = Arc::new(ProcessCatalog::from_entries(entries));
        let next = self.swap(|current| CatalogSnapshot {
            calendar: Arc::clone(&current.calendar),
            catalog,
            ..CatalogSnapshot::default()
        });
        info!(version = next.version, mappings = next.catalog.len(), "Process mappings replaced");
        next.version
    }

    /// Add or update one mapping row (matched by normalized description)
    pub fn upsert_mapping(&self, entry: ProcessMappingEntry) -> u64 {
        let raw = entry.raw_description.clone();
        let next = self.swap(|current| CatalogSnapshot {
            calendar: Arc::clone(&current.calendar),
            catalog: Arc::new(current.catalog.with_entry(entry)),
            ..CatalogSnapshot::default()
        });
        info!(version = next.version, raw_description = %raw, "Process mapping upserted");
        next.version
    }

    /// Delete one mapping row (matched by normalized description)
    ///
    /// Returns the removed row. The version is bumped only when a row was
    /// actually removed.
    pub fn delete_mapping(&self, raw_description: &str) -> Option<ProcessMappingEntry> {
        let mut guard = self.current.write();
        let (catalog, removed) = guard.catalog.without(raw_description);
        if removed.is_some() {
            *guard = Arc::new(CatalogSnapshot {
                version: guard.version + 1,
                calendar: Arc::clone(&guard.calendar),
                catalog: Arc::new(catalog),
            });
            info!(version = guard.version, raw_description, "Process mapping deleted");
        }
        removed
    }
}
