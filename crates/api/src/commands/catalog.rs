//! Process catalog commands

use shiftpulse_domain::types::{ProcessMappingEntry, ProcessResolution};
use shiftpulse_domain::utils::normalize::normalize_process_key;
use shiftpulse_domain::{Result, ShiftPulseError};

use crate::utils::logging::logged;
use crate::AppContext;

/// Resolve a raw description against the current catalog.
#[must_use]
pub fn resolve_process(ctx: &AppContext, raw_description: &str) -> ProcessResolution {
    ctx.store.snapshot().catalog.resolve(raw_description)
}

/// Mapping rows ordered by sequence, then description.
#[must_use]
pub fn list_mappings(ctx: &AppContext) -> Vec<ProcessMappingEntry> {
    ctx.store.snapshot().catalog.sorted_entries().into_iter().cloned().collect()
}

/// Add or replace a mapping row and save the table.
///
/// The edited table is written first and swapped into the store only once
/// the save succeeds. Returns the new catalog version.
///
/// # Errors
/// Returns `ShiftPulseError::InvalidInput` for a description with no
/// matchable characters, or the persistence error.
pub fn add_mapping(ctx: &AppContext, entry: ProcessMappingEntry) -> Result<u64> {
    logged("catalog::add_mapping", || {
        if normalize_process_key(&entry.raw_description).is_empty() {
            return Err(ShiftPulseError::InvalidInput(format!(
                "process description '{}' has no matchable characters",
                entry.raw_description
            )));
        }
        let next = ctx.store.snapshot().catalog.with_entry(entry);
        ctx.save_mappings(next.entries())?;
        Ok(ctx.store.replace_mappings(next.entries().to_vec()))
    })
}

/// Delete a mapping row and save the table.
///
/// As with [`add_mapping`], the store changes only after a successful save.
///
/// # Errors
/// Returns `ShiftPulseError::NotFound` when no row matches, or the
/// persistence error.
pub fn delete_mapping(ctx: &AppContext, raw_description: &str) -> Result<ProcessMappingEntry> {
    logged("catalog::delete_mapping", || {
        let (next, removed) = ctx.store.snapshot().catalog.without(raw_description);
        let removed = removed.ok_or_else(|| {
            ShiftPulseError::NotFound(format!("no process mapping for '{raw_description}'"))
        })?;
        ctx.save_mappings(next.entries())?;
        ctx.store.replace_mappings(next.entries().to_vec());
        Ok(removed)
    })
}
