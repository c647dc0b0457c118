//! Process catalog: raw description → (category, name, sequence)
//!
//! Matching is exact on the normalized key (see
//! [`normalize_process_key`]), so "Fit-Up", "FIT UP" and "fit/up" resolve to
//! the same mapping row. Descriptions without a row fall back to
//! [`auto_categorize`].

use ahash::AHashMap as HashMap;
use shiftpulse_domain::constants::UNMAPPED_SEQUENCE;
use shiftpulse_domain::types::{MappingStatus, ProcessMappingEntry, ProcessResolution};
use shiftpulse_domain::utils::normalize::normalize_process_key;
use tracing::warn;

use super::heuristics::auto_categorize;

/// Immutable process mapping table
///
/// Rows keep load order; a later row with the same normalized key replaces
/// the earlier one in place. Edits return a new catalog.
#[derive(Debug, Clone, Default)]
pub struct ProcessCatalog {
    entries: Vec<ProcessMappingEntry>,
    index: HashMap<String, usize>,
}

impl ProcessCatalog {
    /// Create an empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from mapping rows
    ///
    /// Rows whose description normalizes to an empty key cannot be matched
    /// and are skipped with a warning.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = ProcessMappingEntry>,
    {
        let mut catalog = Self::new();
        for entry in entries {
            catalog.insert(entry);
        }
        catalog
    }

    fn insert(&mut self, entry: ProcessMappingEntry) -> bool {
        let key = normalize_process_key(&entry.raw_description);
        if key.is_empty() {
            warn!(category = %entry.category, "Skipping process mapping with empty description");
            return false;
        }

        match self.index.get(&key) {
            Some(&position) => self.entries[position] = entry,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(entry);
            }
        }
        true
    }

    /// Number of mapping rows
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping table is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rows in load order
    #[must_use]
    pub fn entries(&self) -> &[ProcessMappingEntry] {
        &self.entries
    }

    /// Rows ordered for display: sequence, then raw description
    #[must_use]
    pub fn sorted_entries(&self) -> Vec<&ProcessMappingEntry> {
        let mut sorted: Vec<_> = self.entries.iter().collect();
        sorted.sort_by(|a, b| {
            a.sequence.cmp(&b.sequence).then_with(|| a.raw_description.cmp(&b.raw_description))
        });
        sorted
    }

    /// Mapping row for a raw description, if any
    #[must_use]
    pub fn lookup(&self, raw_description: &str) -> Option<&ProcessMappingEntry> {
        let key = normalize_process_key(raw_description);
        self.index.get(&key).map(|&position| &self.entries[position])
    }

    /// Resolve a raw description to its category, name and sequence
    #[must_use]
    pub fn resolve(&self, raw_description: &str) -> ProcessResolution {
        let trimmed = raw_description.trim();
        if trimmed.is_empty() {
            return ProcessResolution::empty();
        }

        if let Some(entry) = self.lookup(trimmed) {
            return ProcessResolution::from(entry);
        }

        ProcessResolution {
            category: auto_categorize(trimmed).to_string(),
            process_name: trimmed.to_string(),
            sequence: UNMAPPED_SEQUENCE,
            status: MappingStatus::NotFoundAutoCategorized,
        }
    }

    /// New catalog with a row added, or replaced if its key already exists
    #[must_use]
    pub fn with_entry(&self, entry: ProcessMappingEntry) -> Self {
        let mut next = self.clone();
        next.insert(entry);
        next
    }

    /// New catalog without the row matching `raw_description`
    ///
    /// Returns the removed row alongside the new catalog.
    #[must_use]
    pub fn without(&self, raw_description: &str) -> (Self, Option<ProcessMappingEntry>) {
        let key = normalize_process_key(raw_description);
        let Some(&position) = self.index.get(&key) else {
            return (self.clone(), None);
        };

        let removed = self.entries[position].clone();
        let remaining = self
            .entries
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != position)
            .map(|(_, entry)| entry.clone());
        (Self::from_entries(remaining), Some(removed))
    }
}
