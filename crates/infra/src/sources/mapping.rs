//! File-backed process mapping table

use std::path::{Path, PathBuf};

use serde::Deserialize;
use shiftpulse_core::catalog::auto_categorize;
use shiftpulse_core::ports::ProcessMappingSource;
use shiftpulse_domain::constants::UNMAPPED_SEQUENCE;
use shiftpulse_domain::types::ProcessMappingEntry;
use shiftpulse_domain::Result;
use tracing::info;

use super::format::{read_rows, write_rows};

const TOML_KEY: &str = "mappings";

#[derive(Debug, Deserialize)]
struct MappingRow {
    #[serde(default)]
    raw_description: String,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    process_name: Option<String>,
    #[serde(default)]
    sequence: Option<i64>,
}

/// Fill blank cells: category from the keyword rules, name from the raw
/// description, sequence sorts last.
fn into_entry(raw: MappingRow) -> ProcessMappingEntry {
    let raw_description = raw.raw_description.trim().to_string();
    let non_blank =
        |cell: Option<String>| cell.map(|s| s.trim().to_string()).filter(|s| !s.is_empty());

    ProcessMappingEntry {
        category: non_blank(raw.category)
            .unwrap_or_else(|| auto_categorize(&raw_description).to_string()),
        process_name: non_blank(raw.process_name).unwrap_or_else(|| raw_description.clone()),
        sequence: raw.sequence.unwrap_or(UNMAPPED_SEQUENCE),
        raw_description,
    }
}

/// Process mapping table stored in a `.csv`, `.json` or `.toml` file
///
/// Columns: `raw_description, category, process_name, sequence`. Saving
/// writes the same format back.
#[derive(Debug, Clone)]
pub struct FileMappingSource {
    path: PathBuf,
}

impl FileMappingSource {
    /// Source reading and writing the mapping file at `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the mapping file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProcessMappingSource for FileMappingSource {
    fn load_mappings(&self) -> Result<Vec<ProcessMappingEntry>> {
        let rows: Vec<MappingRow> = read_rows(&self.path, TOML_KEY)?;
        let entries: Vec<_> = rows.into_iter().map(into_entry).collect();

        info!(path = %self.path.display(), mappings = entries.len(), "Process mappings loaded");
        Ok(entries)
    }

    fn save_mappings(&self, entries: &[ProcessMappingEntry]) -> Result<()> {
        write_rows(&self.path, TOML_KEY, entries)?;
        info!(path = %self.path.display(), mappings = entries.len(), "Process mappings saved");
        Ok(())
    }
}
