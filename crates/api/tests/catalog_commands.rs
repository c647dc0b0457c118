//! Process mapping command tests

mod support;

use shiftpulse_core::ports::ProcessMappingSource;
use shiftpulse_domain::types::{MappingStatus, ProcessMappingEntry};
use shiftpulse_domain::{Config, ShiftPulseError};
use shiftpulse_infra::FileMappingSource;
use shiftpulse_lib::{
    add_mapping, delete_mapping, list_mappings, resolve_process, AppContext, CatalogPaths,
};
use support::Workspace;

fn entry(raw: &str, name: &str, sequence: i64) -> ProcessMappingEntry {
    ProcessMappingEntry {
        raw_description: raw.into(),
        category: "BT Process".into(),
        process_name: name.into(),
        sequence,
    }
}

#[test]
fn resolve_reports_match_status() {
    let workspace = Workspace::new();
    let ctx = workspace.context();

    assert_eq!(resolve_process(&ctx, " paint ").status, MappingStatus::Matched);
    let unmatched = resolve_process(&ctx, "Final inspection");
    assert_eq!(unmatched.status, MappingStatus::NotFoundAutoCategorized);
    assert_eq!(unmatched.category, "IM QC");
    assert_eq!(resolve_process(&ctx, "").status, MappingStatus::Empty);
}

#[test]
fn list_orders_by_sequence() {
    let workspace = Workspace::new();
    let names: Vec<_> =
        list_mappings(&workspace.context()).into_iter().map(|e| e.raw_description).collect();
    assert_eq!(names, vec!["Cut", "Paint"]);
}

#[test]
fn add_persists_and_bumps_version() {
    let workspace = Workspace::new();
    let ctx = workspace.context();

    let version = add_mapping(&ctx, entry("Fit-Up", "Fit Up", 2)).unwrap();
    assert_eq!(version, 1);
    assert_eq!(resolve_process(&ctx, "fit up").status, MappingStatus::Matched);

    let saved = FileMappingSource::new(&workspace.mapping).load_mappings().unwrap();
    assert_eq!(saved.len(), 3);
    assert_eq!(saved[2].process_name, "Fit Up");
}

#[test]
fn add_rejects_unmatchable_description() {
    let workspace = Workspace::new();
    let ctx = workspace.context();
    let result = add_mapping(&ctx, entry(" - ", "Nothing", 1));
    assert!(matches!(result, Err(ShiftPulseError::InvalidInput(_))));
    assert_eq!(ctx.store.version(), 0);
}

#[test]
fn delete_persists_and_reports_missing_rows() {
    let workspace = Workspace::new();
    let ctx = workspace.context();

    let removed = delete_mapping(&ctx, "PAINT").unwrap();
    assert_eq!(removed.sequence, 5);
    let saved = FileMappingSource::new(&workspace.mapping).load_mappings().unwrap();
    assert_eq!(saved.len(), 1);

    assert!(matches!(delete_mapping(&ctx, "Paint"), Err(ShiftPulseError::NotFound(_))));
}

#[test]
fn failed_save_leaves_catalog_unchanged() {
    let workspace = Workspace::new();
    let ctx = workspace.context();

    // A non-empty directory at the mapping path makes the final rename fail.
    std::fs::remove_file(&workspace.mapping).unwrap();
    std::fs::create_dir(&workspace.mapping).unwrap();
    std::fs::write(workspace.mapping.join("keep"), "").unwrap();

    let added = add_mapping(&ctx, entry("Fit-Up", "Fit Up", 2));
    assert!(matches!(added, Err(ShiftPulseError::Io(_))));
    assert!(matches!(delete_mapping(&ctx, "Paint"), Err(ShiftPulseError::Io(_))));

    assert_eq!(ctx.store.version(), 0);
    assert_eq!(resolve_process(&ctx, "Fit-Up").status, MappingStatus::NotFoundAutoCategorized);
    assert_eq!(resolve_process(&ctx, "Paint").status, MappingStatus::Matched);
}

#[test]
fn first_add_creates_mapping_file() {
    let workspace = Workspace::new();
    let path = workspace.dir.path().join("new-mapping.json");
    let paths = CatalogPaths { calendar: None, mapping: Some(path.clone()) };
    let ctx = AppContext::new(Config::default(), paths).unwrap();

    add_mapping(&ctx, entry("Cut", "Cut", 1)).unwrap();
    assert!(path.exists());
    let saved = FileMappingSource::new(&path).load_mappings().unwrap();
    assert_eq!(saved, vec![entry("Cut", "Cut", 1)]);
}

#[test]
fn edits_without_mapping_file_are_config_errors() {
    let ctx = AppContext::new(Config::default(), CatalogPaths::default()).unwrap();
    let added = add_mapping(&ctx, entry("Cut", "Cut", 1));
    assert!(matches!(added, Err(ShiftPulseError::Config(_))));

    // The failed save leaves the live catalog untouched.
    assert_eq!(ctx.store.version(), 0);
    assert!(ctx.store.snapshot().catalog.entries().is_empty());
    assert_eq!(resolve_process(&ctx, "Cut").status, MappingStatus::NotFoundAutoCategorized);
}
