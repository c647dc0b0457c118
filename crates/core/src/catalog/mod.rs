//! Process catalog, keyword fallback and versioned catalog store

pub mod heuristics;
pub mod process_catalog;
pub mod store;

pub use heuristics::{auto_categorize, AUTO_CATEGORY_RULES, FALLBACK_CATEGORY};
pub use process_catalog::ProcessCatalog;
pub use store::{CatalogSnapshot, CatalogStore};
