//! Keyword fallback for process descriptions missing from the mapping table
//!
//! Rules are checked in order and the first rule with a matching keyword
//! wins. Keyword sets overlap ("weld" and "paint" can both appear in one
//! description), so the order below is part of the contract.

/// Category used when no rule matches
pub const FALLBACK_CATEGORY: &str = "Other";

/// Ordered (category, keywords) rules, matched as lowercase substrings
pub const AUTO_CATEGORY_RULES: [(&str, &[&str]); 4] = [
    ("IM QC", &["qc", "inspection"]),
    ("BT Process", &["cut", "bevel", "bend", "weld", "fit"]),
    ("BT Complete", &["paint", "blast", "metaliz", "wash", "clean"]),
    ("Production", &["cso", "csi", "fu"]),
];

/// Pick a category for an unmapped description.
#[must_use]
pub fn auto_categorize(description: &str) -> &'static str {
    let lower = description.to_lowercase();
    AUTO_CATEGORY_RULES
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|keyword| lower.contains(keyword)))
        .map_or(FALLBACK_CATEGORY, |(category, _)| *category)
}
