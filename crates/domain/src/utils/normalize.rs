//! Pure string normalization used for catalog keys and result markers

use crate::constants::PROCESS_KEY_STRIP_CHARS;

/// Normalize a process description into its catalog join key.
///
/// Trims, uppercases, and removes whitespace plus `- * / ( ) %`, so that
/// spelling variants of the same description collide.
///
/// # Examples
///
/// ```
/// use shiftpulse_domain::utils::normalize::normalize_process_key;
///
/// assert_eq!(normalize_process_key(" Fit-Up (50%) "), "FITUP50");
/// assert_eq!(normalize_process_key("fit up 50"), "FITUP50");
/// assert_eq!(normalize_process_key("   "), "");
/// ```
#[must_use]
pub fn normalize_process_key(description: &str) -> String {
    description
        .trim()
        .to_uppercase()
        .chars()
        .filter(|c| !c.is_whitespace() && !PROCESS_KEY_STRIP_CHARS.contains(c))
        .collect()
}

/// Normalize an opaque result-count marker for comparison.
///
/// ```
/// use shiftpulse_domain::utils::normalize::normalize_marker;
///
/// assert_eq!(normalize_marker(" x "), "X");
/// ```
#[must_use]
pub fn normalize_marker(marker: &str) -> String {
    marker.trim().to_uppercase()
}
