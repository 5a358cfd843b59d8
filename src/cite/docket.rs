//! Docket-number normalization.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for a leading `No.`, `Case No.`, or `Docket No.` marker.
    pub static ref DOCKET_PREFIX: Regex =
        Regex::new(r"(?i)^(?:(?:case|docket)\s+)?no(?:\.\s*|\s+)").unwrap();
}

/// Normalize a docket string into `No. <value>` form.
///
/// Replaces a leading docket marker with `No. ` and removes one trailing
/// period. Already-normalized dockets come back unchanged.
pub fn normalize_docket(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }

    let replaced = DOCKET_PREFIX.replace(trimmed, "No. ");
    let docket = replaced.strip_suffix('.').unwrap_or(&*replaced);

    docket.trim_end().to_string()
}
