//! Court-label cleaning and lookup.

use crate::courtmap::CourtMap;
use lazy_static::lazy_static;
use regex::{Captures, Regex};
use slog::trace;

lazy_static! {
    /// Regex for a trailing county qualifier, *e.g.*, `, Adams County.`
    pub static ref COUNTY: Regex = Regex::new(r"(?i),\s*[^,]+?\s+County\.?$").unwrap();

    /// Regex for a trailing appellate-district qualifier, *e.g.*,
    /// `, Fourth Appellate Dist.`
    pub static ref DISTRICT: Regex = Regex::new(
        r"(?i),\s*(?P<ordinal>[A-Za-z0-9]+)\s+(?:Appellate\s+)?Dist(?:rict)?\.?$"
    )
    .unwrap();
}

/// Normalize a raw court label into its citation form.
///
/// The label is cleaned with [`clean_court`] and then looked up in the court
/// map. An unknown court comes back cleaned but otherwise unchanged.
pub fn normalize_court(raw: &str, lookup: &CourtMap) -> String {
    let court = clean_court(raw);

    match lookup.get(&court) {
        Some(canonical) => {
            trace!(slog_scope::logger(), "{} found as {}", court, canonical);
            canonical.to_string()
        }
        None => court,
    }
}

/// Clean a raw court label.
///
/// Whitespace (including non-breaking spaces) is collapsed, a trailing county
/// is removed, and a trailing appellate district is rewritten as
/// `, <Ordinal> District`.
pub fn clean_court(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<&str>>().join(" ");
    let without_county = COUNTY.replace(&collapsed, "");
    let court = DISTRICT
        .replace(&without_county, |caps: &Captures| {
            format!(", {} District", capitalize(&caps["ordinal"]))
        })
        .trim()
        .to_string();

    trace!(slog_scope::logger(), "cleaned court: {:?}", court);
    court
}

/// Uppercase the first letter of a word and lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ohio_map() -> CourtMap {
        CourtMap::from([(
            "Court of Appeals of Ohio, Fourth District".to_string(),
            "Ohio Ct. App.".to_string(),
        )])
    }

    #[test]
    fn county_and_district_unmapped() {
        let court = normalize_court(
            "Ct. App., Fourth Appellate Dist., Adams County.",
            &CourtMap::new(),
        );

        assert_eq!(court, "Ct. App., Fourth District");
        assert_eq!(normalize_court(&court, &CourtMap::new()), court);
    }

    #[test]
    fn county_and_district_mapped() {
        let court = normalize_court(
            "Court of Appeals of Ohio,\u{a0}Fourth Appellate District,  Adams County",
            &ohio_map(),
        );

        assert_eq!(court, "Ohio Ct. App.");
    }

    #[test]
    fn district_spellings() {
        for raw in [
            "Court of Appeals of Ohio, Fourth Dist.",
            "Court of Appeals of Ohio, Fourth District.",
            "Court of Appeals of Ohio, fourth appellate district",
        ] {
            assert_eq!(normalize_court(raw, &ohio_map()), "Ohio Ct. App.");
        }
    }

    #[test]
    fn whitespace_only() {
        let court = normalize_court("  Supreme \n Court of  Ohio ", &CourtMap::new());

        assert_eq!(court, "Supreme Court of Ohio");
    }

    #[test]
    fn empty() {
        assert_eq!(normalize_court("", &ohio_map()), "");
    }
}
