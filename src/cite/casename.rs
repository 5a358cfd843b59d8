//! Bluebook short-form case names.

use super::tables::{CORPORATE_SUFFIXES, GOVERNMENT_PREFIXES, STATE_LITIGANTS};
use lazy_static::lazy_static;
use regex::Regex;
use slog::trace;

lazy_static! {
    /// Regex for the `v.` (or `v` or `vs.`) between the parties.
    pub static ref VERSUS: Regex = Regex::new(r"(?i)\s+vs?\.?\s+").unwrap();

    /// Regex for a trailing corporate suffix, built from [`CORPORATE_SUFFIXES`].
    pub static ref CORPORATE_SUFFIX: Regex = Regex::new(&format!(
        r"(?i)[\s,]+(?:{})$",
        CORPORATE_SUFFIXES
            .iter()
            .map(|suffix| regex::escape(suffix))
            .collect::<Vec<String>>()
            .join("|")
    ))
    .unwrap();

    /// Regex for a government litigant, built from [`GOVERNMENT_PREFIXES`] and
    /// [`STATE_LITIGANTS`].
    pub static ref GOVERNMENT: Regex = Regex::new(&format!(
        r"(?i)^(?:{})\b",
        GOVERNMENT_PREFIXES
            .iter()
            .chain(STATE_LITIGANTS.iter())
            .copied()
            .collect::<Vec<&str>>()
            .join("|")
    ))
    .unwrap();
}

/// Derive a short case name from a full case name.
///
/// The short name is normally the first party, without trailing punctuation
/// or a corporate suffix. When the first party is a government (*e.g.*,
/// `United States` or `State of Ohio`), the first word of the second party is
/// used instead, if there is one.
pub fn abbreviate(full_name: &str) -> String {
    trace!(slog_scope::logger(), "full_name: {:?}", full_name);

    let full_name = full_name.trim();
    if full_name.is_empty() {
        return String::new();
    }

    let mut parties = VERSUS.splitn(full_name, 2);
    let first_party = clean_party(parties.next().unwrap_or_default());
    let second_party = parties.next();

    if GOVERNMENT.is_match(&first_party) {
        let second_word = second_party
            .and_then(|party| party.split_whitespace().next())
            .map(strip_trailing_punctuation)
            .filter(|word| !word.is_empty());

        if let Some(word) = second_word {
            trace!(slog_scope::logger(), "short name: {:?}", word);
            return word.to_string();
        }
    }

    trace!(slog_scope::logger(), "short name: {:?}", first_party);
    first_party
}

/// Trim a party, removing trailing punctuation and one corporate suffix.
fn clean_party(party: &str) -> String {
    let party = strip_trailing_punctuation(party.trim());
    let party = CORPORATE_SUFFIX.replace(party, "");

    strip_trailing_punctuation(party.trim()).to_string()
}

/// Remove trailing commas and periods.
fn strip_trailing_punctuation(text: &str) -> &str {
    text.trim_end_matches(|c: char| c == ',' || c == '.')
}
