//! This module contains the reporter-string tokenizer. It turns the raw text a
//! case-law viewer prints for a citation (*e.g.*, `158 N.E.3d 124, 126` or
//! `2007 WL 103230`) into a [`ParsedCitation`].

use super::tables::DATABASE_FAMILIES;
use lazy_static::lazy_static;
use regex::Regex;
use slog::trace;

lazy_static! {
    /// Regex for a leading number, a reporter, a page, and an optional pinpoint.
    ///
    /// The reporter is non-greedy so that it stops at the first run of digits
    /// that ends a word. The pinpoint may be written `, 126` or `, at *2`.
    pub static ref CITATION: Regex = Regex::new(
        r"^(?P<lead>[0-9]+)\s+(?P<reporter>[A-Za-z0-9.\-][A-Za-z0-9.\- ]*?)\s+(?P<page>[0-9]+)\b(?:,\s*(?:at\s+)?\*?(?P<pin>[0-9]+))?"
    )
    .unwrap();
}

/// A tokenized citation.
///
/// Empty strings mean the part is absent. When the citation is to a print
/// reporter, `volume` is filled and `year` is empty. When it is to an online
/// database, `year` is filled, `volume` is empty, `reporter` holds the database
/// identifier (*e.g.*, `WL`), and `page` holds the record number.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ParsedCitation {
    pub volume: String,
    pub reporter: String,
    pub page: String,
    pub pinpoint: String,
    pub year: String,
}

/// A test deciding whether a citation's leading number is a year.
pub type LeadClassifier = fn(&str) -> bool;

/// One way of reading a reporter string. Returns `None` if it doesn't apply.
type Strategy = fn(&str, LeadClassifier) -> Option<ParsedCitation>;

/// The strategies, in the order they are tried. The last always succeeds.
const STRATEGIES: [Strategy; 3] = [parse_grammar, parse_whitespace, parse_whole];

/// Whether the leading number of a citation is a four-digit year.
///
/// Database citations begin with a year, while print reporter volumes are
/// rarely four digits long.
pub fn is_year_token(lead: &str) -> bool {
    lead.len() == 4 && lead.bytes().all(|b| b.is_ascii_digit())
}

/// Whether a reporter is an online database (*i.e.*, the citation is
/// unreported).
pub fn is_database_reporter(reporter: &str) -> bool {
    reporter
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| c == ',' || c == ';'))
        .any(|token| DATABASE_FAMILIES.contains(token))
}

/// Parse a raw reporter string using the four-digit-year test.
pub fn parse(raw: &str) -> ParsedCitation {
    parse_with(raw, is_year_token)
}

/// Parse a raw reporter string with the given leading-number test.
///
/// Never fails. An empty input gives an empty citation, and input that fits no
/// pattern ends up whole in `reporter`.
pub fn parse_with(raw: &str, classify: LeadClassifier) -> ParsedCitation {
    let cleaned = clean_raw(raw);
    trace!(slog_scope::logger(), "cleaned: {:?}", cleaned);

    if cleaned.is_empty() {
        return ParsedCitation::default();
    }

    let parsed = STRATEGIES
        .iter()
        .find_map(|strategy| strategy(&cleaned, classify))
        .unwrap_or_default();

    trace!(slog_scope::logger(), "parsed: {:?}", parsed);
    parsed
}

/// Remove the emphasis markers and non-breaking spaces viewers put in
/// reporter text.
fn clean_raw(raw: &str) -> String {
    raw.replace("**", "").replace('\u{a0}', " ").trim().to_string()
}

/// Volume (or year), reporter, page, and optional pinpoint.
fn parse_grammar(raw: &str, classify: LeadClassifier) -> Option<ParsedCitation> {
    let caps = CITATION.captures(raw)?;

    let lead = caps.name("lead")?.as_str().to_string();
    let reporter = caps.name("reporter")?.as_str().trim().to_string();
    let page = caps.name("page")?.as_str().to_string();
    let pinpoint = caps
        .name("pin")
        .map(|m| m.as_str().to_string())
        .unwrap_or_default();

    if classify(&lead) {
        trace!(slog_scope::logger(), "{} read as a year", lead);
        Some(ParsedCitation {
            volume: String::new(),
            reporter,
            page,
            pinpoint,
            year: lead,
        })
    } else {
        Some(ParsedCitation {
            volume: lead,
            reporter,
            page,
            pinpoint,
            year: String::new(),
        })
    }
}

/// Positional reading of whitespace-separated tokens. Needs at least three.
fn parse_whitespace(raw: &str, _classify: LeadClassifier) -> Option<ParsedCitation> {
    let tokens: Vec<&str> = raw
        .split_whitespace()
        .map(|token| token.trim_end_matches(','))
        .collect();

    if tokens.len() < 3 || tokens[1].is_empty() {
        return None;
    }

    trace!(slog_scope::logger(), "falling back to tokens: {:?}", tokens);
    Some(ParsedCitation {
        volume: tokens[0].to_string(),
        reporter: tokens[1].to_string(),
        page: tokens[2].to_string(),
        pinpoint: tokens.get(3).map(|t| t.to_string()).unwrap_or_default(),
        year: String::new(),
    })
}

/// The whole string as the reporter.
fn parse_whole(raw: &str, _classify: LeadClassifier) -> Option<ParsedCitation> {
    Some(ParsedCitation {
        reporter: raw.to_string(),
        ..Default::default()
    })
}
