//! This module contains the functions for rendering long and short cites.
//!
//! Both forms branch on whether the record is unreported (a database citation)
//! and on which fields are present. Each clause is added only if the fields it
//! needs are non-empty. Both forms are empty if there is no case name.

use super::{casename::abbreviate, record::StructuredCitation};
use crate::config::Emphasis;
use slog::trace;

/// Render a long cite with Markdown emphasis.
pub fn format_long(record: &StructuredCitation) -> String {
    format_long_styled(record, Emphasis::Markdown)
}

/// Render a short cite with Markdown emphasis.
pub fn format_short(record: &StructuredCitation) -> String {
    format_short_styled(record, Emphasis::Markdown)
}

/// Render a long cite.
///
/// Unreported: `Name, No. 1, 2007 WL 103230, at *2 (S.D.N.Y. Jan. 5, 2007)`.
///
/// Reported: `Name, 158 N.E.3d 124, 126 (Ohio 2020)`, or `Name, Reporter (Ohio
/// 2020)` if the volume or page is missing.
pub fn format_long_styled(record: &StructuredCitation, emphasis: Emphasis) -> String {
    let case_name = match present(&record.case_name) {
        Some(c) => c,
        None => return String::new(),
    };

    let mut cite = String::with_capacity(256);
    cite.push_str(&emphasize(case_name, emphasis));

    if record.is_unreported() {
        if let Some(docket) = present(&record.docket) {
            cite.push_str(", ");
            cite.push_str(docket);
        }
        add_database_cite(record, &mut cite);
        let date = present(&record.full_date).or_else(|| present(&record.year));
        add_parenthetical(present(&record.court), date, &mut cite);
    } else {
        if add_reporter_cite(record, &mut cite) {
            if let Some(pin) = present(&record.pinpoint) {
                cite.push_str(", ");
                cite.push_str(pin);
            }
        }
        add_parenthetical(present(&record.court), present(&record.year), &mut cite);
    }

    trace!(slog_scope::logger(), "long cite: {}", cite);
    cite
}

/// Render a short cite.
///
/// The short name is the record's `short_case_name` if there is one, and
/// otherwise is derived from the case name.
///
/// Unreported: `Name, 2007 WL 103230, at *2`.
///
/// Reported: `Name, 158 N.E.3d 124, at 126`.
pub fn format_short_styled(record: &StructuredCitation, emphasis: Emphasis) -> String {
    let case_name = match present(&record.case_name) {
        Some(c) => c,
        None => return String::new(),
    };

    let short_name = match present(&record.short_case_name) {
        Some(s) => s.to_string(),
        None => abbreviate(case_name),
    };

    let mut cite = String::with_capacity(128);
    cite.push_str(&emphasize(&short_name, emphasis));

    if record.is_unreported() {
        add_database_cite(record, &mut cite);
    } else {
        add_reporter_cite(record, &mut cite);
        if let Some(pin) = present(&record.pinpoint) {
            cite.push_str(", at ");
            cite.push_str(pin);
        }
    }

    trace!(slog_scope::logger(), "short cite: {}", cite);
    cite
}

/// Emphasize a case name.
pub fn emphasize(text: &str, emphasis: Emphasis) -> String {
    match emphasis {
        Emphasis::Markdown => format!("*{}*", text),
        Emphasis::Html => format!("<i>{}</i>", text),
        Emphasis::Plain => text.to_string(),
    }
}

/// Add `, <year> <database> <number>` and `, at *<pinpoint>`.
fn add_database_cite(record: &StructuredCitation, cite: &mut String) {
    let database = [&record.year, &record.reporter, &record.page]
        .iter()
        .filter_map(|field| present(field))
        .collect::<Vec<&str>>()
        .join(" ");

    if !database.is_empty() {
        cite.push_str(", ");
        cite.push_str(&database);
    }

    if let Some(pin) = present(&record.pinpoint) {
        cite.push_str(", at *");
        cite.push_str(pin.trim_start_matches('*'));
    }
}

/// Add `, <volume> <reporter> <page>`, or just `, <reporter>` if the volume or
/// page is missing. Returns whether the full volume-reporter-page cite was
/// added.
fn add_reporter_cite(record: &StructuredCitation, cite: &mut String) -> bool {
    match (
        present(&record.volume),
        present(&record.reporter),
        present(&record.page),
    ) {
        (Some(volume), Some(reporter), Some(page)) => {
            cite.push_str(", ");
            cite.push_str(volume);
            cite.push(' ');
            cite.push_str(reporter);
            cite.push(' ');
            cite.push_str(page);
            true
        }
        (_, Some(reporter), _) => {
            cite.push_str(", ");
            cite.push_str(reporter);
            false
        }
        _ => false,
    }
}

/// Add ` (<court> <date>)` if either is present.
fn add_parenthetical(court: Option<&str>, date: Option<&str>, cite: &mut String) {
    let contents = [court, date]
        .iter()
        .flatten()
        .copied()
        .collect::<Vec<&str>>()
        .join(" ");

    if !contents.is_empty() {
        cite.push_str(" (");
        cite.push_str(&contents);
        cite.push(')');
    }
}

/// A field's trimmed value, if it has one.
fn present(field: &str) -> Option<&str> {
    let field = field.trim();
    if field.is_empty() {
        None
    } else {
        Some(field)
    }
}
