//! The structured citation record and the functions that assemble it.

use super::{
    court::{clean_court, normalize_court},
    dates,
    docket::normalize_docket,
    tokenizer::{self, ParsedCitation},
};
use crate::courtmap::CourtMap;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use slog::{debug, trace, warn};

lazy_static! {
    /// Regex for a docket marker (`No.`, `Case No`, `Docket No`) anywhere in a
    /// fragment.
    pub static ref DOCKET_MARKER: Regex =
        Regex::new(r"(?i)\bno\.|\b(?:case|docket)\s+no\b").unwrap();
}

/// A structured citation.
///
/// Every field is a string, and an empty string means the field is absent.
/// Whether the citation is unreported is not stored; it is derived from the
/// reporter (see [`StructuredCitation::is_unreported`]).
///
/// The field names are serialized in camelCase (`caseName`, `sourceUrl`,
/// *etc.*), which is also the form the field auditor reports them in.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StructuredCitation {
    pub case_name: String,
    pub short_case_name: String,
    pub volume: String,
    pub reporter: String,
    pub page: String,
    pub pinpoint: String,
    pub court: String,
    pub year: String,
    pub docket: String,
    pub full_date: String,
    pub source_url: String,
}

impl StructuredCitation {
    /// Whether the citation is to an online database rather than a print
    /// reporter.
    pub fn is_unreported(&self) -> bool {
        tokenizer::is_database_reporter(&self.reporter)
    }

    /// Whether the record has enough in it to be worth keeping: a case name, a
    /// reporter, or a court.
    pub fn is_sufficient(&self) -> bool {
        !(self.case_name.trim().is_empty()
            && self.reporter.trim().is_empty()
            && self.court.trim().is_empty())
    }
}

/// What an info fragment turned out to be.
#[derive(Debug, PartialEq, Eq)]
pub enum InfoFragment {
    Docket(String),
    Date {
        year: Option<String>,
        full_date: Option<String>,
    },
    Court {
        name: String,
        mapped: bool,
    },
}

/// The court, year, docket, and full date found in a set of info fragments.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct InfoFields {
    pub court: String,
    pub year: String,
    pub docket: String,
    pub full_date: String,
}

/// Classify one info fragment.
///
/// Docket markers are checked first, then a four-digit number (a date), and
/// anything else is a court label. Empty fragments are skipped.
pub fn classify_fragment(text: &str, lookup: &CourtMap) -> Option<InfoFragment> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let fragment = if DOCKET_MARKER.is_match(text) {
        InfoFragment::Docket(normalize_docket(text))
    } else if dates::FOUR_DIGITS.is_match(text) {
        InfoFragment::Date {
            year: dates::find_year(text).map(str::to_string),
            full_date: dates::bluebook_date(text),
        }
    } else {
        let cleaned = clean_court(text);
        InfoFragment::Court {
            mapped: lookup.contains_key(&cleaned),
            name: normalize_court(&cleaned, lookup),
        }
    };

    trace!(slog_scope::logger(), "{:?} -> {:?}", text, fragment);
    Some(fragment)
}

/// Sort a set of info fragments into the court, year, docket, and full date.
///
/// The first docket, year, and full date found are used. For the court, the
/// first label found in the court map wins; failing that, the first unmapped
/// label is used.
pub fn sort_fragments(fragments: &[String], lookup: &CourtMap) -> InfoFields {
    let mut fields = InfoFields::default();
    let mut court_mapped = false;

    for fragment in fragments {
        match classify_fragment(fragment, lookup) {
            Some(InfoFragment::Docket(docket)) => {
                if fields.docket.is_empty() {
                    fields.docket = docket;
                }
            }
            Some(InfoFragment::Date { year, full_date }) => {
                if fields.year.is_empty() {
                    fields.year = year.unwrap_or_default();
                }
                if fields.full_date.is_empty() {
                    fields.full_date = full_date.unwrap_or_default();
                }
            }
            Some(InfoFragment::Court { name, mapped }) => {
                if (mapped && !court_mapped) || fields.court.is_empty() {
                    fields.court = name;
                    court_mapped = mapped;
                }
            }
            None => {}
        }
    }

    debug!(slog_scope::logger(), "Info fields sorted: {:?}", fields);
    fields
}

/// Assemble a structured citation.
///
/// The year from a database citation wins over the year from the info
/// fragments, since the database record number belongs to that year.
#[allow(clippy::too_many_arguments)]
pub fn build(
    case_name: &str,
    citation: ParsedCitation,
    court: &str,
    year: &str,
    docket: &str,
    full_date: &str,
    source_url: &str,
) -> StructuredCitation {
    let year = if citation.year.is_empty() {
        year.trim().to_string()
    } else {
        citation.year
    };

    StructuredCitation {
        case_name: collapse_whitespace(case_name),
        short_case_name: String::new(),
        volume: citation.volume,
        reporter: citation.reporter,
        page: citation.page,
        pinpoint: citation.pinpoint,
        court: court.trim().to_string(),
        year,
        docket: docket.trim().to_string(),
        full_date: full_date.trim().to_string(),
        source_url: source_url.trim().to_string(),
    }
}

/// Keep a draft record if it is sufficient. Otherwise replace it with a
/// record holding only the page heading (as the case name) and the source URL.
pub fn settle(draft: StructuredCitation, heading: &str) -> StructuredCitation {
    if draft.is_sufficient() {
        return draft;
    }

    warn!(
        slog_scope::logger(),
        "No case name, reporter, or court found; using the page heading"
    );
    StructuredCitation {
        case_name: collapse_whitespace(heading),
        source_url: draft.source_url,
        ..Default::default()
    }
}

/// Deserialize a record previously written as JSON.
pub fn build_record(json: &str) -> Result<StructuredCitation, String> {
    debug!(slog_scope::logger(), "Starting record parsing...");
    match serde_json::from_str(json) {
        Ok(r) => {
            debug!(slog_scope::logger(), "Record parsed");
            Ok(r)
        }
        Err(e) => {
            let err_msg = format!("error deserializing the citation record—{}", e);
            Err(err_msg)
        }
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<&str>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup() -> CourtMap {
        CourtMap::from([
            (
                "Court of Appeals of Ohio, Fourth District".to_string(),
                "Ohio Ct. App.".to_string(),
            ),
            ("Supreme Court of Ohio".to_string(), "Ohio".to_string()),
        ])
    }

    mod fragments {
        use super::*;

        #[test]
        fn docket() {
            assert_eq!(
                classify_fragment("Case No. 05CA10.", &lookup()),
                Some(InfoFragment::Docket("No. 05CA10".to_string()))
            );
        }

        #[test]
        fn docket_before_year() {
            assert_eq!(
                classify_fragment("No. 2019-0345", &lookup()),
                Some(InfoFragment::Docket("No. 2019-0345".to_string()))
            );
        }

        #[test]
        fn date() {
            assert_eq!(
                classify_fragment("Decided January 5, 2007", &lookup()),
                Some(InfoFragment::Date {
                    year: Some("2007".to_string()),
                    full_date: Some("Jan. 5, 2007".to_string()),
                })
            );
            assert_eq!(
                classify_fragment("Released 2007", &lookup()),
                Some(InfoFragment::Date {
                    year: Some("2007".to_string()),
                    full_date: None,
                })
            );
        }

        #[test]
        fn court() {
            assert_eq!(
                classify_fragment(
                    "Court of Appeals of Ohio, Fourth Appellate District, Adams County",
                    &lookup()
                ),
                Some(InfoFragment::Court {
                    name: "Ohio Ct. App.".to_string(),
                    mapped: true,
                })
            );
            assert_eq!(
                classify_fragment("Court of Claims", &lookup()),
                Some(InfoFragment::Court {
                    name: "Court of Claims".to_string(),
                    mapped: false,
                })
            );
        }

        #[test]
        fn empty() {
            assert_eq!(classify_fragment("  ", &lookup()), None);
        }

        #[test]
        fn sorted() {
            let fragments = vec![
                "Reporter".to_string(),
                "Supreme Court of Ohio".to_string(),
                "".to_string(),
                "No. 2019-0345".to_string(),
                "Decided: March 3, 2020".to_string(),
                "Released 2021".to_string(),
            ];
            let fields = sort_fragments(&fragments, &lookup());

            assert_eq!(
                fields,
                InfoFields {
                    court: "Ohio".to_string(),
                    year: "2020".to_string(),
                    docket: "No. 2019-0345".to_string(),
                    full_date: "Mar. 3, 2020".to_string(),
                }
            );
        }

        #[test]
        fn first_unmapped_court() {
            let fragments = vec!["Court of Claims".to_string(), "Headnotes".to_string()];
            let fields = sort_fragments(&fragments, &lookup());

            assert_eq!(fields.court, "Court of Claims");
        }
    }

    mod building {
        use super::*;

        #[test]
        fn reported() {
            let record = build(
                "Smith  v.\u{a0}Jones",
                tokenizer::parse("158 N.E.3d 124, 126"),
                "Ohio",
                "2020",
                "No. 2019-0345",
                "",
                "https://example.com/case",
            );

            assert_eq!(record.case_name, "Smith v. Jones");
            assert_eq!(record.volume, "158");
            assert_eq!(record.pinpoint, "126");
            assert_eq!(record.year, "2020");
            assert!(!record.is_unreported());
        }

        #[test]
        fn unreported_year() {
            let record = build(
                "Smith v. Jones",
                tokenizer::parse("2007 WL 103230"),
                "S.D.N.Y.",
                "2006",
                "No. 05-1",
                "Jan. 5, 2007",
                "",
            );

            assert_eq!(record.year, "2007");
            assert_eq!(record.volume, "");
            assert!(record.is_unreported());
        }

        #[test]
        fn sufficient() {
            let record = build("", ParsedCitation::default(), "Ohio", "", "", "", "u");
            assert_eq!(settle(record.clone(), "Heading"), record);
        }

        #[test]
        fn insufficient() {
            let record = build(
                "",
                ParsedCitation::default(),
                "",
                "2020",
                "No. 1",
                "",
                "https://example.com/case",
            );
            let settled = settle(record, " Smith  v. Jones ");

            assert_eq!(
                settled,
                StructuredCitation {
                    case_name: "Smith v. Jones".to_string(),
                    source_url: "https://example.com/case".to_string(),
                    ..Default::default()
                }
            );
        }
    }

    mod records {
        use super::*;

        #[test]
        fn partial_json() {
            let record = build_record(r#"{"caseName": "Smith v. Jones", "reporter": "WL"}"#)
                .unwrap();

            assert_eq!(record.case_name, "Smith v. Jones");
            assert_eq!(record.reporter, "WL");
            assert_eq!(record.docket, "");
        }

        #[test]
        fn bad_json() {
            assert!(build_record("caseName: Smith")
                .unwrap_err()
                .contains("error deserializing the citation record"));
        }
    }
}
