//! The Bluecite citation builder.
//!
//! Turns an [`Extraction`] into a [`StructuredCitation`], and renders a
//! [`StructuredCitation`] into long and short cites plus the list of missing
//! fields. Rendering is rerun from scratch whenever a record is edited.

pub mod audit;
pub mod casename;
pub mod court;
mod dates;
pub mod docket;
pub mod format;
pub mod record;
pub mod tables;
pub mod tokenizer;

use crate::{config::Emphasis, courtmap::CourtMap, extraction::Extraction};
use record::StructuredCitation;
use serde::Serialize;
use slog::{debug, o};

/// A record with its rendered cites.
#[derive(Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Rendered {
    pub record: StructuredCitation,
    pub long_form: String,
    pub short_form: String,
    pub missing_fields: Vec<&'static str>,
}

/// Build a structured citation from an extraction.
pub fn cite(extraction: &Extraction, court_map: &CourtMap) -> StructuredCitation {
    debug!(slog_scope::logger(), "Starting citation build...");

    // Tokenize the reporter string.
    let citation = slog_scope::scope(&slog_scope::logger().new(o!("fn" => "parse()")), || {
        tokenizer::parse(&extraction.reporter_raw)
    });

    // Sort the info fragments into court, year, docket, and date.
    let info = slog_scope::scope(
        &slog_scope::logger().new(o!("fn" => "sort_fragments()")),
        || record::sort_fragments(&extraction.info_fragments, court_map),
    );

    // A supplied full date wins over one found in the fragments.
    let full_date = match extraction.full_date.as_deref().map(str::trim) {
        Some(d) if !d.is_empty() => {
            dates::bluebook_date(d).unwrap_or_else(|| d.to_string())
        }
        _ => info.full_date,
    };

    let mut draft = record::build(
        &extraction.case_name,
        citation,
        &info.court,
        &info.year,
        &info.docket,
        &full_date,
        &extraction.source_url,
    );
    if let Some(short_case_name) = &extraction.short_case_name {
        draft.short_case_name = short_case_name.trim().to_string();
    }

    let heading = extraction.heading.as_deref().unwrap_or_default();
    let record = slog_scope::scope(&slog_scope::logger().new(o!("fn" => "settle()")), || {
        record::settle(draft, heading)
    });

    debug!(slog_scope::logger(), "Citation build completed.");
    record
}

/// Render a record into its long and short cites and list its missing fields.
pub fn render(record: StructuredCitation, emphasis: Emphasis) -> Rendered {
    debug!(slog_scope::logger(), "Starting render...");

    let long_form = slog_scope::scope(
        &slog_scope::logger().new(o!("fn" => "format_long_styled()")),
        || format::format_long_styled(&record, emphasis),
    );
    let short_form = slog_scope::scope(
        &slog_scope::logger().new(o!("fn" => "format_short_styled()")),
        || format::format_short_styled(&record, emphasis),
    );
    let missing_fields = slog_scope::scope(
        &slog_scope::logger().new(o!("fn" => "missing_fields()")),
        || audit::missing_fields(&record),
    );

    debug!(slog_scope::logger(), "Render completed.");
    Rendered {
        record,
        long_form,
        short_form,
        missing_fields,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courtmap::default_court_map;
    use crate::extraction::build_extraction;
    use rand::{distributions::Uniform, Rng};

    fn rendered(json: &str) -> Rendered {
        let extraction = build_extraction(json).unwrap();
        render(cite(&extraction, &default_court_map()), Emphasis::Markdown)
    }

    mod reported {
        use super::*;

        #[test]
        fn ohio_appellate() {
            let output = rendered(OHIO_APPELLATE);

            assert_eq!(
                output.long_form,
                "*Smith v. Jones Corp.*, 158 N.E.3d 124, 126 (Ohio Ct. App. 2020)"
            );
            assert_eq!(output.short_form, "*Smith*, 158 N.E.3d 124, at 126");
            assert!(output.missing_fields.is_empty());
            assert_eq!(output.record.docket, "No. 19CA1100");
        }

        const OHIO_APPELLATE: &str = r#######"
{
    "caseName": "Smith v. Jones Corp.",
    "reporterRaw": "**158** N.E.3d 124, 126",
    "infoFragments": [
        "Court of Appeals of Ohio, Fourth Appellate District, Adams County",
        "Case No. 19CA1100.",
        "Decided: March 3, 2020"
    ],
    "sourceUrl": "https://example.com/doc/1"
}
"#######;

        #[test]
        fn unknown_court() {
            let output = rendered(UNKNOWN_COURT);

            assert_eq!(
                output.long_form,
                "*Doe v. Roe*, 12 Misc. 3d 45 (Ct. App., Fourth District 1999)"
            );
            assert_eq!(output.missing_fields, Vec::<&str>::new());
        }

        const UNKNOWN_COURT: &str = r#######"
{
    "caseName": "Doe v. Roe",
    "reporterRaw": "12 Misc. 3d 45",
    "infoFragments": [
        "Ct. App., Fourth Appellate Dist., Adams County.",
        "1999"
    ]
}
"#######;
    }

    mod unreported {
        use super::*;

        #[test]
        fn westlaw() {
            let output = rendered(WESTLAW);

            assert_eq!(
                output.long_form,
                "*United States v. Alvarez*, No. 05-cr-1, 2007 WL 103230, at *2 (S.D.N.Y. Jan. 5, 2007)"
            );
            assert_eq!(output.short_form, "*Alvarez*, 2007 WL 103230, at *2");
            assert!(output.missing_fields.is_empty());
        }

        const WESTLAW: &str = r#######"
{
    "caseName": "United States v. Alvarez",
    "reporterRaw": "2007 WL 103230, at *2",
    "infoFragments": [
        "United States District Court for the Southern District of New York",
        "No. 05-cr-1",
        "2007"
    ],
    "fullDate": "January 5, 2007"
}
"#######;

        #[test]
        fn lexis_without_docket() {
            let output = rendered(LEXIS);

            assert_eq!(
                output.long_form,
                "*Brown v. Board*, 2019 U.S. Dist. LEXIS 1 (S.D. Ohio Feb. 1, 2019)"
            );
            assert_eq!(output.missing_fields, vec!["docket"]);
        }

        const LEXIS: &str = r#######"
{
    "caseName": "Brown v. Board",
    "reporterRaw": "2019 U.S. Dist. LEXIS 1",
    "infoFragments": [
        "United States District Court for the Southern District of Ohio",
        "February 1, 2019"
    ]
}
"#######;
    }

    mod fallbacks {
        use super::*;

        #[test]
        fn heading_only() {
            let output = rendered(HEADING_ONLY);

            assert_eq!(
                output.record,
                StructuredCitation {
                    case_name: "Smith v. Jones".to_string(),
                    source_url: "https://example.com/doc/9".to_string(),
                    ..Default::default()
                }
            );
            assert_eq!(output.long_form, "*Smith v. Jones*");
            assert_eq!(output.short_form, "*Smith*");
            assert_eq!(
                output.missing_fields,
                vec!["volume", "reporter", "page", "court", "year"]
            );
        }

        const HEADING_ONLY: &str = r#######"
{
    "infoFragments": ["No. 12", "2001"],
    "heading": "Smith v. Jones",
    "sourceUrl": "https://example.com/doc/9"
}
"#######;

        #[test]
        fn nothing() {
            let output = rendered("{}");

            assert_eq!(output.record, StructuredCitation::default());
            assert_eq!(output.long_form, "");
            assert_eq!(output.short_form, "");
        }

        #[test]
        fn short_name_override() {
            let output = rendered(
                r#"{"caseName": "State v. Smith", "reporterRaw": "1 Ohio St. 1", "shortCaseName": " Smith I "}"#,
            );

            assert_eq!(output.short_form, "*Smith I*, 1 Ohio St. 1");
        }
    }

    #[test]
    fn rerender_edited_record() {
        let mut record = rendered(LEXIS_EDIT).record;
        record.docket = "No. 2:18-cv-1".to_string();
        record.pinpoint = "4".to_string();
        let output = render(record, Emphasis::Html);

        assert_eq!(
            output.long_form,
            "<i>Brown v. Board</i>, No. 2:18-cv-1, 2019 U.S. Dist. LEXIS 1, at *4 (S.D. Ohio 2019)"
        );
        assert!(output.missing_fields.is_empty());
    }

    const LEXIS_EDIT: &str = r#######"
{
    "caseName": "Brown v. Board",
    "reporterRaw": "2019 U.S. Dist. LEXIS 1",
    "infoFragments": ["United States District Court for the Southern District of Ohio"]
}
"#######;

    #[test]
    fn random_strings_are_total() {
        let mut rng = rand::thread_rng();
        let lengths = Uniform::new(0, 40);
        let alphabet: Vec<char> = "0123456789 .,-*vV\u{a0}\tNEFWLSXISabc§¶é,;()"
            .chars()
            .collect();
        let picks = Uniform::new(0, alphabet.len());

        for _ in 0..2000 {
            let raw: String = (0..rng.sample(lengths))
                .map(|_| alphabet[rng.sample(picks)])
                .collect();
            let record = record::build(
                &raw,
                tokenizer::parse(&raw),
                &raw,
                "",
                &raw,
                "",
                "",
            );
            let first = render(record.clone(), Emphasis::Markdown);
            let second = render(record, Emphasis::Markdown);

            assert_eq!(first, second);
        }
    }
}
