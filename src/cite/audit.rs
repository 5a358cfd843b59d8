//! Advisory checks for missing fields.

use super::record::StructuredCitation;
use slog::debug;

/// List the required fields a record is missing, by their serialized names.
///
/// The case name, court, and year are always required. An unreported record
/// also needs a docket; a reported one needs a volume, reporter, and page. The
/// pinpoint, full date, and short case name are never required.
///
/// This is advice for the user only. Nothing refuses to format a record
/// because fields are missing.
pub fn missing_fields(record: &StructuredCitation) -> Vec<&'static str> {
    let mut required: Vec<(&'static str, &str)> =
        vec![("caseName", record.case_name.as_str())];

    if record.is_unreported() {
        required.push(("docket", record.docket.as_str()));
    } else {
        required.push(("volume", record.volume.as_str()));
        required.push(("reporter", record.reporter.as_str()));
        required.push(("page", record.page.as_str()));
    }

    required.push(("court", record.court.as_str()));
    required.push(("year", record.year.as_str()));

    let missing: Vec<&'static str> = required
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect();

    debug!(slog_scope::logger(), "Missing fields: {:?}", missing);
    missing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreported_needs_docket() {
        let record = StructuredCitation {
            case_name: "Smith v. Jones".to_string(),
            reporter: "2019 U.S. Dist. LEXIS 1".to_string(),
            court: "S.D. Ohio".to_string(),
            year: "2019".to_string(),
            ..Default::default()
        };
        let missing = missing_fields(&record);

        assert_eq!(missing, vec!["docket"]);
        assert!(!missing.contains(&"volume"));
        assert!(!missing.contains(&"reporter"));
        assert!(!missing.contains(&"page"));
    }

    #[test]
    fn reported_needs_volume_reporter_page() {
        let record = StructuredCitation {
            case_name: "Smith v. Jones".to_string(),
            reporter: "N.E.3d".to_string(),
            court: "Ohio".to_string(),
            year: "2020".to_string(),
            ..Default::default()
        };

        assert_eq!(missing_fields(&record), vec!["volume", "page"]);
    }

    #[test]
    fn empty_record() {
        assert_eq!(
            missing_fields(&StructuredCitation::default()),
            vec!["caseName", "volume", "reporter", "page", "court", "year"]
        );
    }

    #[test]
    fn optional_fields_never_required() {
        let record = StructuredCitation {
            case_name: "Smith v. Jones".to_string(),
            volume: "158".to_string(),
            reporter: "N.E.3d".to_string(),
            page: "124".to_string(),
            court: "Ohio".to_string(),
            year: "2020".to_string(),
            ..Default::default()
        };

        assert!(missing_fields(&record).is_empty());
    }
}
