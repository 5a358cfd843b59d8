//! The module contains the functionality related to extraction files.

use serde::{Deserialize, Serialize};
use slog::debug;

/// The raw text a case-law viewer yields for one case.
///
/// This is what a page extractor hands over: the case name, the reporter
/// string as printed, and the miscellaneous "document info" lines (docket,
/// dates, court). `heading` is the generic page heading, used as the case name
/// when nothing better is found. Missing keys default to empty.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Extraction {
    pub case_name: String,
    pub reporter_raw: String,
    pub info_fragments: Vec<String>,
    pub full_date: Option<String>,
    pub source_url: String,
    pub heading: Option<String>,
    pub short_case_name: Option<String>,
}

/// Deserialize an extraction file.
pub fn build_extraction(json: &str) -> Result<Extraction, String> {
    debug!(slog_scope::logger(), "Starting extraction parsing...");
    match serde_json::from_str(json) {
        Ok(e) => {
            debug!(slog_scope::logger(), "Extraction parsed");
            Ok(e)
        }
        Err(e) => {
            let err_msg = format!("error deserializing the extraction—{}", e);
            Err(err_msg)
        }
    }
}
