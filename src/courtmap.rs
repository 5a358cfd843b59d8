//! This module contains functionality related to court-map files.
//!
//! A court map takes a cleaned court label, as a case-law viewer prints it, to
//! the court's citation form (*e.g.*, `Supreme Court of Ohio` to `Ohio`).

use crate::cite::tables::COURTS;
use ron::de::from_str;
use slog::debug;
use std::collections::HashMap;

pub type CourtMap = HashMap<String, String>;

/// The file formats a court map can be written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourtMapFormat {
    Ron,
    Json,
}

impl CourtMapFormat {
    /// Pick the format from a file name. Anything but `.json` is RON.
    pub fn from_path(path: &str) -> CourtMapFormat {
        if path.to_lowercase().ends_with(".json") {
            CourtMapFormat::Json
        } else {
            CourtMapFormat::Ron
        }
    }
}

/// Create a court map from the contents of a court-map file.
pub fn build_court_map(input: &str, format: CourtMapFormat) -> Result<CourtMap, String> {
    let parsed: Result<CourtMap, String> = match format {
        CourtMapFormat::Ron => from_str(input).map_err(|e| e.to_string()),
        CourtMapFormat::Json => serde_json::from_str(input).map_err(|e| e.to_string()),
    };

    match parsed {
        Ok(c) => {
            debug!(slog_scope::logger(), "Court map file parsed");
            Ok(c)
        }
        Err(e) => {
            let err_msg = format!("error deserializing the court map file—{}", e);
            Err(err_msg)
        }
    }
}

/// The built-in court map.
pub fn default_court_map() -> CourtMap {
    COURTS
        .entries()
        .map(|(label, court)| (label.to_string(), court.to_string()))
        .collect()
}

/// The built-in court map with a user court map laid over it. User entries
/// win.
pub fn with_defaults(user_map: CourtMap) -> CourtMap {
    let mut court_map = default_court_map();
    court_map.extend(user_map);
    court_map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ron_build() {
        let ron_string = r#"
{
    "Court of Claims of Ohio":"Ohio Ct. Cl.",
    "Supreme Court of Ohio":"Ohio S. Ct.",
}
"#;
        let output = build_court_map(ron_string, CourtMapFormat::Ron).unwrap();

        assert_eq!(&output["Court of Claims of Ohio"], "Ohio Ct. Cl.");
        assert_eq!(&output["Supreme Court of Ohio"], "Ohio S. Ct.");
    }

    #[test]
    fn json_build() {
        let json_string = r#"{"Court of Claims of Ohio": "Ohio Ct. Cl."}"#;
        let output = build_court_map(json_string, CourtMapFormat::Json).unwrap();

        assert_eq!(&output["Court of Claims of Ohio"], "Ohio Ct. Cl.");
    }

    #[test]
    fn bad_build() {
        assert!(build_court_map("[1, 2]", CourtMapFormat::Json)
            .unwrap_err()
            .starts_with("error deserializing the court map file"));
    }

    #[test]
    fn formats() {
        assert_eq!(CourtMapFormat::from_path("courts.JSON"), CourtMapFormat::Json);
        assert_eq!(CourtMapFormat::from_path("courts.ron"), CourtMapFormat::Ron);
        assert_eq!(CourtMapFormat::from_path("courts"), CourtMapFormat::Ron);
    }

    #[test]
    fn user_entries_win() {
        let user_map = CourtMap::from([(
            "Supreme Court of Ohio".to_string(),
            "Ohio S. Ct.".to_string(),
        )]);
        let court_map = with_defaults(user_map);

        assert_eq!(&court_map["Supreme Court of Ohio"], "Ohio S. Ct.");
        assert_eq!(
            &court_map["United States Court of Appeals for the Sixth Circuit"],
            "6th Cir."
        );
    }
}
