//! Contains the main Bluecite function. Determines which parts of Bluecite to
//! run.

pub mod cite;
pub mod config;
pub mod courtmap;
pub mod extraction;
mod fs;

use ansi_term::Color;
use cite::{
    record::{build_record, StructuredCitation},
    Rendered,
};
use config::{BlueciteCommand, BlueciteConfig, Format, Output};
use courtmap::{build_court_map, default_court_map, with_defaults, CourtMap, CourtMapFormat};
use extraction::{build_extraction, Extraction};
use slog::{debug, error, o, warn};
use std::path::Path;

/// The main Bluecite function.
pub fn bluecite(config: BlueciteConfig) -> Result<(), String> {
    // Build the record, either from an extraction or from a saved record. The
    // court-map subcommand stops here.
    let record = match config.command {
        BlueciteCommand::NewCourtMapFile => {
            debug!(slog_scope::logger(), "Creating blank court-map file");
            return fs::new_court_map_ron(Path::new(fs::BLANK_COURT_MAP));
        }
        BlueciteCommand::ExtractionFile(path) => {
            eprintln!("{} Starting Bluecite...", Color::Green.paint("INFO"));
            let court_map = load_court_map(config.court_map)?;
            let extraction = load_stage("Extraction", || {
                build_extraction(&fs::load_file(Path::new(path))?)
            })?;
            build_stage(&extraction, &court_map)
        }
        BlueciteCommand::ExtractionFields(extraction) => {
            eprintln!("{} Starting Bluecite...", Color::Green.paint("INFO"));
            let court_map = load_court_map(config.court_map)?;
            build_stage(&extraction, &court_map)
        }
        BlueciteCommand::Record(path) => {
            eprintln!("{} Starting Bluecite...", Color::Green.paint("INFO"));
            load_stage("Record", || build_record(&fs::load_file(Path::new(path))?))?
        }
    };

    let rendered = slog_scope::scope(&slog_scope::logger().new(o!("fn" => "render()")), || {
        cite::render(record, config.emphasis)
    });

    if !rendered.missing_fields.is_empty() {
        let missing = rendered.missing_fields.join(", ");
        warn!(slog_scope::logger(), "Missing fields: {}", missing);
        eprintln!("{} Missing fields: {}", Color::Yellow.paint("WARN"), missing);
    }

    let output = format_output(&rendered, config.format)?;

    match config.output {
        Output::StandardOut => println!("{}", output),
        Output::File(f) => fs::save_file(Path::new(f), &output)?,
    }

    eprintln!("{} Done", Color::Green.paint("INFO"));
    Ok(())
}

/// The built-in court map, with the user's court-map file laid over it if one
/// was given.
fn load_court_map(court_map: Option<&str>) -> Result<CourtMap, String> {
    match court_map {
        Some(c) => Ok(with_defaults(load_stage("Court map", || {
            build_court_map(&fs::load_file(Path::new(c))?, CourtMapFormat::from_path(c))
        })?)),
        None => Ok(default_court_map()),
    }
}

/// Run one loading stage, logging and reporting any error.
fn load_stage<T>(name: &str, stage: impl FnOnce() -> Result<T, String>) -> Result<T, String> {
    match slog_scope::scope(&slog_scope::logger().new(o!("fn" => "load_file()")), stage) {
        Ok(t) => Ok(t),
        Err(e) => {
            error!(slog_scope::logger(), "{} load error: {}", name, e);
            Err(format!("{} load error: {}", name, e))
        }
    }
}

fn build_stage(extraction: &Extraction, court_map: &CourtMap) -> StructuredCitation {
    eprintln!("{} Building citation...", Color::Green.paint("INFO"));
    slog_scope::scope(&slog_scope::logger().new(o!("fn" => "cite()")), || {
        cite::cite(extraction, court_map)
    })
}

/// Write rendered cites in the requested format.
///
/// Text is the long form and the short form on separate lines. JSON and YAML
/// carry the whole record along with both forms and the missing fields.
pub fn format_output(rendered: &Rendered, format: Format) -> Result<String, String> {
    match format {
        Format::Text => {
            let mut output =
                String::with_capacity(rendered.long_form.len() + rendered.short_form.len() + 1);
            output.push_str(&rendered.long_form);
            output.push('\n');
            output.push_str(&rendered.short_form);
            Ok(output)
        }
        Format::Json => serde_json::to_string_pretty(rendered)
            .map_err(|e| format!("error serializing the output—{}", e)),
        Format::Yaml => serde_yaml::to_string(rendered)
            .map_err(|e| format!("error serializing the output—{}", e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Emphasis;

    fn rendered() -> Rendered {
        let extraction = build_extraction(
            r#"{"caseName": "Doe v. Roe", "reporterRaw": "12 F.4th 45, 47", "infoFragments": ["United States Court of Appeals for the Sixth Circuit", "2021"]}"#,
        )
        .unwrap();
        cite::render(
            cite::cite(&extraction, &default_court_map()),
            Emphasis::Plain,
        )
    }

    #[test]
    fn text() {
        assert_eq!(
            format_output(&rendered(), Format::Text).unwrap(),
            "Doe v. Roe, 12 F.4th 45, 47 (6th Cir. 2021)\nDoe, 12 F.4th 45, at 47"
        );
    }

    #[test]
    fn json() {
        let output = format_output(&rendered(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["longForm"], "Doe v. Roe, 12 F.4th 45, 47 (6th Cir. 2021)");
        assert_eq!(value["record"]["court"], "6th Cir.");
        assert_eq!(value["missingFields"], serde_json::json!([]));
    }

    #[test]
    fn yaml() {
        let output = format_output(&rendered(), Format::Yaml).unwrap();
        let value: serde_yaml::Value = serde_yaml::from_str(&output).unwrap();

        assert_eq!(value["shortForm"].as_str(), Some("Doe, 12 F.4th 45, at 47"));
        assert_eq!(value["record"]["caseName"].as_str(), Some("Doe v. Roe"));
    }

    #[test]
    fn saved_record_renders() {
        let record = build_record(&fs::load_file(Path::new("./tests/record.json")).unwrap()).unwrap();
        let output = cite::render(record, Emphasis::Markdown);

        assert_eq!(
            output.long_form,
            "*Brown v. Board*, No. 2:18-cv-1, 2019 U.S. Dist. LEXIS 1, at *4 (S.D. Ohio Feb. 1, 2019)"
        );
        assert_eq!(output.short_form, "*Brown*, 2019 U.S. Dist. LEXIS 1, at *4");
    }

    #[test]
    fn user_court_map() {
        let file = "./tests/court-map.ron";
        let court_map = with_defaults(
            build_court_map(
                &fs::load_file(Path::new(file)).unwrap(),
                CourtMapFormat::from_path(file),
            )
            .unwrap(),
        );
        let extraction = build_extraction(
            r#"{"caseName": "Doe v. Ohio", "reporterRaw": "2020-Ohio-1", "infoFragments": ["Court of Claims of Ohio", "2020"]}"#,
        )
        .unwrap();

        assert_eq!(cite::cite(&extraction, &court_map).court, "Ohio Ct. Cl.");
    }
}
