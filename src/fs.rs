//! Functions for interacting with the file system.

mod file_contents;

use ansi_term::Color;
use file_contents::BLANK_COURT_MAP_CONTENTS;
use slog::debug;
use std::{fs, path::Path};

/// The file name used for a blank court map.
pub const BLANK_COURT_MAP: &str = "blank-court-map.ron";

/// Load a file into a string.
///
/// This function is used to load the extraction, record, and court-map files
/// into strings, which can then be passed to the main function.
pub fn load_file(path: &Path) -> Result<String, String> {
    debug!(
        slog_scope::logger(),
        "Loading file {}...",
        path.to_string_lossy()
    );

    match fs::read_to_string(path) {
        Ok(r) => {
            debug!(
                slog_scope::logger(),
                "File {} loaded.",
                path.to_string_lossy()
            );
            Ok(r)
        }
        Err(e) => {
            let err_msg = format!("error reading the file {}—{}", path.to_string_lossy(), e);
            Err(err_msg)
        }
    }
}

/// Save a string in a file.
pub fn save_file(path: &Path, output: &str) -> Result<(), String> {
    debug!(slog_scope::logger(), "Saving {}...", path.to_string_lossy());
    eprintln!(
        "{} Saving {}...",
        Color::Green.paint("INFO"),
        Color::Blue.paint(path.to_string_lossy())
    );

    match fs::write(path, output) {
        Ok(_) => {
            debug!(
                slog_scope::logger(),
                "File {} saved.",
                path.to_string_lossy()
            );
            Ok(())
        }
        Err(e) => {
            let err_msg = format!("error writing the file {}—{}", path.to_string_lossy(), e);
            Err(err_msg)
        }
    }
}

/// Create a blank court-map file.
///
/// Creates a blank court-map file that users can then fill in with their own
/// courts.
pub fn new_court_map_ron(path: &Path) -> Result<(), String> {
    eprintln!(
        "{} Creating blank court-map file ({})",
        Color::Green.paint("INFO"),
        Color::Blue.paint(path.to_string_lossy())
    );

    save_file(path, BLANK_COURT_MAP_CONTENTS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::courtmap::{build_court_map, CourtMapFormat};

    mod test_load_file {
        use super::*;

        #[test]
        fn test_load() {
            let file = "./tests/extraction.json";
            let load_result = load_file(Path::new(file));
            assert!(load_result.is_ok());
            assert!(load_result.unwrap().contains("reporterRaw"));
        }

        #[test]
        fn fail_load() {
            let file = "./tests/does-not-exist.json";
            let load_result = load_file(Path::new(file));
            assert!(load_result
                .unwrap_err()
                .contains("error reading the file ./tests/does-not-exist.json"));
        }
    }

    mod test_blank_court_map {
        use super::*;

        #[test]
        fn blank_parses() {
            let court_map = build_court_map(BLANK_COURT_MAP_CONTENTS, CourtMapFormat::Ron).unwrap();

            assert_eq!(court_map.len(), 1);
            assert_eq!(&court_map["Full Court Name"], "Citation Form");
        }

        #[test]
        fn fixture_parses() {
            let contents = load_file(Path::new("./tests/court-map.ron")).unwrap();
            let court_map = build_court_map(&contents, CourtMapFormat::Ron).unwrap();

            assert_eq!(&court_map["Court of Claims of Ohio"], "Ohio Ct. Cl.");
        }
    }
}
