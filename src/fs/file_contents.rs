//! Contains the constants for file contents.

/// Contents of the blank court-map file.
pub static BLANK_COURT_MAP_CONTENTS: &str = r#"// Enter your own court names into this document.
// All entries must come between the two curly brackets, which start and end the
// file. Each entry should include two quoted strings, separated by a colon. The
// first string is the court as the case-law viewer prints it, after cleaning:
// single spaces, no trailing county, and any appellate district written as
// ", Fourth District". The second string is the court as it should appear in a
// citation. Put each court on a separate line, with commas after every line.
// Below is an example:
//
// {
//  "Court of Appeals of Ohio, Fourth District":"Ohio Ct. App.",
//  "Supreme Court of Ohio":"Ohio",
// }
//
// Entries here are added to (and replace) Bluecite's built-in courts.
// There is also a placeholder example below. Feel free to replace that with
// your own courts.

{
    "Full Court Name":"Citation Form",
}
"#;
