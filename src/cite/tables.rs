//! Static tables used when classifying, abbreviating, and normalizing
//! citations.
//!
//! The pattern tables are plain slices so that new styles or jurisdictions can
//! be added without touching the functions that use them. The lookup tables
//! are `phf` maps and sets.

use phf::{phf_map, phf_set};

/// Tokens that mark a reporter as an online database rather than a print
/// reporter (Westlaw, LEXIS, Bloomberg Law).
pub static DATABASE_FAMILIES: phf::Set<&'static str> = phf_set! {
    "WL",
    "LEXIS",
    "Lexis",
    "BL",
};

/// Corporate-entity suffixes removed from the end of a short case name.
///
/// Entries carry no trailing period, as trailing periods are stripped before
/// the suffix is looked for. Longer forms come first.
pub static CORPORATE_SUFFIXES: &[&str] = &[
    "Incorporated",
    "Corporation",
    "L.L.C",
    "LLC",
    "Inc",
    "Corp",
    "Ltd",
    "Co",
];

/// Generic government-litigant prefixes (as regex fragments). A first party
/// starting with one of these is not distinctive enough for a short name.
pub static GOVERNMENT_PREFIXES: &[&str] = &[
    r"United States",
    r"State of",
    r"People of",
    r"People",
    r"Commonwealth of",
    r"Department of",
    r"[a-z]+ Dep['’]?t",
];

/// State names that appear alone as a government litigant.
pub static STATE_LITIGANTS: &[&str] = &["Ohio", "Texas", "Florida", "California"];

/// Month names (and their common abbreviations) with their Bluebook
/// abbreviations. Keys are lowercase without a trailing period.
pub static MONTHS: phf::Map<&'static str, &'static str> = phf_map! {
    "january" => "Jan.",
    "jan" => "Jan.",
    "february" => "Feb.",
    "feb" => "Feb.",
    "march" => "Mar.",
    "mar" => "Mar.",
    "april" => "Apr.",
    "apr" => "Apr.",
    "may" => "May",
    "june" => "June",
    "jun" => "June",
    "july" => "July",
    "jul" => "July",
    "august" => "Aug.",
    "aug" => "Aug.",
    "september" => "Sept.",
    "sept" => "Sept.",
    "sep" => "Sept.",
    "october" => "Oct.",
    "oct" => "Oct.",
    "november" => "Nov.",
    "nov" => "Nov.",
    "december" => "Dec.",
    "dec" => "Dec.",
};

/// Court labels as case-law viewers print them, after cleaning, with their
/// citation forms. Used when no court-map file is supplied, and as the base
/// that a court-map file extends.
pub static COURTS: phf::Map<&'static str, &'static str> = phf_map! {
    "United States Court of Appeals for the First Circuit" => "1st Cir.",
    "United States Court of Appeals for the Second Circuit" => "2d Cir.",
    "United States Court of Appeals for the Third Circuit" => "3d Cir.",
    "United States Court of Appeals for the Fourth Circuit" => "4th Cir.",
    "United States Court of Appeals for the Fifth Circuit" => "5th Cir.",
    "United States Court of Appeals for the Sixth Circuit" => "6th Cir.",
    "United States Court of Appeals for the Seventh Circuit" => "7th Cir.",
    "United States Court of Appeals for the Eighth Circuit" => "8th Cir.",
    "United States Court of Appeals for the Ninth Circuit" => "9th Cir.",
    "United States Court of Appeals for the Tenth Circuit" => "10th Cir.",
    "United States Court of Appeals for the Eleventh Circuit" => "11th Cir.",
    "United States Court of Appeals for the District of Columbia Circuit" => "D.C. Cir.",
    "United States Court of Appeals for the Federal Circuit" => "Fed. Cir.",
    "United States District Court for the Southern District of New York" => "S.D.N.Y.",
    "United States District Court for the Eastern District of New York" => "E.D.N.Y.",
    "United States District Court for the Northern District of Ohio" => "N.D. Ohio",
    "United States District Court for the Southern District of Ohio" => "S.D. Ohio",
    "United States District Court for the District of Columbia" => "D.D.C.",
    "Supreme Court of Ohio" => "Ohio",
    "Court of Appeals of Ohio, First District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Second District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Third District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Fourth District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Fifth District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Sixth District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Seventh District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Eighth District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Ninth District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Tenth District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Eleventh District" => "Ohio Ct. App.",
    "Court of Appeals of Ohio, Twelfth District" => "Ohio Ct. App.",
    "Supreme Court of Texas" => "Tex.",
    "Supreme Court of Florida" => "Fla.",
    "Supreme Court of California" => "Cal.",
};
