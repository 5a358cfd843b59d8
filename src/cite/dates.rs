//! Decision dates.

use super::tables::MONTHS;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Regex for a plausible decision year.
    pub static ref YEAR: Regex = Regex::new(r"\b(?:18|19|20)[0-9]{2}\b").unwrap();

    /// Regex for any four-digit number, which marks a fragment as a date.
    pub static ref FOUR_DIGITS: Regex = Regex::new(r"\b[0-9]{4}\b").unwrap();

    /// Regex for a month, day, and year, *e.g.*, `January 5, 2007`.
    pub static ref MONTH_DAY_YEAR: Regex = Regex::new(
        r"\b(?P<month>[A-Za-z]+)\.?\s+(?P<day>[0-9]{1,2}),?\s+(?P<year>(?:18|19|20)[0-9]{2})\b"
    )
    .unwrap();
}

/// The first plausible year in some text.
pub fn find_year(text: &str) -> Option<&str> {
    YEAR.find(text).map(|m| m.as_str())
}

/// The first month-day-year date in some text, with the month abbreviated the
/// Bluebook way (*e.g.*, `Sept. 5, 2007`).
pub fn bluebook_date(text: &str) -> Option<String> {
    MONTH_DAY_YEAR.captures_iter(text).find_map(|caps| {
        let month = MONTHS.get(caps["month"].to_lowercase().as_str())?;
        let day = caps["day"].trim_start_matches('0');
        Some(format!("{} {}, {}", month, day, &caps["year"]))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn years() {
        assert_eq!(find_year("Decided: March 3, 2020"), Some("2020"));
        assert_eq!(find_year("Page 1234"), None);
        assert_eq!(find_year("20071"), None);
    }

    #[test]
    fn full_dates() {
        assert_eq!(bluebook_date("January 5, 2007").as_deref(), Some("Jan. 5, 2007"));
        assert_eq!(
            bluebook_date("Decided Sept. 09, 2019").as_deref(),
            Some("Sept. 9, 2019")
        );
        assert_eq!(bluebook_date("June 30 2021").as_deref(), Some("June 30, 2021"));
        assert_eq!(bluebook_date("Filed 2007"), None);
    }

    #[test]
    fn skips_non_months() {
        assert_eq!(
            bluebook_date("Decided 12, 2001 and May 4, 2002").as_deref(),
            Some("May 4, 2002")
        );
    }
}
