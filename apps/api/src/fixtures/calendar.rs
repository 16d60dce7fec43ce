//! Month table and date composition shared by the validation and build
//! passes, so the two passes cannot drift apart on what counts as a real
//! date.

use chrono::{Datelike, NaiveDate};

/// Month abbreviations exactly as they appear on `month=` lines.
/// Case-sensitive; the spreadsheet template writes them this way.
const MONTH_ABBREVS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Maps `Jan` → 1 … `Dec` → 12. Exact match only.
pub fn month_number(abbrev: &str) -> Option<u32> {
    MONTH_ABBREVS
        .iter()
        .position(|&m| m == abbrev)
        .map(|i| i as u32 + 1)
}

/// Reverse of [`month_number`], for error messages.
pub fn month_abbrev(month: u32) -> &'static str {
    MONTH_ABBREVS
        .get(month as usize - 1)
        .copied()
        .unwrap_or("???")
}

/// Composes a real calendar date, or `None` when the day does not exist in
/// that month of that year (31 Sep, 29 Feb outside leap years).
pub fn compose_date(year: i32, month: u32, day: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Day-of-year ordinal, counting 1 Jan as day 1.
pub fn day_of_year(date: NaiveDate) -> i32 {
    date.ordinal() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_number_bounds() {
        assert_eq!(month_number("Jan"), Some(1));
        assert_eq!(month_number("Dec"), Some(12));
    }

    #[test]
    fn test_month_number_is_case_sensitive() {
        assert_eq!(month_number("JAN"), None);
        assert_eq!(month_number("jan"), None);
    }

    #[test]
    fn test_month_number_rejects_full_names() {
        assert_eq!(month_number("January"), None);
        assert_eq!(month_number(""), None);
    }

    #[test]
    fn test_month_abbrev_round_trips() {
        for m in 1..=12 {
            assert_eq!(month_number(month_abbrev(m)), Some(m));
        }
    }

    #[test]
    fn test_compose_date_rejects_day_31_in_short_month() {
        assert!(compose_date(2026, 9, 31).is_none());
        assert!(compose_date(2026, 9, 30).is_some());
    }

    #[test]
    fn test_compose_date_leap_year_february() {
        assert!(compose_date(2024, 2, 29).is_some());
        assert!(compose_date(2026, 2, 29).is_none());
    }

    #[test]
    fn test_day_of_year_is_one_based() {
        let jan1 = compose_date(2026, 1, 1).unwrap();
        assert_eq!(day_of_year(jan1), 1);
    }

    #[test]
    fn test_day_of_year_end_of_year() {
        assert_eq!(day_of_year(compose_date(2026, 12, 31).unwrap()), 365);
        assert_eq!(day_of_year(compose_date(2024, 12, 31).unwrap()), 366);
    }

    #[test]
    fn test_day_of_year_counts_leap_day() {
        // 1 Mar is day 60 in a common year, 61 in a leap year.
        assert_eq!(day_of_year(compose_date(2026, 3, 1).unwrap()), 60);
        assert_eq!(day_of_year(compose_date(2024, 3, 1).unwrap()), 61);
    }
}
