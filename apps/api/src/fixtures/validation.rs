//! Field-level rules for fixture data rows.
//!
//! Every failing rule appends one message; the scan never stops at the first
//! problem, so one upload produces one complete report.

use serde::Serialize;

use crate::fixtures::calendar::{compose_date, month_abbrev};
use crate::fixtures::rows::{parse_rinks_marker, FixtureRow};

/// All failures for one physical line, keyed by its 1-based line number.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedRow {
    pub row: usize,
    pub errors: Vec<String>,
}

/// Dress codes worn at club fixtures: greys or whites.
const DRESS_CODES: [&str; 2] = ["G", "W"];

/// Validates one data row against the active month and year. Returns every
/// failing rule's message in rule order; empty means the row is good.
pub fn validate_row(row: &FixtureRow, year: i32, month: u32) -> Vec<String> {
    let mut errors = Vec::new();

    match row.day.parse::<u32>() {
        Ok(day) if (1..=31).contains(&day) => {
            if compose_date(year, month, day).is_none() {
                errors.push(format!(
                    "Invalid date: {} {} {}",
                    day,
                    month_abbrev(month),
                    year
                ));
            }
        }
        _ => errors.push(format!("Invalid day in month: {}", row.day)),
    }

    if !valid_start_time(&row.start_time) {
        errors.push(format!("Invalid start time: {}", row.start_time));
    }

    if row.home_away != "Home" && row.home_away != "Away" {
        errors.push(format!("Invalid home/away marker: {}", row.home_away));
    }

    if !row.dress.is_empty() && !DRESS_CODES.contains(&row.dress.as_str()) {
        errors.push(format!("Invalid dress code: {}", row.dress));
    }

    if !row.rinks_marker.is_empty() && parse_rinks_marker(&row.rinks_marker).is_none() {
        errors.push(format!("Invalid rinks marker: {}", row.rinks_marker));
    }

    if row.subject.is_empty() {
        errors.push("Missing subject".to_string());
    }

    errors
}

/// `HH:MM` inside the club's bowling hours, 09:00-21:59.
pub fn valid_start_time(s: &str) -> bool {
    let bytes = s.as_bytes();
    if bytes.len() != 5 || bytes[2] != b':' {
        return false;
    }
    if !bytes[..2].iter().chain(&bytes[3..]).all(u8::is_ascii_digit) {
        return false;
    }
    let hour = s[..2].parse::<u32>().ok();
    let minute = s[3..].parse::<u32>().ok();
    matches!((hour, minute), (Some(h), Some(m)) if (9..=21).contains(&h) && m <= 59)
}
