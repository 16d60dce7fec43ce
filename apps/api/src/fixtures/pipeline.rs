//! Two-pass scan over a decoded fixtures upload: validate everything, then
//! build everything.
//!
//! The month active for a data row is the one set by the closest `month=`
//! line above it, threaded through each pass as an explicit cursor. Both
//! passes walk the same records; the build pass only runs on a clean report.

use anyhow::{anyhow, Result};
use csv::StringRecord;

use crate::fixtures::builder::build_event;
use crate::fixtures::calendar::month_number;
use crate::fixtures::rows::{classify, RowKind};
use crate::fixtures::validation::{validate_row, RejectedRow};
use crate::models::event::NewEvent;

/// Outcome of scanning one upload.
#[derive(Debug)]
pub enum ImportOutcome {
    /// Every row validated; the complete derived set, in file order.
    Built(Vec<NewEvent>),
    /// At least one row failed; the complete report, in file order.
    Rejected(Vec<RejectedRow>),
}

/// Decodes the raw upload into records. Rows may be ragged; short lines are
/// handled positionally downstream.
pub fn decode(bytes: &[u8]) -> Result<Vec<StringRecord>, csv::Error> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(bytes)
        .records()
        .collect()
}

/// Runs both passes over the upload for the given import year.
pub fn scan(records: &[StringRecord], year: i32) -> Result<ImportOutcome> {
    let report = validate_all(records, year);
    if !report.is_empty() {
        return Ok(ImportOutcome::Rejected(report));
    }
    Ok(ImportOutcome::Built(build_all(records, year)?))
}

/// First pass. Collects every problem in the file; rows ahead of any month
/// line cannot be field-validated and are reported as such.
pub fn validate_all(records: &[StringRecord], year: i32) -> Vec<RejectedRow> {
    let mut report = Vec::new();
    let mut month: Option<u32> = None;

    for (idx, record) in records.iter().enumerate() {
        let line = idx + 1;
        match classify(record) {
            RowKind::Header => {}
            RowKind::Month(abbrev) => match month_number(&abbrev) {
                Some(m) => month = Some(m),
                None => report.push(RejectedRow {
                    row: line,
                    errors: vec![format!("Invalid month: {abbrev}")],
                }),
            },
            RowKind::Data(row) => match month {
                Some(m) => {
                    let errors = validate_row(&row, year, m);
                    if !errors.is_empty() {
                        report.push(RejectedRow { row: line, errors });
                    }
                }
                None => report.push(RejectedRow {
                    row: line,
                    errors: vec!["Event row without preceding Month line".to_string()],
                }),
            },
        }
    }

    report
}

/// Second pass, mirroring the first pass's month handling.
pub fn build_all(records: &[StringRecord], year: i32) -> Result<Vec<NewEvent>> {
    let mut events = Vec::new();
    let mut month: Option<u32> = None;

    for record in records {
        match classify(record) {
            RowKind::Header => {}
            RowKind::Month(abbrev) => {
                if let Some(m) = month_number(&abbrev) {
                    month = Some(m);
                }
            }
            RowKind::Data(row) => {
                let m = month.ok_or_else(|| anyhow!("data row survived validation without a month"))?;
                events.push(build_event(&row, year, m)?);
            }
        }
    }

    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;

    const YEAR: i32 = 2026;

    fn scan_text(text: &str) -> ImportOutcome {
        let records = decode(text.as_bytes()).unwrap();
        scan(&records, YEAR).unwrap()
    }

    fn expect_built(outcome: ImportOutcome) -> Vec<NewEvent> {
        match outcome {
            ImportOutcome::Built(events) => events,
            ImportOutcome::Rejected(report) => panic!("unexpected rejection: {report:?}"),
        }
    }

    fn expect_rejected(outcome: ImportOutcome) -> Vec<RejectedRow> {
        match outcome {
            ImportOutcome::Rejected(report) => report,
            ImportOutcome::Built(events) => panic!("unexpected success: {} events", events.len()),
        }
    }

    #[test]
    fn test_roll_up_builds_one_club_event() {
        let events = expect_built(scan_text(
            "DiM,Subject,Rinks,Type,H/A,Time,Dress\n\
             month=Jan\n\
             15,Club Roll-up,,,Home,10:00,\n",
        ));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].req_month, 0);
        assert_eq!(events[0].req_date, 15);
        assert_eq!(events[0].home_away, "home");
        assert_eq!(events[0].event_type, "club_event");
    }

    #[test]
    fn test_day_32_rejects_the_whole_file() {
        let report = expect_rejected(scan_text(
            "DiM,Subject,Rinks,Type,H/A,Time,Dress\n\
             month=Jan\n\
             32,Test,,,Home,10:00,\n",
        ));
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].row, 3);
        assert_eq!(report[0].errors, vec!["Invalid day in month: 32".to_string()]);
    }

    #[test]
    fn test_data_row_before_any_month_line() {
        let report = expect_rejected(scan_text(
            "DiM,Subject,Rinks,Type,H/A,Time,Dress\n\
             15,Test,,,Home,10:00,\n",
        ));
        assert_eq!(report.len(), 1);
        assert_eq!(report[0].row, 2);
        assert_eq!(
            report[0].errors,
            vec!["Event row without preceding Month line".to_string()]
        );
    }

    #[test]
    fn test_unknown_month_abbreviation_is_reported_and_context_stays_unset() {
        let report = expect_rejected(scan_text(
            "month=Janvier\n\
             15,Test,,,Home,10:00,\n",
        ));
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].errors, vec!["Invalid month: Janvier".to_string()]);
        assert_eq!(
            report[1].errors,
            vec!["Event row without preceding Month line".to_string()]
        );
    }

    #[test]
    fn test_month_context_carries_across_many_rows() {
        let events = expect_built(scan_text(
            "month=Mar\n\
             1,First,,,Home,10:00,\n\
             10,Second,,,Away,14:00,\n\
             28,Third,,,Home,18:30,\n\
             month=Apr\n\
             2,Fourth,,,Home,10:00,\n",
        ));
        assert_eq!(events.len(), 4);
        assert!(events[..3].iter().all(|e| e.req_month == 2));
        assert_eq!(events[3].req_month, 3);
    }

    #[test]
    fn test_rejection_is_idempotent() {
        let text = "month=Jan\n\
                    32,Test,,,Home,25:00,\n\
                    5,,,,Nowhere,10:00,\n";
        let records = decode(text.as_bytes()).unwrap();
        let first = validate_all(&records, YEAR);
        let second = validate_all(&records, YEAR);
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn test_every_bad_row_is_reported_with_its_line_number() {
        let report = expect_rejected(scan_text(
            "DiM,Subject,Rinks,Type,H/A,Time,Dress\n\
             month=Jun\n\
             5,Good,,,Home,10:00,\n\
             42,Bad day,,,Home,10:00,\n\
             month=Jul\n\
             6,Bad time,,,Home,07:00,\n",
        ));
        assert_eq!(report.len(), 2);
        assert_eq!(report[0].row, 4);
        assert_eq!(report[1].row, 6);
    }

    #[test]
    fn test_fifty_valid_rows_build_fifty_events() {
        let mut text = String::from("DiM,Subject,Rinks,Type,H/A,Time,Dress\nmonth=May\n");
        for day in 1..=25 {
            text.push_str(&format!("{day},League night,,AL,Home,18:00,\n"));
        }
        text.push_str("month=Jun\n");
        for day in 1..=25 {
            text.push_str(&format!("{day},Friendly,2,FR,Away,14:00,W\n"));
        }
        let events = expect_built(scan_text(&text));
        assert_eq!(events.len(), 50);
        assert!(events[..25].iter().all(|e| e.event_type == "league"));
        assert!(events[25..].iter().all(|e| e.event_type == "friendly"));
    }

    #[test]
    fn test_quoted_subject_with_comma_survives_decoding() {
        let events = expect_built(scan_text(
            "month=Aug\n\
             8,\"Open Day, all welcome\",,OD,Home,11:00,\n",
        ));
        assert_eq!(events[0].subject, "Open Day, all welcome");
    }

    #[test]
    fn test_build_order_matches_file_order() {
        let events = expect_built(scan_text(
            "month=Feb\n\
             20,Late,,,Home,10:00,\n\
             3,Early,,,Home,10:00,\n",
        ));
        // File order is preserved; chronology is the reader's concern.
        assert_eq!(events[0].subject, "Late");
        assert_eq!(events[1].subject, "Early");
    }
}
