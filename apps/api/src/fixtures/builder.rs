//! Second pass: turns validated rows into storable event records.
//!
//! Runs only after the validation pass reported nothing, so a parse failure
//! here means the two passes disagree and surfaces as an internal error, not
//! a user-facing one.

use anyhow::{anyhow, Result};
use uuid::Uuid;

use crate::fixtures::calendar::{compose_date, day_of_year};
use crate::fixtures::rows::{parse_rinks_marker, FixtureRow};
use crate::fixtures::types::{default_spec, lookup};
use crate::models::event::{NewEvent, STATUS_NEW};

/// Canonical mixed-gender code. The spreadsheet's older `M` marker letter
/// means the same thing and is folded into `X` here and nowhere else.
const MIXED: &str = "X";

/// Derives one complete event record from a validated row and the month
/// active at its position.
pub fn build_event(row: &FixtureRow, year: i32, month: u32) -> Result<NewEvent> {
    let day: u32 = row
        .day
        .parse()
        .map_err(|_| anyhow!("unvalidated day field: {:?}", row.day))?;
    let date = compose_date(year, month, day)
        .ok_or_else(|| anyhow!("unvalidated date: {year}-{month:02}-{day:02}"))?;

    let marker = if row.rinks_marker.is_empty() {
        None
    } else {
        Some(
            parse_rinks_marker(&row.rinks_marker)
                .ok_or_else(|| anyhow!("unvalidated rinks marker: {:?}", row.rinks_marker))?,
        )
    };

    let spec = lookup(&row.type_code).unwrap_or_else(|| default_spec(marker.is_some()));

    let marker_mix = marker.and_then(|m| m.gender).map(|g| match g {
        'M' => MIXED.to_string(),
        other => other.to_string(),
    });

    Ok(NewEvent {
        event_id: Uuid::new_v4(),
        subject: row.subject.clone(),
        status: STATUS_NEW.to_string(),
        req_year: year,
        // stored 0-based, January = 0
        req_month: month as i32 - 1,
        req_date: day as i32,
        req_jdate: day_of_year(date),
        start_time: row.start_time.clone(),
        home_away: row.home_away.to_lowercase(),
        dress: spec
            .dress
            .map(str::to_string)
            .unwrap_or_else(|| row.dress.clone()),
        mix: spec
            .mix
            .map(str::to_string)
            .or(marker_mix)
            .unwrap_or_else(|| MIXED.to_string()),
        duration: spec.duration,
        rinks: spec.rinks.or(marker.map(|m| m.rinks)).unwrap_or(0),
        event_type: spec.kind.as_str().to_string(),
        cal_key: spec.cal_key.to_string(),
    })
}
