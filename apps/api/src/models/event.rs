use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Initial status of every imported or manually created event; it stays
/// `new` until the fixtures secretary acts on it.
pub const STATUS_NEW: &str = "new";

/// Statuses an event moves through after import.
pub const EVENT_STATUSES: [&str; 3] = [STATUS_NEW, "confirmed", "cancelled"];

/// One calendar entry as stored.
///
/// `req_month` is 0-based (January = 0), matching what the calendar front end
/// consumes. `req_jdate` is the day-of-year ordinal used as the chronological
/// sort key; it is always recomputed from the composed
/// (`req_year`, `req_month`, `req_date`) date and never set independently.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct EventRow {
    pub event_id: Uuid,
    pub subject: String,
    pub status: String,
    pub req_year: i32,
    pub req_month: i32,
    pub req_date: i32,
    pub req_jdate: i32,
    pub start_time: String,
    pub home_away: String,
    pub dress: String,
    pub mix: String,
    pub duration: i32,
    pub rinks: i32,
    pub event_type: String,
    pub cal_key: String,
    pub created_at: DateTime<Utc>,
}

/// A fully derived event ready for insertion. The importer emits these in
/// bulk; single-event creation builds one. Every field is populated before it
/// reaches storage.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEvent {
    pub event_id: Uuid,
    pub subject: String,
    pub status: String,
    pub req_year: i32,
    pub req_month: i32,
    pub req_date: i32,
    pub req_jdate: i32,
    pub start_time: String,
    pub home_away: String,
    pub dress: String,
    pub mix: String,
    pub duration: i32,
    pub rinks: i32,
    pub event_type: String,
    pub cal_key: String,
}
