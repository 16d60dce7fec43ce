//! Row tokenizer for the fixtures spreadsheet export.

use csv::StringRecord;

/// Leading marker of the column-header line (`DiM,Subject,Rinks,...`).
const HEADER_MARKER: &str = "DiM";

/// Prefix of a line that sets the active month (`month=Jan`).
const MONTH_PREFIX: &str = "month=";

/// Classification of one physical line of the upload.
///
/// Classification is purely textual; a malformed data line is still `Data`
/// here and fails in validation instead.
#[derive(Debug, Clone, PartialEq)]
pub enum RowKind {
    /// The column-header line. Carries no data.
    Header,
    /// A `month=<abbrev>` line; the value is the text after `=`, trimmed.
    Month(String),
    /// An ordinary fixture row.
    Data(FixtureRow),
}

/// One data line with its seven positional columns named. Fields are trimmed
/// but otherwise untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FixtureRow {
    pub day: String,
    pub subject: String,
    pub rinks_marker: String,
    pub type_code: String,
    pub home_away: String,
    pub start_time: String,
    pub dress: String,
}

/// Classifies a decoded CSV record.
pub fn classify(record: &StringRecord) -> RowKind {
    let first = field(record, 0);
    if first.starts_with(HEADER_MARKER) {
        return RowKind::Header;
    }
    if let Some(abbrev) = first.strip_prefix(MONTH_PREFIX) {
        return RowKind::Month(abbrev.trim().to_string());
    }
    RowKind::Data(FixtureRow {
        day: first.to_string(),
        subject: field(record, 1).to_string(),
        rinks_marker: field(record, 2).to_string(),
        type_code: field(record, 3).to_string(),
        home_away: field(record, 4).to_string(),
        start_time: field(record, 5).to_string(),
        dress: field(record, 6).to_string(),
    })
}

/// Missing trailing fields read as empty, so positional meaning never shifts
/// on short lines.
fn field(record: &StringRecord, idx: usize) -> &str {
    record.get(idx).map(str::trim).unwrap_or("")
}

/// Parsed form of a rinks marker: rink count, optional gender letter,
/// optional game-qualifier letter. `3L` is three rinks of ladies, `2MT` two
/// rinks of mixed triples (`M` is the older way of writing mixed; the builder
/// folds it into the canonical code).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RinksMarker {
    pub rinks: i32,
    pub gender: Option<char>,
    pub qualifier: Option<char>,
}

const GENDER_LETTERS: [char; 2] = ['L', 'M'];

/// Singles, pairs, triples, fours.
const QUALIFIER_LETTERS: [char; 4] = ['S', 'P', 'T', 'F'];

/// Parses a non-empty rinks marker: one digit 1-6, then an optional gender
/// letter, then an optional game-qualifier letter. Any other shape is `None`.
pub fn parse_rinks_marker(raw: &str) -> Option<RinksMarker> {
    let mut chars = raw.chars().peekable();
    let rinks = chars.next()?.to_digit(10).filter(|d| (1..=6).contains(d))? as i32;

    let mut marker = RinksMarker {
        rinks,
        gender: None,
        qualifier: None,
    };
    if let Some(&c) = chars.peek() {
        if GENDER_LETTERS.contains(&c) {
            marker.gender = Some(c);
            chars.next();
        }
    }
    if let Some(&c) = chars.peek() {
        if QUALIFIER_LETTERS.contains(&c) {
            marker.qualifier = Some(c);
            chars.next();
        }
    }
    if chars.next().is_some() {
        return None;
    }
    Some(marker)
}
