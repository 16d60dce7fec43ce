//! Fixed mapping from the spreadsheet's short type codes to derived event
//! attributes. Every recognized code is one row here; anything else takes the
//! default classification.

/// Coarse classification used by the front end to group fixtures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    League,
    HomeGame,
    FriendlyGame,
    ClubGame,
    ClubEvent,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::League => "league",
            EventKind::HomeGame => "home_game",
            EventKind::FriendlyGame => "friendly",
            EventKind::ClubGame => "club_game",
            EventKind::ClubEvent => "club_event",
        }
    }
}

/// Derived attributes for one type code. `None` fields defer to the row's own
/// rinks marker and dress column.
#[derive(Debug, Clone, Copy)]
pub struct TypeSpec {
    pub kind: EventKind,
    pub duration: i32,
    pub rinks: Option<i32>,
    pub mix: Option<&'static str>,
    pub dress: Option<&'static str>,
    /// Calendar category key; drives colour-coding on the published calendar.
    pub cal_key: &'static str,
}

/// Hours blocked out on the green for every fixture type.
pub const STANDARD_DURATION: i32 = 3;

/// The club's league and event abbreviations.
pub fn lookup(code: &str) -> Option<TypeSpec> {
    let spec = match code {
        // Afternoon and evening leagues: full green of mixed rinks, greys.
        "AL" => TypeSpec {
            kind: EventKind::League,
            duration: STANDARD_DURATION,
            rinks: Some(6),
            mix: Some("X"),
            dress: Some("G"),
            cal_key: "league",
        },
        "EL" => TypeSpec {
            kind: EventKind::League,
            duration: STANDARD_DURATION,
            rinks: Some(6),
            mix: Some("X"),
            dress: Some("G"),
            cal_key: "league",
        },
        // Ladies league plays three rinks.
        "LL" => TypeSpec {
            kind: EventKind::League,
            duration: STANDARD_DURATION,
            rinks: Some(3),
            mix: Some("L"),
            dress: Some("G"),
            cal_key: "league",
        },
        // Vets triples league, four rinks.
        "VL" => TypeSpec {
            kind: EventKind::League,
            duration: STANDARD_DURATION,
            rinks: Some(4),
            mix: Some("X"),
            dress: Some("G"),
            cal_key: "league",
        },
        // Friendlies against other clubs: whites, rinks as marked.
        "FR" => TypeSpec {
            kind: EventKind::FriendlyGame,
            duration: STANDARD_DURATION,
            rinks: None,
            mix: None,
            dress: Some("W"),
            cal_key: "friendly",
        },
        // Games hosted for touring sides.
        "HG" => TypeSpec {
            kind: EventKind::HomeGame,
            duration: STANDARD_DURATION,
            rinks: None,
            mix: None,
            dress: Some("W"),
            cal_key: "home",
        },
        // Club championship rounds.
        "CH" => TypeSpec {
            kind: EventKind::ClubGame,
            duration: STANDARD_DURATION,
            rinks: None,
            mix: None,
            dress: Some("W"),
            cal_key: "competition",
        },
        // Open days and other social events on the green.
        "OD" => TypeSpec {
            kind: EventKind::ClubEvent,
            duration: STANDARD_DURATION,
            rinks: None,
            mix: None,
            dress: None,
            cal_key: "club",
        },
        _ => return None,
    };
    Some(spec)
}

/// Classification for codes not in the table: a row with a rinks marker is a
/// club game, one without is a club event.
pub fn default_spec(has_rinks_marker: bool) -> TypeSpec {
    TypeSpec {
        kind: if has_rinks_marker {
            EventKind::ClubGame
        } else {
            EventKind::ClubEvent
        },
        duration: STANDARD_DURATION,
        rinks: None,
        mix: None,
        dress: None,
        cal_key: "club",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_league_codes_override_rinks_and_dress() {
        let spec = lookup("AL").unwrap();
        assert_eq!(spec.kind, EventKind::League);
        assert_eq!(spec.rinks, Some(6));
        assert_eq!(spec.dress, Some("G"));
        assert_eq!(spec.cal_key, "league");
    }

    #[test]
    fn test_ladies_league_is_three_rinks_of_ladies() {
        let spec = lookup("LL").unwrap();
        assert_eq!(spec.rinks, Some(3));
        assert_eq!(spec.mix, Some("L"));
    }

    #[test]
    fn test_friendly_defers_rinks_to_the_marker() {
        let spec = lookup("FR").unwrap();
        assert_eq!(spec.kind, EventKind::FriendlyGame);
        assert_eq!(spec.rinks, None);
        assert_eq!(spec.dress, Some("W"));
    }

    #[test]
    fn test_every_mapped_code_has_standard_duration() {
        for code in ["AL", "EL", "LL", "VL", "FR", "HG", "CH", "OD"] {
            assert_eq!(lookup(code).unwrap().duration, STANDARD_DURATION, "{code}");
        }
    }

    #[test]
    fn test_unknown_code_is_unmapped() {
        assert!(lookup("RS").is_none());
        assert!(lookup("").is_none());
        assert!(lookup("al").is_none());
    }

    #[test]
    fn test_default_is_game_when_marked_event_when_not() {
        assert_eq!(default_spec(true).kind, EventKind::ClubGame);
        assert_eq!(default_spec(false).kind, EventKind::ClubEvent);
        assert_eq!(default_spec(false).duration, STANDARD_DURATION);
    }
}
