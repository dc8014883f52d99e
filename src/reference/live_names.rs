//! League names as spelled by the live scores service.
//!
//! The live service has its own naming convention, so this table is kept
//! apart from the stats API league table.

const LIVE_LEAGUE_NAMES: &[(&str, &str)] = &[
    ("CL", "UEFA Champions League"),
    ("EPL", "English Premier League"),
    ("EL1", "English League One"),
    ("FL", "French Ligue 1"),
    ("FL2", "French Ligue 2"),
    ("BL", "German Bundesliga"),
    ("BL2", "German 2. Bundesliga"),
    ("BL3", "German 3. Liga"),
    ("SA", "Italian Serie A"),
    ("DED", "Dutch Eredivisie"),
    ("PPL", "Portuguese Primeira Liga"),
    ("LLIGA", "Spanish La Liga"),
    ("SD", "Spanish Segunda Division"),
];

/// Returns the live service's name for a league code.
///
/// # Examples
/// ```
/// use soccer_cli::reference::live_names::live_name_for;
///
/// assert_eq!(live_name_for("EPL"), Some("English Premier League"));
/// assert_eq!(live_name_for("XYZ"), None);
/// ```
pub fn live_name_for(code: &str) -> Option<&'static str> {
    LIVE_LEAGUE_NAMES
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, name)| *name)
}

/// Returns the league code for a name reported by the live service.
pub fn code_for_live_name(name: &str) -> Option<&'static str> {
    LIVE_LEAGUE_NAMES
        .iter()
        .find(|(_, n)| *n == name)
        .map(|(code, _)| *code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_map_both_ways() {
        for (code, name) in LIVE_LEAGUE_NAMES {
            assert_eq!(live_name_for(code), Some(*name));
            assert_eq!(code_for_live_name(name), Some(*code));
        }
    }

    #[test]
    fn test_code_lookup_ignores_case() {
        assert_eq!(live_name_for("lliga"), Some("Spanish La Liga"));
    }

    #[test]
    fn test_every_live_code_is_a_known_league() {
        let reference = crate::reference::ReferenceData::load().unwrap();
        for (code, _) in LIVE_LEAGUE_NAMES {
            assert!(reference.league(code).is_some(), "{code} missing");
        }
    }
}
