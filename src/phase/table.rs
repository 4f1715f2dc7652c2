//! Phase transition table
//!
//! Fixed lookup from a short phase key to the phase it names and the
//! phase that follows it. Lookups go through [`lookup`]; iteration order
//! of [`TRANSITIONS`] is the order phases are played in a year.

use super::model::{PhaseType, Season};

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// Short key typed by users (`s`, `sr`, `f`, `fr`, `w`).
    pub key: &'static str,
    /// Season of the phase being adjudicated.
    pub season: Season,
    /// Type of the phase being adjudicated.
    pub phase_type: PhaseType,
    /// Season of the following phase.
    pub next_season: Season,
    /// Type of the following phase.
    pub next_phase_type: PhaseType,
    /// Whether the following phase belongs to the next game year.
    pub next_year: bool,
}

/// Every transition of a game year, in play order.
pub static TRANSITIONS: [Transition; 5] = [
    Transition {
        key: "s",
        season: Season::Spring,
        phase_type: PhaseType::Moves,
        next_season: Season::Spring,
        next_phase_type: PhaseType::Retreats,
        next_year: false,
    },
    Transition {
        key: "sr",
        season: Season::Spring,
        phase_type: PhaseType::Retreats,
        next_season: Season::Fall,
        next_phase_type: PhaseType::Moves,
        next_year: false,
    },
    Transition {
        key: "f",
        season: Season::Fall,
        phase_type: PhaseType::Moves,
        next_season: Season::Fall,
        next_phase_type: PhaseType::Retreats,
        next_year: false,
    },
    Transition {
        key: "fr",
        season: Season::Fall,
        phase_type: PhaseType::Retreats,
        next_season: Season::Winter,
        next_phase_type: PhaseType::Adjustments,
        next_year: false,
    },
    Transition {
        key: "w",
        season: Season::Winter,
        phase_type: PhaseType::Adjustments,
        next_season: Season::Spring,
        next_phase_type: PhaseType::Moves,
        next_year: true,
    },
];

/// Finds the transition for an already-normalized key.
#[must_use]
pub fn lookup(key: &str) -> Option<&'static Transition> {
    TRANSITIONS.iter().find(|t| t.key == key)
}

/// Returns all phase keys in play order.
#[must_use]
pub fn phase_keys() -> Vec<&'static str> {
    TRANSITIONS.iter().map(|t| t.key).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn keys_are_unique() {
        let keys: HashSet<_> = TRANSITIONS.iter().map(|t| t.key).collect();
        assert_eq!(keys.len(), TRANSITIONS.len());
    }

    #[test]
    fn keys_in_play_order() {
        assert_eq!(phase_keys(), vec!["s", "sr", "f", "fr", "w"]);
    }

    #[test]
    fn each_row_leads_into_the_next() {
        for pair in TRANSITIONS.windows(2) {
            assert_eq!(pair[0].next_season, pair[1].season, "after {}", pair[0].key);
            assert_eq!(
                pair[0].next_phase_type, pair[1].phase_type,
                "after {}",
                pair[0].key
            );
        }
        let last = TRANSITIONS[TRANSITIONS.len() - 1];
        assert_eq!(last.next_season, TRANSITIONS[0].season);
        assert_eq!(last.next_phase_type, TRANSITIONS[0].phase_type);
    }

    #[test]
    fn only_winter_rolls_the_year() {
        for t in &TRANSITIONS {
            assert_eq!(t.next_year, t.key == "w", "key {}", t.key);
        }
    }

    #[test]
    fn every_row_is_a_permitted_pairing() {
        for t in &TRANSITIONS {
            assert!(t.season.permitted_types().contains(&t.phase_type));
            assert!(t.next_season.permitted_types().contains(&t.next_phase_type));
        }
    }

    #[test]
    fn lookup_unknown_key() {
        assert!(lookup("x").is_none());
        assert!(lookup("S").is_none(), "lookup expects normalized keys");
    }
}
