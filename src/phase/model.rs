//! Phase value types
//!
//! A [`Phase`] is one turn-segment of the game calendar: a [`Season`] in a
//! given year, resolved as a [`PhaseType`].

use serde::{Deserialize, Serialize};

/// Season of the game year, in cycle order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Season {
    /// First season of the year.
    Spring,
    /// Second season of the year.
    Fall,
    /// Build/disband season closing the year.
    Winter,
}

impl Season {
    /// Display name of the season.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Fall => "Fall",
            Self::Winter => "Winter",
        }
    }

    /// Phase types that can be played in this season.
    #[must_use]
    pub const fn permitted_types(self) -> &'static [PhaseType] {
        match self {
            Self::Spring | Self::Fall => &[PhaseType::Moves, PhaseType::Retreats],
            Self::Winter => &[PhaseType::Adjustments],
        }
    }
}

impl std::fmt::Display for Season {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of orders resolved in a phase.
///
/// Selects both the duration the game allows for the phase and the
/// suffix rules used by the title helpers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PhaseType {
    /// Movement orders.
    Moves,
    /// Retreats of dislodged units.
    Retreats,
    /// Builds and disbands.
    Adjustments,
}

impl PhaseType {
    /// Display name of the phase type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Moves => "Moves",
            Self::Retreats => "Retreats",
            Self::Adjustments => "Adjustments",
        }
    }
}

impl std::fmt::Display for PhaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single phase: season, year, and phase type.
///
/// Phases are plain values; two phases are equal when all three fields
/// match. Construct them through the transition table
/// ([`crate::phase::CurrentPhase::create`]) to keep the season/type pairing
/// valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Phase {
    /// Season of the phase.
    pub season: Season,
    /// Game year. Any integer is accepted.
    pub year: i64,
    /// Kind of orders resolved in the phase.
    pub phase_type: PhaseType,
}

impl Phase {
    /// Creates a phase value.
    #[must_use]
    pub const fn new(season: Season, year: i64, phase_type: PhaseType) -> Self {
        Self {
            season,
            year,
            phase_type,
        }
    }

    /// Returns `true` if the season permits this phase type.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        self.season.permitted_types().contains(&self.phase_type)
    }

    /// Season and year, with `" Retreats"` appended for retreat phases.
    ///
    /// Moves and adjustments are named after the turn alone
    /// (`"Spring 1901"`, `"Winter 1901"`); retreats are a distinct
    /// sub-turn (`"Spring 1901 Retreats"`).
    #[must_use]
    pub fn simple_title(&self) -> String {
        let mut title = format!("{} {}", self.season, self.year);
        if self.phase_type == PhaseType::Retreats {
            title.push_str(" Retreats");
        }
        title
    }

    /// Simple title with the phase type spelled out.
    ///
    /// Retreat phases already carry their suffix from
    /// [`simple_title`](Self::simple_title) and get nothing extra.
    #[must_use]
    pub fn moves_title(&self) -> String {
        let mut title = self.simple_title();
        match self.phase_type {
            PhaseType::Moves => title.push_str(" Moves"),
            PhaseType::Adjustments => title.push_str(" Adjustments"),
            PhaseType::Retreats => {}
        }
        title
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.moves_title())
    }
}
