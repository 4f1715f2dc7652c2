//! The phase being adjudicated, paired with its successor.

use serde::Serialize;
use tracing::debug;

use super::model::{Phase, PhaseType};
use super::table;
use crate::error::PhaseError;

/// A phase together with the phase that follows it.
///
/// Built once per adjudication from a short key and a year, then only
/// read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CurrentPhase {
    /// The phase being adjudicated.
    pub phase: Phase,
    /// The phase that opens once adjudication completes.
    pub next: Phase,
}

impl CurrentPhase {
    /// Resolves a phase key and year into the current and next phase.
    ///
    /// The key is matched case-insensitively after trimming whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`PhaseError::InvalidPhaseKey`] if the key is not one of
    /// `s`, `sr`, `f`, `fr`, `w`, and [`PhaseError::YearOutOfRange`] if a
    /// winter key is given the largest representable year.
    pub fn create(phase_key: &str, year: i64) -> Result<Self, PhaseError> {
        let key = phase_key.trim().to_lowercase();
        let transition =
            table::lookup(&key).ok_or_else(|| PhaseError::InvalidPhaseKey(phase_key.to_string()))?;

        let next_year = if transition.next_year {
            year.checked_add(1).ok_or(PhaseError::YearOutOfRange(year))?
        } else {
            year
        };

        let current = Self {
            phase: Phase::new(transition.season, year, transition.phase_type),
            next: Phase::new(transition.next_season, next_year, transition.next_phase_type),
        };
        debug!(key = %key, year, current = %current.phase, next = %current.next, "resolved phase");
        Ok(current)
    }

    /// See [`Phase::simple_title`].
    #[must_use]
    pub fn simple_title(&self) -> String {
        self.phase.simple_title()
    }

    /// See [`Phase::moves_title`].
    #[must_use]
    pub fn moves_title(&self) -> String {
        self.phase.moves_title()
    }

    /// Title under which this phase's results are announced.
    ///
    /// Movement results are named after the movement phase
    /// (`"Spring 1901 Results"`). Retreat and adjustment results are
    /// announced under the phase that follows (`"Fall 1901"`).
    #[must_use]
    pub fn results_title(&self) -> String {
        match self.phase.phase_type {
            PhaseType::Moves => format!("{} Results", self.phase.simple_title()),
            PhaseType::Retreats | PhaseType::Adjustments => self.next.simple_title(),
        }
    }
}
