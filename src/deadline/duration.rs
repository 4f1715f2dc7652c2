//! Phase durations and the countdown shown next to a deadline.

use chrono::TimeDelta;

use crate::config::GameConfig;
use crate::phase::PhaseType;

/// Days allowed for a phase of the given type.
///
/// An explicit `days_until` wins over the game's configured length.
#[must_use]
pub fn resolve_duration(
    next_phase_type: PhaseType,
    config: &GameConfig,
    days_until: Option<i64>,
) -> i64 {
    days_until.unwrap_or(match next_phase_type {
        PhaseType::Moves => config.move_length,
        PhaseType::Retreats => config.retreat_length,
        PhaseType::Adjustments => config.adjustment_length,
    })
}

/// Time left until a deadline, in whole days, hours and minutes.
///
/// Once the deadline has passed the magnitudes count time since it, and
/// [`overdue`](Self::overdue) is set. Counts are never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Countdown {
    /// The deadline is in the past.
    pub overdue: bool,
    /// Whole days.
    pub days: u64,
    /// Hours past the whole days, `0..24`.
    pub hours: u64,
    /// Minutes past the whole hours, `0..60`.
    pub minutes: u64,
}

impl Countdown {
    /// Splits `remaining` (deadline minus now) into days, hours and minutes.
    /// Seconds are truncated.
    #[must_use]
    pub fn from_remaining(remaining: TimeDelta) -> Self {
        let seconds = remaining.num_seconds();
        let total = seconds.unsigned_abs();
        Self {
            overdue: seconds < 0,
            days: total / 86_400,
            hours: (total % 86_400) / 3_600,
            minutes: (total % 3_600) / 60,
        }
    }
}

impl std::fmt::Display for Countdown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let lead = if self.overdue { "overdue by" } else { "in" };
        write!(f, "{lead} {}d {}h {}m", self.days, self.hours, self.minutes)
    }
}
