//! Adjudication announcements.
//!
//! Turns a resolved phase and its deadline into the six lines posted when
//! a phase is adjudicated, and runs the whole pipeline from a phase key.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::Serialize;
use tracing::info;

use super::clock::{AdjuTime, DeadlineAnchor, parse_timezone, resolve_deadline};
use super::duration::{Countdown, resolve_duration};
use super::marker::{DeadlineMarker, MarkerStyle};
use crate::config::Game;
use crate::error::Result;
use crate::phase::CurrentPhase;

/// Long local rendering of a deadline, e.g. `Friday, January 02, 2026 14:00`.
pub const LOCAL_DATETIME_FORMAT: &str = "%A, %B %d, %Y %H:%M";

/// The lines announcing an adjudication, in posting order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Announcement {
    /// What was adjudicated, what opens, and when orders are due.
    pub transition: String,
    /// Upper-cased next phase with its deadline.
    pub deadline_banner: String,
    /// Upper-cased game name and phase with its type.
    pub moves_banner: String,
    /// Upper-cased game name and results title.
    pub results_banner: String,
    /// Bare absolute marker, e.g. for pinning.
    pub marker: String,
    /// Deadline rendered in the game's zone plus the countdown.
    pub rendered: String,
}

impl Announcement {
    /// All lines in posting order.
    #[must_use]
    pub fn lines(&self) -> [&str; 6] {
        [
            self.transition.as_str(),
            self.deadline_banner.as_str(),
            self.moves_banner.as_str(),
            self.results_banner.as_str(),
            self.marker.as_str(),
            self.rendered.as_str(),
        ]
    }

    /// All lines in posting order, owned.
    #[must_use]
    pub fn into_lines(self) -> Vec<String> {
        vec![
            self.transition,
            self.deadline_banner,
            self.moves_banner,
            self.results_banner,
            self.marker,
            self.rendered,
        ]
    }
}

/// Renders the announcement for `current` with orders due at `deadline`.
///
/// Markers carry the absolute instant; the rendered block uses the
/// deadline's own zone and counts down from `now`.
#[must_use]
pub fn render_announcement(
    current: &CurrentPhase,
    deadline: &DateTime<Tz>,
    game_name: &str,
    now: DateTime<Utc>,
) -> Announcement {
    let marker = DeadlineMarker::new(deadline);
    let due = marker.absolute_and_relative();

    let simple_title = current.simple_title();
    let following_title = current.next.simple_title();
    let game = game_name.to_uppercase();

    let local = deadline.format(LOCAL_DATETIME_FORMAT);
    let countdown = Countdown::from_remaining(deadline.with_timezone(&Utc) - now);

    Announcement {
        transition: format!(
            "**{simple_title} has been adjudicated. The phase is now {following_title}.** Orders are due {due}."
        ),
        deadline_banner: format!("**{}: {due}**", following_title.to_uppercase()),
        moves_banner: format!("**{game} {}**", current.moves_title().to_uppercase()),
        results_banner: format!("**{game} {}**", current.results_title().to_uppercase()),
        marker: marker.token(MarkerStyle::Absolute),
        rendered: format!("\nRendered timestamp:\n\t{local}\n\t{countdown}"),
    }
}

// ============================================================================
// Adjudication
// ============================================================================

/// Inputs for one adjudication beyond the game itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjudicationRequest {
    /// Key of the phase being adjudicated (`s`, `sr`, `f`, `fr`, `w`).
    pub phase_key: String,
    /// Game year of that phase.
    pub year: i64,
    /// Days until the deadline, overriding the game's phase length.
    pub days_until: Option<i64>,
    /// Adjudication time overriding the game's, `HH:MM`.
    pub adju_time: Option<String>,
    /// Date the day offset is counted from.
    pub anchor: DeadlineAnchor,
}

impl AdjudicationRequest {
    /// Request using the game's phase lengths and adjudication time.
    #[must_use]
    pub fn new(phase_key: impl Into<String>, year: i64) -> Self {
        Self {
            phase_key: phase_key.into(),
            year,
            days_until: None,
            adju_time: None,
            anchor: DeadlineAnchor::default(),
        }
    }

    /// Sets an explicit day offset.
    #[must_use]
    pub const fn with_days_until(mut self, days: i64) -> Self {
        self.days_until = Some(days);
        self
    }
}

/// Outcome of a successful adjudication.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adjudication {
    /// The adjudicated phase and the phase now open.
    pub current: CurrentPhase,
    /// Day offset that was applied.
    pub days_until: i64,
    /// When orders for the next phase are due.
    pub deadline: DateTime<Tz>,
    /// Lines to post.
    pub announcement: Announcement,
}

/// Resolves the phase, computes the deadline, and renders the
/// announcement.
///
/// The game's time and zone are re-validated here; nothing is produced
/// unless every step succeeds.
///
/// # Errors
///
/// Returns a phase error for an unknown key and a deadline error for an
/// invalid adjudication time, unknown timezone, or out-of-range date.
pub fn adjudicate(
    request: &AdjudicationRequest,
    game: &Game,
    now: DateTime<Utc>,
) -> Result<Adjudication> {
    let current = CurrentPhase::create(&request.phase_key, request.year)?;
    let config = &game.config;

    let days_until = resolve_duration(current.next.phase_type, config, request.days_until);
    let time: AdjuTime = request
        .adju_time
        .as_deref()
        .unwrap_or(config.adju_time.as_str())
        .parse()?;
    let tz = parse_timezone(&config.adju_tz)?;

    let deadline = resolve_deadline(request.anchor, days_until, time, tz, now)?;
    let announcement = render_announcement(&current, &deadline, &game.name, now);

    info!(
        game = %game.name,
        phase = %current.phase,
        next = %current.next,
        days_until,
        deadline = %deadline.to_rfc3339(),
        "adjudication announced"
    );

    Ok(Adjudication {
        current,
        days_until,
        deadline,
        announcement,
    })
}
