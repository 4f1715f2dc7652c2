//! Deadline engine
//!
//! Combines a phase transition with a game's adjudication settings to
//! find when orders are due, and renders the announcement lines.
//!
//! # Architecture
//!
//! - [`clock`] - `HH:MM` parsing, timezone lookup, day-offset and
//!   next-occurrence deadlines
//! - [`duration`] - phase lengths and the countdown text
//! - [`marker`] - Discord timestamp tokens
//! - [`announcement`] - the six announcement lines and [`adjudicate`]

pub mod announcement;
pub mod clock;
pub mod duration;
pub mod marker;

pub use announcement::{
    Adjudication, AdjudicationRequest, Announcement, LOCAL_DATETIME_FORMAT, adjudicate,
    render_announcement,
};
pub use clock::{
    AdjuTime, DeadlineAnchor, compute_deadline, next_occurrence, offset_deadline, parse_timezone,
    resolve_deadline,
};
pub use duration::{Countdown, resolve_duration};
pub use marker::{DeadlineMarker, MarkerStyle};
