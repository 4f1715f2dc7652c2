//! Discord timestamp markers.
//!
//! A marker is the token `<t:{unix_seconds}:{style}>`. Chat clients render
//! it in each viewer's own timezone, so the same token names the same
//! instant for everyone.

use chrono::{DateTime, TimeZone};

/// Rendering directive embedded in a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Long date with weekday and time (`F`).
    Absolute,
    /// Relative to the viewer's clock, e.g. "in 2 days" (`R`).
    Relative,
}

impl MarkerStyle {
    /// Single-letter style code.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Absolute => 'F',
            Self::Relative => 'R',
        }
    }
}

/// An instant encoded as Discord markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeadlineMarker {
    unix_seconds: i64,
}

impl DeadlineMarker {
    /// Marker for the given instant, truncated to whole seconds.
    #[must_use]
    pub fn new<Tz: TimeZone>(instant: &DateTime<Tz>) -> Self {
        Self {
            unix_seconds: instant.timestamp(),
        }
    }

    /// Seconds since the Unix epoch.
    #[must_use]
    pub const fn unix_seconds(&self) -> i64 {
        self.unix_seconds
    }

    /// Token in the given style.
    #[must_use]
    pub fn token(&self, style: MarkerStyle) -> String {
        format!("<t:{}:{}>", self.unix_seconds, style.code())
    }

    /// Absolute token followed by the relative token.
    #[must_use]
    pub fn absolute_and_relative(&self) -> String {
        format!(
            "{} {}",
            self.token(MarkerStyle::Absolute),
            self.token(MarkerStyle::Relative)
        )
    }

    /// Parses a token back into a marker and its style.
    #[must_use]
    pub fn parse(token: &str) -> Option<(Self, MarkerStyle)> {
        let body = token.strip_prefix("<t:")?.strip_suffix('>')?;
        let (seconds, code) = body.split_once(':')?;
        let style = match code {
            "F" => MarkerStyle::Absolute,
            "R" => MarkerStyle::Relative,
            _ => return None,
        };
        let unix_seconds = seconds.parse().ok()?;
        Some((Self { unix_seconds }, style))
    }
}
