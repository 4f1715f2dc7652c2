//! Per-game adjudication settings.

use serde::{Deserialize, Serialize};

use crate::deadline::{AdjuTime, parse_timezone};
use crate::error::ConfigError;

/// Default adjudication time.
pub const DEFAULT_ADJU_TIME: &str = "14:00";

/// Default adjudication timezone.
pub const DEFAULT_ADJU_TZ: &str = "America/Los_Angeles";

/// Adjudication settings for one game.
///
/// Time and zone are kept as written so a game book stays readable; they
/// are parsed again whenever a deadline is computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Local adjudication time, `HH:MM`.
    pub adju_time: String,
    /// IANA timezone of the adjudication time.
    pub adju_tz: String,
    /// Days allowed for movement phases.
    pub move_length: i64,
    /// Days allowed for retreat phases.
    pub retreat_length: i64,
    /// Days allowed for adjustment phases.
    pub adjustment_length: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            adju_time: DEFAULT_ADJU_TIME.to_string(),
            adju_tz: DEFAULT_ADJU_TZ.to_string(),
            move_length: 2,
            retreat_length: 1,
            adjustment_length: 1,
        }
    }
}

/// Partial settings. Only fields that are `Some` are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfigOverrides {
    /// Replacement adjudication time.
    pub adju_time: Option<String>,
    /// Replacement timezone.
    pub adju_tz: Option<String>,
    /// Replacement movement phase length.
    pub move_length: Option<i64>,
    /// Replacement retreat phase length.
    pub retreat_length: Option<i64>,
    /// Replacement adjustment phase length.
    pub adjustment_length: Option<i64>,
}

impl GameConfigOverrides {
    /// Returns `true` if no field is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.adju_time.is_none()
            && self.adju_tz.is_none()
            && self.move_length.is_none()
            && self.retreat_length.is_none()
            && self.adjustment_length.is_none()
    }
}

impl GameConfig {
    /// Replaces the fields present in `overrides`, leaving the rest.
    pub fn apply(&mut self, overrides: GameConfigOverrides) {
        if let Some(adju_time) = overrides.adju_time {
            self.adju_time = adju_time;
        }
        if let Some(adju_tz) = overrides.adju_tz {
            self.adju_tz = adju_tz;
        }
        if let Some(days) = overrides.move_length {
            self.move_length = days;
        }
        if let Some(days) = overrides.retreat_length {
            self.retreat_length = days;
        }
        if let Some(days) = overrides.adjustment_length {
            self.adjustment_length = days;
        }
    }

    /// Returns a copy with `overrides` applied.
    #[must_use]
    pub fn merged(&self, overrides: GameConfigOverrides) -> Self {
        let mut merged = self.clone();
        merged.apply(overrides);
        merged
    }

    /// Checks that the settings can produce a deadline.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first field that is
    /// not a valid `HH:MM` time, a known timezone, or a non-negative
    /// length.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.adju_time.parse::<AdjuTime>().is_err() {
            return Err(invalid("adju_time", &self.adju_time, "a time as HH:MM"));
        }
        if parse_timezone(&self.adju_tz).is_err() {
            return Err(invalid(
                "adju_tz",
                &self.adju_tz,
                "an IANA timezone such as America/Los_Angeles",
            ));
        }
        for (field, days) in [
            ("move_length", self.move_length),
            ("retreat_length", self.retreat_length),
            ("adjustment_length", self.adjustment_length),
        ] {
            if days < 0 {
                return Err(invalid(field, &days.to_string(), "a non-negative number of days"));
            }
        }
        Ok(())
    }
}

fn invalid(field: &str, value: &str, expected: &str) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
        expected: expected.to_string(),
    }
}

/// A named game and its settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    /// Full game name.
    pub name: String,
    /// Adjudication settings.
    #[serde(flatten)]
    pub config: GameConfig,
}

impl Game {
    /// A game with default settings.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            config: GameConfig::default(),
        }
    }
}
