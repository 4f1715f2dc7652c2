//! Error types for `adjuclock`
//!
//! One error enum per domain (phase model, deadline engine, game
//! configuration, game store), aggregated into [`AdjuClockError`] which
//! maps every failure to a process exit code.

use std::path::PathBuf;
use thiserror::Error;

// ============================================================================
// Exit Codes
// ============================================================================

/// Exit codes for `adjuclock` CLI operations.
///
/// These codes follow Unix conventions.
pub struct ExitCode;

impl ExitCode {
    /// Successful execution
    pub const SUCCESS: i32 = 0;

    /// Configuration error (invalid game settings, corrupt game book)
    pub const CONFIG_ERROR: i32 = 2;

    /// I/O error (file not found, permission denied)
    pub const IO_ERROR: i32 = 3;

    /// Phase model error (unknown phase key, year out of range)
    pub const PHASE_ERROR: i32 = 5;

    /// Deadline engine error (bad adjudication time, unknown timezone)
    pub const DEADLINE_ERROR: i32 = 6;

    /// Lookup error (unknown game or nickname, duplicate game)
    pub const LOOKUP_ERROR: i32 = 7;
}

// ============================================================================
// Top-Level Error
// ============================================================================

/// Top-level error type for `adjuclock` operations.
///
/// This enum aggregates all domain-specific errors and provides
/// a unified interface for error handling and exit code mapping.
#[derive(Debug, Error)]
pub enum AdjuClockError {
    /// Phase model error
    #[error(transparent)]
    Phase(#[from] PhaseError),

    /// Deadline computation error
    #[error(transparent)]
    Deadline(#[from] DeadlineError),

    /// Game configuration validation error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Game store error
    #[error(transparent)]
    Store(#[from] StoreError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AdjuClockError {
    /// Returns the appropriate exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Phase(_) => ExitCode::PHASE_ERROR,
            Self::Deadline(_) => ExitCode::DEADLINE_ERROR,
            Self::Config(_) | Self::Json(_) => ExitCode::CONFIG_ERROR,
            Self::Store(e) => e.exit_code(),
            Self::Io(_) => ExitCode::IO_ERROR,
        }
    }
}

// ============================================================================
// Phase Model Errors
// ============================================================================

/// Phase model errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhaseError {
    /// Phase key is not one of `s`, `sr`, `f`, `fr`, `w`
    #[error("invalid phase key '{0}' (expected one of: s, sr, f, fr, w)")]
    InvalidPhaseKey(String),

    /// The following year cannot be represented
    #[error("year {0} is out of range for a winter rollover")]
    YearOutOfRange(i64),
}

// ============================================================================
// Deadline Engine Errors
// ============================================================================

/// Deadline engine errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeadlineError {
    /// Adjudication time is not a valid `HH:MM` clock time
    #[error("invalid adjudication time '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    /// Timezone identifier is not in the tz database
    #[error("invalid timezone '{0}'")]
    InvalidTimezone(String),

    /// Deadline date falls outside the representable calendar
    #[error("deadline {days} day(s) from {from} is out of range")]
    DateOutOfRange {
        /// Anchor date the offset was applied to
        from: String,
        /// Offset in days
        days: i64,
    },
}

// ============================================================================
// Configuration Errors
// ============================================================================

/// Game configuration validation errors, raised when settings are written.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Field has an invalid value
    #[error("invalid value for '{field}': got '{value}', expected {expected}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The actual value provided
        value: String,
        /// Description of what was expected
        expected: String,
    },
}

// ============================================================================
// Store Errors
// ============================================================================

/// Game book lookup and persistence errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Neither a game nor a nickname matches
    #[error("no game called '{name}'{}", did_you_mean(.suggestion.as_deref()))]
    UnknownGame {
        /// Name or nickname that was looked up
        name: String,
        /// Closest existing game name or nickname, if any
        suggestion: Option<String>,
    },

    /// Nickname is not registered
    #[error("no nickname called '{0}'")]
    UnknownNickname(String),

    /// A game with this name already exists
    #[error("game '{0}' already exists")]
    GameExists(String),

    /// Reading or writing the game book failed
    #[error("failed to access game book {path}: {source}")]
    Io {
        /// Path to the game book
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// The game book is not valid JSON
    #[error("game book {path} is corrupt: {source}")]
    Corrupt {
        /// Path to the game book
        path: PathBuf,
        /// Underlying parse error
        #[source]
        source: serde_json::Error,
    },
}

fn did_you_mean(suggestion: Option<&str>) -> String {
    suggestion.map_or_else(String::new, |s| format!(" (did you mean '{s}'?)"))
}

impl StoreError {
    /// Returns the exit code for this store error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::UnknownGame { .. } | Self::UnknownNickname(_) | Self::GameExists(_) => {
                ExitCode::LOOKUP_ERROR
            }
            Self::Io { .. } => ExitCode::IO_ERROR,
            Self::Corrupt { .. } => ExitCode::CONFIG_ERROR,
        }
    }
}

// ============================================================================
// Result Type Alias
// ============================================================================

/// Result type alias for `adjuclock` operations.
pub type Result<T> = std::result::Result<T, AdjuClockError>;

// ============================================================================
// Tests
// ============================================================================
