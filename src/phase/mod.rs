//! Phase model
//!
//! The yearly turn cycle of the game as a fixed state machine:
//!
//! ```text
//! Spring Moves -> Spring Retreats -> Fall Moves -> Fall Retreats
//!     -> Winter Adjustments -> Spring Moves (next year)
//! ```
//!
//! # Architecture
//!
//! - [`Phase`] - season, year, and phase type as a plain value
//! - [`table`] - the key → transition lookup table
//! - [`CurrentPhase`] - a resolved phase and its successor, plus title helpers

pub mod current;
pub mod model;
pub mod table;

pub use current::CurrentPhase;
pub use model::{Phase, PhaseType, Season};
pub use table::{TRANSITIONS, Transition, phase_keys};
