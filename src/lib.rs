//! `adjuclock` - adjudication deadlines for Diplomacy-style games
//!
//! Given the phase that was just adjudicated and a game's settings, this
//! library works out the phase that opens next, when its orders are due,
//! and the announcement lines to post.
//!
//! ```
//! use adjuclock::config::Game;
//! use adjuclock::deadline::{AdjudicationRequest, adjudicate};
//!
//! let game = Game::new("World Cup");
//! let outcome = adjudicate(&AdjudicationRequest::new("w", 1901), &game, chrono::Utc::now())?;
//! assert_eq!(outcome.current.next.simple_title(), "Spring 1902");
//! assert_eq!(outcome.announcement.lines().len(), 6);
//! # Ok::<(), adjuclock::error::AdjuClockError>(())
//! ```

pub mod cli;
pub mod config;
pub mod deadline;
pub mod error;
pub mod observability;
pub mod phase;
