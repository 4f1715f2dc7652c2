//! Game configuration and the game book.
//!
//! - [`game`] - per-game adjudication settings with defaults and overrides
//! - [`store`] - the persisted book of games and nicknames

pub mod game;
pub mod store;

pub use game::{DEFAULT_ADJU_TIME, DEFAULT_ADJU_TZ, Game, GameConfig, GameConfigOverrides};
pub use store::{GameBook, GameStore, JsonFileStore, MemoryStore};
