//! Game book persistence.
//!
//! The [`GameBook`] is the whole persisted state: games and the nicknames
//! that point at them. Stores load and save it as a single snapshot;
//! nothing in the phase model or deadline engine touches a store.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::game::Game;
use crate::error::StoreError;

/// Maximum edit distance for "did you mean" suggestions.
const SUGGESTION_DISTANCE: usize = 3;

// ============================================================================
// Game Book
// ============================================================================

/// Games and nicknames, in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameBook {
    /// Games keyed by full name.
    pub games: IndexMap<String, Game>,
    /// Nickname to full game name.
    pub nicknames: IndexMap<String, String>,
}

impl GameBook {
    /// Resolves a full name or nickname to the full game name.
    ///
    /// Full names take precedence over nicknames.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownGame`] with the closest known name as a
    /// suggestion if nothing matches.
    pub fn resolve_name<'a>(&'a self, name: &'a str) -> Result<&'a str, StoreError> {
        if self.games.contains_key(name) {
            return Ok(name);
        }
        match self.nicknames.get(name) {
            Some(full_name) if self.games.contains_key(full_name) => Ok(full_name.as_str()),
            _ => Err(self.unknown_game(name)),
        }
    }

    /// Looks up a game by full name or nickname.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownGame`] if nothing matches.
    pub fn get_game(&self, name: &str) -> Result<&Game, StoreError> {
        let full_name = self.resolve_name(name)?;
        self.games
            .get(full_name)
            .ok_or_else(|| self.unknown_game(name))
    }

    /// Mutable lookup by full name or nickname.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownGame`] if nothing matches.
    pub fn get_game_mut(&mut self, name: &str) -> Result<&mut Game, StoreError> {
        let full_name = self.resolve_name(name)?.to_string();
        let unknown = self.unknown_game(name);
        self.games.get_mut(&full_name).ok_or(unknown)
    }

    /// Adds a new game.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::GameExists`] if the name is taken.
    pub fn insert_game(&mut self, game: Game) -> Result<(), StoreError> {
        if self.games.contains_key(&game.name) {
            return Err(StoreError::GameExists(game.name));
        }
        self.games.insert(game.name.clone(), game);
        Ok(())
    }

    /// Removes a game by full name, along with every nickname pointing at
    /// it. Returns the game and the removed nicknames.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownGame`] if no game has that full name.
    pub fn remove_game(&mut self, name: &str) -> Result<(Game, Vec<String>), StoreError> {
        let Some(game) = self.games.shift_remove(name) else {
            return Err(self.unknown_game(name));
        };
        let removed: Vec<String> = self.nicknames_for(name).map(str::to_string).collect();
        self.nicknames.retain(|_, full_name| *full_name != name);
        Ok((game, removed))
    }

    /// Points `nickname` at a game, replacing any previous target.
    ///
    /// `game` may itself be a nickname; the stored target is always the
    /// full name.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownGame`] if `game` does not resolve.
    pub fn set_nickname(&mut self, game: &str, nickname: &str) -> Result<(), StoreError> {
        let full_name = self.resolve_name(game)?.to_string();
        self.nicknames.insert(nickname.to_string(), full_name);
        Ok(())
    }

    /// Removes a nickname, returning the game it pointed at.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UnknownNickname`] if it is not registered.
    pub fn remove_nickname(&mut self, nickname: &str) -> Result<String, StoreError> {
        self.nicknames
            .shift_remove(nickname)
            .ok_or_else(|| StoreError::UnknownNickname(nickname.to_string()))
    }

    /// Nicknames pointing at the given full name, in insertion order.
    pub fn nicknames_for<'a>(&'a self, full_name: &'a str) -> impl Iterator<Item = &'a str> {
        self.nicknames
            .iter()
            .filter(move |(_, target)| *target == full_name)
            .map(|(nickname, _)| nickname.as_str())
    }

    /// Closest game name or nickname to `input`, if any is close enough.
    #[must_use]
    pub fn suggest(&self, input: &str) -> Option<String> {
        self.games
            .keys()
            .chain(self.nicknames.keys())
            .map(|candidate| (candidate, strsim::damerau_levenshtein(input, candidate)))
            .filter(|(_, dist)| *dist <= SUGGESTION_DISTANCE)
            .min_by_key(|(_, dist)| *dist)
            .map(|(candidate, _)| candidate.clone())
    }

    fn unknown_game(&self, name: &str) -> StoreError {
        StoreError::UnknownGame {
            name: name.to_string(),
            suggestion: self.suggest(name),
        }
    }
}

// ============================================================================
// Stores
// ============================================================================

/// Loads and saves the game book as one snapshot.
pub trait GameStore {
    /// Reads the current game book.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be read.
    fn load(&self) -> Result<GameBook, StoreError>;

    /// Replaces the stored game book.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the backing storage cannot be written.
    fn save(&mut self, book: &GameBook) -> Result<(), StoreError>;
}

/// Game book kept as pretty-printed JSON in a single file.
///
/// A missing or empty file reads as an empty book. Saves write a sibling
/// temporary file and rename it over the original.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Store backed by `path`. The file is not touched until used.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl GameStore for JsonFileStore {
    fn load(&self) -> Result<GameBook, StoreError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "game book not found, starting empty");
                return Ok(GameBook::default());
            }
            Err(e) => return Err(self.io_error(e)),
        };
        if text.trim().is_empty() {
            return Ok(GameBook::default());
        }
        let book: GameBook = serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        debug!(
            path = %self.path.display(),
            games = book.games.len(),
            nicknames = book.nicknames.len(),
            "game book loaded"
        );
        Ok(book)
    }

    fn save(&mut self, book: &GameBook) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
        }
        let mut text = serde_json::to_string_pretty(book).map_err(|source| StoreError::Corrupt {
            path: self.path.clone(),
            source,
        })?;
        text.push('\n');

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        std::fs::write(&tmp, text).map_err(|e| self.io_error(e))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| self.io_error(e))?;

        debug!(path = %self.path.display(), games = book.games.len(), "game book saved");
        Ok(())
    }
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    book: GameBook,
}

impl MemoryStore {
    /// Store holding `book`.
    #[must_use]
    pub const fn new(book: GameBook) -> Self {
        Self { book }
    }
}

impl GameStore for MemoryStore {
    fn load(&self) -> Result<GameBook, StoreError> {
        Ok(self.book.clone())
    }

    fn save(&mut self, book: &GameBook) -> Result<(), StoreError> {
        self.book = book.clone();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> GameBook {
        let mut book = GameBook::default();
        book.insert_game(Game::new("World Cup")).unwrap();
        book.insert_game(Game::new("Gunboat")).unwrap();
        book.set_nickname("World Cup", "wc").unwrap();
        book.set_nickname("World Cup", "cup").unwrap();
        book.set_nickname("Gunboat", "gb").unwrap();
        book
    }

    #[test]
    fn lookup_by_name_and_nickname() {
        let book = book();
        assert_eq!(book.get_game("World Cup").unwrap().name, "World Cup");
        assert_eq!(book.get_game("wc").unwrap().name, "World Cup");
        assert_eq!(book.get_game("gb").unwrap().name, "Gunboat");
    }

    #[test]
    fn full_name_beats_nickname() {
        let mut book = book();
        book.insert_game(Game::new("wc")).unwrap();
        assert_eq!(book.get_game("wc").unwrap().name, "wc");
    }

    #[test]
    fn unknown_game_suggests_close_match() {
        let book = book();
        match book.get_game("Gunbaot") {
            Err(StoreError::UnknownGame { name, suggestion }) => {
                assert_eq!(name, "Gunbaot");
                assert_eq!(suggestion.as_deref(), Some("Gunboat"));
            }
            other => panic!("expected UnknownGame, got {other:?}"),
        }
        match book.get_game("completely different") {
            Err(StoreError::UnknownGame { suggestion, .. }) => assert!(suggestion.is_none()),
            other => panic!("expected UnknownGame, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_game_rejected() {
        let mut book = book();
        assert!(matches!(
            book.insert_game(Game::new("Gunboat")),
            Err(StoreError::GameExists(name)) if name == "Gunboat"
        ));
    }

    #[test]
    fn remove_game_drops_its_nicknames() {
        let mut book = book();
        let (game, removed) = book.remove_game("World Cup").unwrap();
        assert_eq!(game.name, "World Cup");
        assert_eq!(removed, vec!["wc".to_string(), "cup".to_string()]);
        assert_eq!(book.nicknames.len(), 1);
        assert!(book.get_game("wc").is_err());
        assert!(book.get_game("gb").is_ok());
    }

    #[test]
    fn remove_game_requires_full_name() {
        let mut book = book();
        assert!(book.remove_game("wc").is_err());
        assert_eq!(book.games.len(), 2);
    }

    #[test]
    fn nickname_of_nickname_targets_full_name() {
        let mut book = book();
        book.set_nickname("wc", "w").unwrap();
        assert_eq!(book.nicknames.get("w").map(String::as_str), Some("World Cup"));
    }

    #[test]
    fn nickname_for_unknown_game_rejected() {
        let mut book = book();
        assert!(book.set_nickname("Nope", "n").is_err());
        assert!(!book.nicknames.contains_key("n"));
    }

    #[test]
    fn remove_nickname() {
        let mut book = book();
        assert_eq!(book.remove_nickname("gb").unwrap(), "Gunboat");
        assert!(matches!(
            book.remove_nickname("gb"),
            Err(StoreError::UnknownNickname(_))
        ));
    }

    #[test]
    fn get_game_mut_edits_in_place() {
        let mut book = book();
        book.get_game_mut("cup").unwrap().config.move_length = 4;
        assert_eq!(book.get_game("World Cup").unwrap().config.move_length, 4);
    }

    #[test]
    fn json_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("book.json"));
        assert_eq!(store.load().unwrap(), GameBook::default());
    }

    #[test]
    fn json_store_empty_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(&path, "  \n").unwrap();
        assert_eq!(JsonFileStore::new(path).load().unwrap(), GameBook::default());
    }

    #[test]
    fn json_store_keeps_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("nested").join("book.json"));
        let mut original = GameBook::default();
        for name in ["zeta", "alpha", "mu"] {
            original.insert_game(Game::new(name)).unwrap();
        }
        store.save(&original).unwrap();

        let loaded = store.load().unwrap();
        let names: Vec<&str> = loaded.games.keys().map(String::as_str).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mu"]);
        assert_eq!(loaded, original);
    }

    #[test]
    fn json_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(
            JsonFileStore::new(path).load(),
            Err(StoreError::Corrupt { .. })
        ));
    }

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::default();
        store.save(&book()).unwrap();
        assert_eq!(store.load().unwrap().games.len(), 2);
    }
}
