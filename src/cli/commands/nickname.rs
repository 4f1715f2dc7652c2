//! Nickname command handlers
//!
//! Implements `nickname set`, `nickname list`, and `nickname remove`.

use crate::cli::args::{NicknameRemoveArgs, NicknameSetArgs};
use crate::config::GameStore;
use crate::error::AdjuClockError;

/// Point a nickname at an existing game.
///
/// # Errors
///
/// Returns an error if the game is unknown or the game book cannot be
/// read or written.
pub fn set<S: GameStore>(args: &NicknameSetArgs, store: &mut S) -> Result<(), AdjuClockError> {
    let mut book = store.load()?;
    book.set_nickname(&args.full_name, &args.nickname)?;
    store.save(&book)?;
    tracing::info!(nickname = %args.nickname, game = %args.full_name, "nickname set");
    Ok(())
}

/// Print every nickname and the game it points at.
///
/// # Errors
///
/// Returns an error if the game book cannot be read.
pub fn list<S: GameStore>(store: &S) -> Result<(), AdjuClockError> {
    let book = store.load()?;
    if book.nicknames.is_empty() {
        println!("No nicknames set");
        return Ok(());
    }
    for (nickname, full_name) in &book.nicknames {
        println!("\t{nickname:.<10}{full_name:.>32}");
    }
    Ok(())
}

/// Remove a nickname.
///
/// # Errors
///
/// Returns an error if the nickname is not registered or the game book
/// cannot be read or written.
pub fn remove<S: GameStore>(
    args: &NicknameRemoveArgs,
    store: &mut S,
) -> Result<(), AdjuClockError> {
    let mut book = store.load()?;
    let full_name = book.remove_nickname(&args.nickname)?;
    store.save(&book)?;
    tracing::info!(nickname = %args.nickname, game = %full_name, "nickname removed");
    Ok(())
}
