//! Game command handlers
//!
//! Implements `game create`, `game delete`, `game list`, `game show`, and
//! `game edit`.

use std::fmt::Write as _;

use crate::cli::args::{
    GameCreateArgs, GameDeleteArgs, GameEditArgs, GameListArgs, GameShowArgs, OutputFormat,
};
use crate::config::{Game, GameBook, GameConfigOverrides, GameStore};
use crate::error::AdjuClockError;

/// Add a new game and any nicknames for it.
///
/// # Errors
///
/// Returns an error if the game exists, a setting is invalid, or the
/// game book cannot be read or written.
pub fn create<S: GameStore>(args: &GameCreateArgs, store: &mut S) -> Result<(), AdjuClockError> {
    let mut book = store.load()?;

    let lengths = args.phase_lengths.as_deref().unwrap_or_default();
    let mut game = Game::new(&args.name);
    game.config.apply(GameConfigOverrides {
        adju_time: args.time.clone(),
        adju_tz: args.timezone.clone(),
        move_length: lengths.first().copied(),
        retreat_length: lengths.get(1).copied(),
        adjustment_length: lengths.get(2).copied(),
    });
    game.config.validate()?;

    book.insert_game(game)?;
    for nickname in &args.nicknames {
        book.set_nickname(&args.name, nickname)?;
    }
    store.save(&book)?;

    tracing::info!(game = %args.name, nicknames = args.nicknames.len(), "game created");
    print_game(&book, &args.name)?;
    Ok(())
}

/// Delete a game and every nickname pointing at it.
///
/// # Errors
///
/// Returns an error if no game has that full name or the game book
/// cannot be read or written.
pub fn delete<S: GameStore>(args: &GameDeleteArgs, store: &mut S) -> Result<(), AdjuClockError> {
    let mut book = store.load()?;
    let (game, nicknames) = book.remove_game(&args.name)?;
    store.save(&book)?;

    println!("Deleted game {}", game.name);
    for nickname in nicknames {
        println!("Deleted nickname {nickname}");
    }
    Ok(())
}

/// List every game.
///
/// # Errors
///
/// Returns an error if the game book cannot be read.
pub fn list<S: GameStore>(args: &GameListArgs, store: &S) -> Result<(), AdjuClockError> {
    let book = store.load()?;

    match args.format {
        OutputFormat::Json => {
            let games: Vec<serde_json::Value> = book
                .games
                .values()
                .map(|game| game_json(&book, game))
                .collect();
            println!("{}", serde_json::to_string_pretty(&games)?);
        }
        OutputFormat::Human => {
            if book.games.is_empty() {
                println!("No games");
                return Ok(());
            }
            for game in book.games.values() {
                print!("{}", describe_game(&book, game));
            }
        }
    }
    Ok(())
}

/// Show one game by name or nickname.
///
/// # Errors
///
/// Returns an error if the game is unknown or the game book cannot be
/// read.
pub fn show<S: GameStore>(args: &GameShowArgs, store: &S) -> Result<(), AdjuClockError> {
    let book = store.load()?;
    let game = book.get_game(&args.name)?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&game_json(&book, game))?);
        }
        OutputFormat::Human => print!("{}", describe_game(&book, game)),
    }
    Ok(())
}

/// Apply setting changes to a game.
///
/// The edited settings are validated before anything is saved.
///
/// # Errors
///
/// Returns an error if the game is unknown, a setting is invalid, or the
/// game book cannot be read or written.
pub fn edit<S: GameStore>(args: &GameEditArgs, store: &mut S) -> Result<(), AdjuClockError> {
    let mut book = store.load()?;
    let overrides = GameConfigOverrides {
        adju_time: args.adju_time.clone(),
        adju_tz: args.adju_tz.clone(),
        move_length: args.moves_length,
        retreat_length: args.retreats_length,
        adjustment_length: args.adjustments_length,
    };

    let game = book.get_game_mut(&args.name)?;
    let edited = game.config.merged(overrides);
    edited.validate()?;
    game.config = edited;
    let name = game.name.clone();

    store.save(&book)?;
    tracing::info!(game = %name, "game edited");
    print_game(&book, &name)?;
    Ok(())
}

/// Multi-line human description of a game, ending with a newline.
///
/// ```text
/// World Cup, adju @ 14:00 America/Los_Angeles
///     -M/R/A: 2/1/1
///     -"wc"
/// ```
#[must_use]
pub fn describe_game(book: &GameBook, game: &Game) -> String {
    let config = &game.config;
    let mut out = format!(
        "{}, adju @ {} {}\n\t-M/R/A: {}/{}/{}\n",
        game.name,
        config.adju_time,
        config.adju_tz,
        config.move_length,
        config.retreat_length,
        config.adjustment_length
    );
    for nickname in book.nicknames_for(&game.name) {
        let _ = writeln!(out, "\t-\"{nickname}\"");
    }
    out
}

fn game_json(book: &GameBook, game: &Game) -> serde_json::Value {
    let nicknames: Vec<&str> = book.nicknames_for(&game.name).collect();
    serde_json::json!({
        "name": game.name,
        "adju_time": game.config.adju_time,
        "adju_tz": game.config.adju_tz,
        "move_length": game.config.move_length,
        "retreat_length": game.config.retreat_length,
        "adjustment_length": game.config.adjustment_length,
        "nicknames": nicknames,
    })
}

fn print_game(book: &GameBook, name: &str) -> Result<(), AdjuClockError> {
    print!("{}", describe_game(book, book.get_game(name)?));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MemoryStore;
    use crate::error::{ConfigError, StoreError};

    fn create_args(name: &str) -> GameCreateArgs {
        GameCreateArgs {
            name: name.to_string(),
            time: None,
            timezone: None,
            phase_lengths: None,
            nicknames: Vec::new(),
        }
    }

    fn edit_args(name: &str) -> GameEditArgs {
        GameEditArgs {
            name: name.to_string(),
            adju_time: None,
            adju_tz: None,
            moves_length: None,
            retreats_length: None,
            adjustments_length: None,
        }
    }

    #[test]
    fn create_with_settings_and_nicknames() {
        let mut store = MemoryStore::default();
        let args = GameCreateArgs {
            time: Some("09:30".to_string()),
            timezone: Some("Europe/Paris".to_string()),
            phase_lengths: Some(vec![3, 2, 1]),
            nicknames: vec!["wc".to_string()],
            ..create_args("World Cup")
        };
        create(&args, &mut store).unwrap();

        let book = store.load().unwrap();
        let game = book.get_game("wc").unwrap();
        assert_eq!(game.config.adju_time, "09:30");
        assert_eq!(game.config.adju_tz, "Europe/Paris");
        assert_eq!(
            (game.config.move_length, game.config.retreat_length, game.config.adjustment_length),
            (3, 2, 1)
        );
    }

    #[test]
    fn create_duplicate_fails_without_saving() {
        let mut store = MemoryStore::default();
        create(&create_args("wc"), &mut store).unwrap();
        let err = create(&create_args("wc"), &mut store).unwrap_err();
        assert!(matches!(err, AdjuClockError::Store(StoreError::GameExists(_))));
        assert_eq!(store.load().unwrap().games.len(), 1);
    }

    #[test]
    fn create_rejects_invalid_timezone() {
        let mut store = MemoryStore::default();
        let args = GameCreateArgs {
            timezone: Some("Middle/Earth".to_string()),
            ..create_args("wc")
        };
        let err = create(&args, &mut store).unwrap_err();
        assert!(matches!(err, AdjuClockError::Config(ConfigError::InvalidValue { .. })));
        assert!(store.load().unwrap().games.is_empty());
    }

    #[test]
    fn edit_merges_and_validates() {
        let mut store = MemoryStore::default();
        create(&create_args("wc"), &mut store).unwrap();

        let args = GameEditArgs {
            moves_length: Some(4),
            ..edit_args("wc")
        };
        edit(&args, &mut store).unwrap();
        let book = store.load().unwrap();
        let config = &book.get_game("wc").unwrap().config;
        assert_eq!(config.move_length, 4);
        assert_eq!(config.adju_time, "14:00");

        let bad = GameEditArgs {
            adju_time: Some("25:99".to_string()),
            ..edit_args("wc")
        };
        assert!(edit(&bad, &mut store).is_err());
        assert_eq!(store.load().unwrap().get_game("wc").unwrap().config.adju_time, "14:00");
    }

    #[test]
    fn delete_unknown_game() {
        let mut store = MemoryStore::default();
        let err = delete(
            &GameDeleteArgs {
                name: "ghost".to_string(),
            },
            &mut store,
        )
        .unwrap_err();
        assert!(matches!(err, AdjuClockError::Store(StoreError::UnknownGame { .. })));
    }

    #[test]
    fn describe_game_lists_nicknames() {
        let mut book = GameBook::default();
        book.insert_game(Game::new("World Cup")).unwrap();
        book.set_nickname("World Cup", "wc").unwrap();
        let text = describe_game(&book, book.get_game("wc").unwrap());
        assert_eq!(
            text,
            "World Cup, adju @ 14:00 America/Los_Angeles\n\t-M/R/A: 2/1/1\n\t-\"wc\"\n"
        );
    }
}
