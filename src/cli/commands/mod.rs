//! CLI command dispatch and handlers
//!
//! Routes parsed CLI arguments to the appropriate command handler. Every
//! handler that needs the game book receives the store explicitly.

pub mod adju;
pub mod completions;
pub mod game;
pub mod nickname;
pub mod version;

use crate::cli::args::{Cli, Commands, GameSubcommand, NicknameSubcommand};
use crate::config::JsonFileStore;
use crate::error::AdjuClockError;

/// Dispatch a parsed CLI invocation to the appropriate command handler.
///
/// # Errors
///
/// Returns an error if the dispatched command handler fails.
pub fn dispatch(cli: Cli) -> Result<(), AdjuClockError> {
    let mut store = JsonFileStore::new(cli.data);
    tracing::debug!(data = %store.path().display(), "using game book");

    match cli.command {
        Commands::Game(cmd) => match cmd.subcommand {
            GameSubcommand::Create(args) => game::create(&args, &mut store),
            GameSubcommand::Delete(args) => game::delete(&args, &mut store),
            GameSubcommand::List(args) => game::list(&args, &store),
            GameSubcommand::Show(args) => game::show(&args, &store),
            GameSubcommand::Edit(args) => game::edit(&args, &mut store),
        },
        Commands::Nickname(cmd) => match cmd.subcommand {
            NicknameSubcommand::Set(args) => nickname::set(&args, &mut store),
            NicknameSubcommand::List => nickname::list(&store),
            NicknameSubcommand::Remove(args) => nickname::remove(&args, &mut store),
        },
        Commands::Adju(args) => adju::run(&args, &store),
        Commands::SelfTest(args) => adju::self_test(&args, &store),
        Commands::Completions(args) => {
            completions::run(&args);
            Ok(())
        }
        Commands::Version(args) => {
            version::run(&args);
            Ok(())
        }
    }
}
