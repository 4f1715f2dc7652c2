//! Adjudication command handlers
//!
//! Implements `adju` and `self-test`.

use chrono::Utc;

use crate::cli::args::{AdjuArgs, OutputFormat, SelfTestArgs};
use crate::config::{Game, GameStore};
use crate::deadline::{Adjudication, AdjudicationRequest, adjudicate};
use crate::error::AdjuClockError;
use crate::phase::phase_keys;

/// Name of the game used by `self-test` when none is given.
pub const SELF_TEST_GAME: &str = "TEST";

/// Announce an adjudication for a stored game.
///
/// # Errors
///
/// Returns an error if the game is unknown, the phase key is invalid, or
/// the game's adjudication settings cannot produce a deadline.
pub fn run<S: GameStore>(args: &AdjuArgs, store: &S) -> Result<(), AdjuClockError> {
    let book = store.load()?;
    let game = book.get_game(&args.game)?;

    let request = AdjudicationRequest {
        phase_key: args.phase.clone(),
        year: args.year,
        days_until: args.days_until,
        adju_time: args.adju_time.clone(),
        anchor: args.anchor,
    };
    let now = args.now.unwrap_or_else(Utc::now);
    let outcome = adjudicate(&request, game, now)?;

    match args.format {
        OutputFormat::Human => {
            for line in outcome.announcement.lines() {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&adjudication_json(game, &outcome))?
            );
        }
    }
    Ok(())
}

/// Replay every phase of one year with zero-day deadlines.
///
/// Prints each announcement in turn. Stops at the first failure.
///
/// # Errors
///
/// Returns an error if the named game is unknown or any phase fails to
/// adjudicate.
pub fn self_test<S: GameStore>(args: &SelfTestArgs, store: &S) -> Result<(), AdjuClockError> {
    let game = match &args.game {
        Some(name) => store.load()?.get_game(name)?.clone(),
        None => Game::new(SELF_TEST_GAME),
    };
    let now = args.now.unwrap_or_else(Utc::now);

    let outcomes = replay_year(&game, args.year, now)?;
    for outcome in &outcomes {
        for line in outcome.announcement.lines() {
            println!("{line}");
        }
    }
    tracing::info!(
        game = %game.name,
        year = args.year,
        phases = outcomes.len(),
        "self-test complete"
    );
    Ok(())
}

/// Adjudicates `s`, `sr`, `f`, `fr`, `w` in order with `days_until = 0`.
///
/// # Errors
///
/// Returns the first adjudication error.
pub fn replay_year(
    game: &Game,
    year: i64,
    now: chrono::DateTime<Utc>,
) -> Result<Vec<Adjudication>, AdjuClockError> {
    phase_keys()
        .into_iter()
        .map(|key| adjudicate(&AdjudicationRequest::new(key, year).with_days_until(0), game, now))
        .collect()
}

fn adjudication_json(game: &Game, outcome: &Adjudication) -> serde_json::Value {
    serde_json::json!({
        "game": game.name,
        "phase": outcome.current.phase,
        "next": outcome.current.next,
        "days_until": outcome.days_until,
        "deadline": outcome.deadline.to_rfc3339(),
        "timestamp": outcome.deadline.timestamp(),
        "lines": outcome.announcement.lines(),
    })
}
