//! CLI argument definitions
//!
//! All Clap derive structs for `adjuclock` command-line parsing.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::deadline::DeadlineAnchor;
use crate::observability::LogFormat;

// ============================================================================
// Root CLI
// ============================================================================

/// Adjudication deadlines and announcements for Diplomacy-style games.
#[derive(Parser, Debug)]
#[command(name = "adjuclock", author, version, about)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output control.
    #[arg(long, default_value = "auto", global = true, env = "ADJUCLOCK_COLOR")]
    pub color: ColorChoice,

    /// Log output format.
    #[arg(long, default_value = "human", global = true, env = "ADJUCLOCK_LOG_FORMAT")]
    pub log_format: LogFormat,

    /// Path to the game book.
    #[arg(long, default_value = "adjuclock.json", global = true, env = "ADJUCLOCK_DATA")]
    pub data: PathBuf,
}

// ============================================================================
// Top-Level Commands
// ============================================================================

/// Top-level subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create, inspect, edit, or delete games.
    Game(GameCommand),

    /// Manage game nicknames.
    Nickname(NicknameCommand),

    /// Announce an adjudication and the next deadline.
    Adju(AdjuArgs),

    /// Replay a full game year with zero-day deadlines.
    SelfTest(SelfTestArgs),

    /// Generate shell completion scripts.
    Completions(CompletionsArgs),

    /// Display version information.
    Version(VersionArgs),
}

// ============================================================================
// Game Command
// ============================================================================

/// Game management commands.
#[derive(Args, Debug)]
pub struct GameCommand {
    /// Game subcommand.
    #[command(subcommand)]
    pub subcommand: GameSubcommand,
}

/// Game subcommands.
#[derive(Subcommand, Debug)]
pub enum GameSubcommand {
    /// Add a game with default or given settings.
    Create(GameCreateArgs),

    /// Delete a game and its nicknames.
    Delete(GameDeleteArgs),

    /// List all games.
    List(GameListArgs),

    /// Show one game.
    Show(GameShowArgs),

    /// Change a game's settings.
    Edit(GameEditArgs),
}

/// Arguments for `game create`.
#[derive(Args, Debug)]
pub struct GameCreateArgs {
    /// Full game name.
    pub name: String,

    /// Adjudication time, HH:MM.
    #[arg(short, long)]
    pub time: Option<String>,

    /// Adjudication timezone, e.g. `America/Los_Angeles`.
    #[arg(short = 'z', long)]
    pub timezone: Option<String>,

    /// Phase lengths in days.
    #[arg(
        short,
        long,
        num_args = 3,
        value_names = ["MOVES", "RETREATS", "ADJUSTMENTS"]
    )]
    pub phase_lengths: Option<Vec<i64>>,

    /// Nickname for the game (repeatable).
    #[arg(short, long = "nickname")]
    pub nicknames: Vec<String>,
}

/// Arguments for `game delete`.
#[derive(Args, Debug)]
pub struct GameDeleteArgs {
    /// Full game name.
    pub name: String,
}

/// Arguments for `game list`.
#[derive(Args, Debug)]
pub struct GameListArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `game show`.
#[derive(Args, Debug)]
pub struct GameShowArgs {
    /// Game name or nickname.
    pub name: String,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `game edit`.
#[derive(Args, Debug)]
pub struct GameEditArgs {
    /// Game name or nickname.
    pub name: String,

    /// New adjudication time, HH:MM.
    #[arg(short = 't', long)]
    pub adju_time: Option<String>,

    /// New adjudication timezone.
    #[arg(short = 'z', long)]
    pub adju_tz: Option<String>,

    /// New movement phase length in days.
    #[arg(short, long)]
    pub moves_length: Option<i64>,

    /// New retreat phase length in days.
    #[arg(short, long)]
    pub retreats_length: Option<i64>,

    /// New adjustment phase length in days.
    #[arg(short, long)]
    pub adjustments_length: Option<i64>,
}

// ============================================================================
// Nickname Command
// ============================================================================

/// Nickname management commands.
#[derive(Args, Debug)]
pub struct NicknameCommand {
    /// Nickname subcommand.
    #[command(subcommand)]
    pub subcommand: NicknameSubcommand,
}

/// Nickname subcommands.
#[derive(Subcommand, Debug)]
pub enum NicknameSubcommand {
    /// Point a nickname at a game.
    Set(NicknameSetArgs),

    /// List all nicknames.
    List,

    /// Remove a nickname.
    Remove(NicknameRemoveArgs),
}

/// Arguments for `nickname set`.
#[derive(Args, Debug)]
pub struct NicknameSetArgs {
    /// Game name (or an existing nickname).
    pub full_name: String,

    /// Nickname to set.
    pub nickname: String,
}

/// Arguments for `nickname remove`.
#[derive(Args, Debug)]
pub struct NicknameRemoveArgs {
    /// Nickname to remove.
    pub nickname: String,
}

// ============================================================================
// Adjudication Commands
// ============================================================================

/// Arguments for `adju`.
#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct AdjuArgs {
    /// Game name or nickname.
    pub game: String,

    /// Phase being adjudicated: s, sr, f, fr, or w.
    pub phase: String,

    /// Game year of the phase.
    pub year: i64,

    /// Days until the deadline, instead of the game's phase length.
    #[arg(short = 'u', long)]
    pub days_until: Option<i64>,

    /// Adjudication time for this deadline only, HH:MM.
    #[arg(short = 't', long)]
    pub adju_time: Option<String>,

    /// Date the day offset is counted from.
    #[arg(long, default_value = "today")]
    pub anchor: DeadlineAnchor,

    /// Reference instant instead of the current time (RFC 3339).
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<DateTime<Utc>>,

    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

/// Arguments for `self-test`.
#[derive(Args, Debug)]
#[command(allow_negative_numbers = true)]
pub struct SelfTestArgs {
    /// Game name or nickname; a default game is used if omitted.
    #[arg(short, long)]
    pub game: Option<String>,

    /// Year to replay.
    #[arg(short, long, default_value_t = 0)]
    pub year: i64,

    /// Reference instant instead of the current time (RFC 3339).
    #[arg(long, value_parser = parse_instant)]
    pub now: Option<DateTime<Utc>>,
}

// ============================================================================
// Completions / Version
// ============================================================================

/// Arguments for shell completion generation.
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Target shell for completion script.
    pub shell: Shell,
}

/// Arguments for version display.
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output format.
    #[arg(short, long, default_value = "human")]
    pub format: OutputFormat,
}

// ============================================================================
// CLI-Local Enums
// ============================================================================

/// Color output choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal support.
    #[default]
    Auto,
    /// Always use color.
    Always,
    /// Never use color.
    Never,
}

/// Output format for structured output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    /// Bash shell.
    Bash,
    /// Zsh shell.
    Zsh,
    /// Fish shell.
    Fish,
    /// `PowerShell`.
    #[value(name = "powershell")]
    PowerShell,
    /// Elvish shell.
    Elvish,
}

fn parse_instant(s: &str) -> Result<DateTime<Utc>, String> {
    DateTime::parse_from_rfc3339(s)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|e| format!("expected an RFC 3339 timestamp: {e}"))
}

// ============================================================================
// Tests
// ============================================================================
