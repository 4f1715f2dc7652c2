//! `tracing` subscriber setup.
//!
//! stdout carries the announcement lines and JSON output that users paste
//! or pipe elsewhere. Diagnostics therefore only ever go to stderr, and
//! stay at `warn` unless asked for.

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

use crate::cli::args::ColorChoice;

/// Environment variable holding an `EnvFilter` directive. Overrides `-v`.
pub const LOG_LEVEL_ENV: &str = "ADJUCLOCK_LOG_LEVEL";

/// How diagnostics are written to stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum LogFormat {
    /// Plain text lines.
    #[default]
    Human,
    /// One JSON object per event.
    Json,
}

/// Level directive for a `-v` count. Saturates at `trace`.
#[must_use]
pub const fn level_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Whether stderr output should carry ANSI colors.
///
/// `auto` colors only an interactive stderr and honors `NO_COLOR`.
#[must_use]
pub const fn use_ansi(color: ColorChoice, stderr_is_terminal: bool, no_color: bool) -> bool {
    match color {
        ColorChoice::Always => true,
        ColorChoice::Never => false,
        ColorChoice::Auto => stderr_is_terminal && !no_color,
    }
}

/// Installs the global subscriber writing to stderr.
///
/// Targets are shown from `-vv` up. A second call is a no-op.
pub fn init_logging(format: LogFormat, verbose: u8, color: ColorChoice) {
    let filter = EnvFilter::try_from_env(LOG_LEVEL_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_directive(verbose)));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(verbose >= 2)
        .with_writer(std::io::stderr);

    let installed = match format {
        LogFormat::Human => {
            let ansi = use_ansi(
                color,
                std::io::stderr().is_terminal(),
                std::env::var_os("NO_COLOR").is_some(),
            );
            builder.with_ansi(ansi).try_init()
        }
        LogFormat::Json => builder.json().try_init(),
    };
    if installed.is_err() {
        tracing::trace!("subscriber already installed");
    }
}
