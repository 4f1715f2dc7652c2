//! Command-line interface
//!
//! - [`args`] - clap argument definitions
//! - [`commands`] - handlers for each subcommand

pub mod args;
pub mod commands;
