//! Shared integration-test harness for running the `adjuclock` binary
//! against a throwaway game book.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// A scratch workspace with its own game book.
///
/// The directory is removed on drop.
pub struct AdjuClockProcess {
    dir: TempDir,
}

impl AdjuClockProcess {
    /// Creates a workspace with an empty (not yet written) game book.
    #[allow(clippy::missing_panics_doc)]
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("failed to create temp dir"),
        }
    }

    /// Path of the game book used by [`run`](Self::run).
    pub fn data_path(&self) -> PathBuf {
        self.dir.path().join("adjuclock.json")
    }

    /// Runs the binary with `args`, pointed at this workspace's game book.
    #[allow(clippy::missing_panics_doc)]
    pub fn run(&self, args: &[&str]) -> Output {
        let data = self.data_path();
        let mut full: Vec<&str> = vec!["--quiet", "--data", data.to_str().expect("non-UTF-8 path")];
        full.extend_from_slice(args);
        Self::spawn_command(&full)
    }

    /// Runs `args` and returns stdout, asserting success.
    #[allow(clippy::missing_panics_doc)]
    pub fn run_ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "{args:?} should succeed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    /// Runs the binary with exactly `args`.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn_command(args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_adjuclock"))
            .args(args)
            .env_remove("ADJUCLOCK_DATA")
            .env_remove("ADJUCLOCK_LOG_LEVEL")
            .output()
            .expect("failed to spawn adjuclock")
    }
}
