//! Post-apply reload commands.
//!
//! Commands run in order from the base directory. Each one is
//! fire-and-forget: spawn failures and non-zero exits are logged as
//! warnings and never fail the run.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::config::ReloadCommand;

/// What happened to one reload command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReloadStatus {
    /// Exited with status 0.
    Succeeded,
    /// Exited non-zero, or was killed by a signal (`None`).
    Failed(Option<i32>),
    /// Spawned in the background; not waited on.
    Detached,
    /// Could not be started at all.
    SpawnFailed(String),
}

impl ReloadStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Detached)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReloadEntry {
    /// `program arg1 arg2`, for display.
    pub command: String,
    pub status: ReloadStatus,
}

/// Process launcher seam; tests substitute a recording runner.
pub trait CommandRunner {
    fn run(&self, command: &ReloadCommand, cwd: &Path) -> io::Result<ReloadStatus>;
}

/// Runs commands with `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ReloadCommand, cwd: &Path) -> io::Result<ReloadStatus> {
        let mut process = Command::new(&command.program);
        process.args(&command.args);
        if cwd.is_dir() {
            process.current_dir(cwd);
        }

        if command.detach {
            process
                .stdin(Stdio::null())
                .stdout(Stdio::null())
                .stderr(Stdio::null());
            // Dropping the child handle leaves it running.
            process.spawn()?;
            return Ok(ReloadStatus::Detached);
        }

        let status = process.status()?;
        if status.success() {
            Ok(ReloadStatus::Succeeded)
        } else {
            Ok(ReloadStatus::Failed(status.code()))
        }
    }
}

pub fn display_command(command: &ReloadCommand) -> String {
    std::iter::once(command.program.as_str())
        .chain(command.args.iter().map(String::as_str))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Run every command in order and report each outcome.
pub fn run_reload(
    commands: &[ReloadCommand],
    cwd: &Path,
    runner: &dyn CommandRunner,
) -> Vec<ReloadEntry> {
    commands
        .iter()
        .map(|command| {
            let shown = display_command(command);
            let status = match runner.run(command, cwd) {
                Ok(status) => status,
                Err(err) => ReloadStatus::SpawnFailed(err.to_string()),
            };
            match &status {
                ReloadStatus::Succeeded => tracing::debug!(command = %shown, "reload command finished"),
                ReloadStatus::Detached => tracing::debug!(command = %shown, "reload command detached"),
                ReloadStatus::Failed(code) => {
                    tracing::warn!(command = %shown, code = ?code, "reload command exited with failure")
                }
                ReloadStatus::SpawnFailed(err) => {
                    tracing::warn!(command = %shown, error = %err, "reload command could not be started")
                }
            }
            ReloadEntry {
                command: shown,
                status,
            }
        })
        .collect()
}
