//! Captured subprocess execution.
//!
//! The tool checks invoke external programs directly (no shell
//! interpolation) and only ever need captured output, so this module
//! stays deliberately small.

use std::path::Path;
use std::process::Command;

use crate::error::{CheckupError, Result};

/// Captured output of an executed command.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Standard output.
    pub stdout: String,

    /// Standard error.
    pub stderr: String,

    /// Whether the command exited with code 0.
    pub success: bool,
}

impl CommandOutput {
    /// First line of stdout, trimmed.
    pub fn first_line(&self) -> &str {
        self.stdout.lines().next().unwrap_or("").trim()
    }
}

/// Run a program with arguments, capturing output.
///
/// A spawn failure (program not found) is an error; a non-zero exit is
/// a normal `CommandOutput` with `success == false`.
pub fn run_capture(program: &str, args: &[&str]) -> Result<CommandOutput> {
    run_in(None, program, args)
}

/// Run a program in a working directory, capturing output.
pub fn run_capture_in(dir: &Path, program: &str, args: &[&str]) -> Result<CommandOutput> {
    run_in(Some(dir), program, args)
}

fn run_in(dir: Option<&Path>, program: &str, args: &[&str]) -> Result<CommandOutput> {
    let mut command = Command::new(program);
    command.args(args);
    if let Some(dir) = dir {
        command.current_dir(dir);
    }

    let output = command.output().map_err(|_| CheckupError::CommandFailed {
        command: format!("{} {}", program, args.join(" ")),
        code: None,
    })?;

    Ok(CommandOutput {
        exit_code: output.status.code(),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        success: output.status.success(),
    })
}

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok() || std::env::var("GITHUB_ACTIONS").is_ok()
}
