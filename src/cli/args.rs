//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Checkup - development environment health checks.
#[derive(Debug, Parser)]
#[command(name = "checkup")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides default .checkup.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show verbose output with detailed diagnostics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output (exit code only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run health checks (default if no command specified)
    Check(CheckCmdArgs),

    /// List available health checks
    List(ListArgs),

    /// Show platform-specific installation help for a tool
    InstallHelp(InstallHelpArgs),
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckCmdArgs {
    /// Run only the named checks (comma-separated)
    #[arg(long = "check", value_delimiter = ',')]
    pub checks: Vec<String>,

    /// Include the named optional checks (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub include_optional: Vec<String>,

    /// Skip all optional checks
    #[arg(long)]
    pub skip_optional: bool,

    /// Stop at the first required-check failure
    #[arg(long)]
    pub fail_fast: bool,

    /// Suppress progress bars (implied in CI)
    #[arg(long)]
    pub non_interactive: bool,

    /// Write a JSON report of the run to this file
    #[arg(long)]
    pub report: Option<PathBuf>,
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `install-help` command.
#[derive(Debug, Clone, clap::Args)]
pub struct InstallHelpArgs {
    /// Tool to show installation help for
    pub tool: String,
}
