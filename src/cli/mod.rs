//! Command-line interface for checkup.

pub mod args;
pub mod commands;

pub use args::{CheckCmdArgs, Cli, Commands, InstallHelpArgs, ListArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
