//! Install-help command implementation.

use console::style;

use crate::cli::args::InstallHelpArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::{CheckupError, Result};
use crate::install::{install_instructions, KNOWN_TOOLS};

/// Prints platform-specific installation instructions for a tool.
pub struct InstallHelpCommand {
    args: InstallHelpArgs,
}

impl InstallHelpCommand {
    /// Create the command.
    pub fn new(args: InstallHelpArgs) -> Self {
        Self { args }
    }
}

impl Command for InstallHelpCommand {
    fn execute(&self) -> Result<CommandResult> {
        match install_instructions(&self.args.tool) {
            Some(instructions) => {
                println!("{}", style(format!("Installing {}", self.args.tool)).bold().cyan());
                println!();
                println!("{}", instructions);
                Ok(CommandResult::success())
            }
            None => {
                eprintln!(
                    "No installation instructions found for '{}' (known tools: {})",
                    self.args.tool,
                    KNOWN_TOOLS.join(", ")
                );
                Err(CheckupError::UnknownTool {
                    name: self.args.tool.clone(),
                })
            }
        }
    }
}
