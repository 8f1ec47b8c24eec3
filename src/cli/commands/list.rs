//! List command implementation.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::error::Result;
use crate::registry::builtin_registry;

/// Lists every registered check.
pub struct ListCommand {
    args: ListArgs,
}

impl ListCommand {
    /// Create the command.
    pub fn new(args: ListArgs) -> Self {
        Self { args }
    }
}

/// One row of `checkup list --json` output.
#[derive(Debug, Serialize)]
struct CheckInfo {
    name: String,
    category: String,
    optional: bool,
    description: String,
    dependencies: Vec<String>,
}

impl Command for ListCommand {
    fn execute(&self) -> Result<CommandResult> {
        let registry = builtin_registry();

        let infos: Vec<CheckInfo> = registry
            .iter()
            .map(|check| CheckInfo {
                name: check.name().to_string(),
                category: registry
                    .category_of(check.name())
                    .unwrap_or("general")
                    .to_string(),
                optional: check.optional(),
                description: check.description().to_string(),
                dependencies: check.dependencies().to_vec(),
            })
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&infos).map_err(anyhow::Error::from)?;
            println!("{}", json);
            return Ok(CommandResult::success());
        }

        let name_width = infos
            .iter()
            .map(|info| info.name.len())
            .max()
            .unwrap_or(0)
            .max("Check".len());
        let category_width = infos
            .iter()
            .map(|info| info.category.len())
            .max()
            .unwrap_or(0)
            .max("Category".len());

        println!(
            "{:name_width$}  {:category_width$}  {:8}  Description",
            "Check", "Category", "Type"
        );
        for info in &infos {
            let kind = if info.optional { "Optional" } else { "Required" };
            println!(
                "{:name_width$}  {:category_width$}  {:8}  {}",
                info.name, info.category, kind, info.description
            );
        }

        Ok(CommandResult::success())
    }
}
