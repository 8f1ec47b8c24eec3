//! Check command implementation.
//!
//! Builds the effective configuration (file, then environment, then CLI
//! flags), runs the selected checks, renders the summary, and writes
//! the optional JSON report. The process exit code is the only output
//! scripts need: 0 on overall success, 1 otherwise.

use std::fs;
use std::path::Path;

use chrono::Utc;
use serde::Serialize;

use crate::check::CheckResult;
use crate::cli::args::{CheckCmdArgs, Cli};
use crate::cli::commands::dispatcher::{Command, CommandResult};
use crate::config::{load_config, validate_config, CheckConfig};
use crate::error::{CheckupError, Result};
use crate::registry::builtin_registry;
use crate::report::create_reporter;
use crate::runner::{CheckRunner, RunResults};
use crate::shell::is_ci;

/// Runs the health checks.
pub struct CheckCommand {
    config_path: Option<std::path::PathBuf>,
    verbose: bool,
    quiet: bool,
    args: CheckCmdArgs,
}

impl CheckCommand {
    /// Create the command from global and subcommand arguments.
    pub fn new(cli: &Cli, args: CheckCmdArgs) -> Self {
        Self {
            config_path: cli.config.clone(),
            verbose: cli.verbose,
            quiet: cli.quiet,
            args,
        }
    }

    /// Resolve the effective configuration: file, env, then CLI flags.
    fn build_config(&self) -> Result<CheckConfig> {
        let mut config = load_config(self.config_path.as_deref())?;
        config.apply_env();

        if !self.args.checks.is_empty() {
            config.specific_checks = self.args.checks.clone();
        }
        if !self.args.include_optional.is_empty() {
            config.include_optional = self.args.include_optional.clone();
        }
        if self.args.skip_optional {
            config.skip_optional = true;
        }
        if self.args.fail_fast {
            config.continue_on_failure = false;
        }
        if self.verbose {
            config.verbose = true;
        }
        if self.args.non_interactive || is_ci() {
            config.non_interactive = true;
        }
        if let Some(report) = &self.args.report {
            config.report_file = Some(report.clone());
        }

        Ok(config)
    }
}

impl Command for CheckCommand {
    fn execute(&self) -> Result<CommandResult> {
        let config = self.build_config()?;
        let registry = builtin_registry();

        let mut reporter = create_reporter(!config.non_interactive, config.verbose, self.quiet);

        reporter.show_header();

        for issue in validate_config(&config, &registry) {
            reporter.warning(&issue);
        }

        let mut runner = CheckRunner::new(&registry, &config);
        let success = runner.run_all(reporter.as_mut());

        let results = runner.results();
        reporter.show_summary(success, &results);

        if let Some(path) = &config.report_file {
            write_report(path, &results, success)?;
        }

        if success {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

/// JSON report of a completed run.
#[derive(Debug, Serialize)]
struct RunReport<'a> {
    generated_at: String,
    overall_success: bool,
    checks: Vec<ReportEntry<'a>>,
}

#[derive(Debug, Serialize)]
struct ReportEntry<'a> {
    name: &'a str,
    #[serde(flatten)]
    result: &'a CheckResult,
}

fn write_report(path: &Path, results: &RunResults, overall_success: bool) -> Result<()> {
    let report = RunReport {
        generated_at: Utc::now().to_rfc3339(),
        overall_success,
        checks: results
            .iter()
            .map(|(name, result)| ReportEntry { name, result })
            .collect(),
    };

    let json = serde_json::to_string_pretty(&report).map_err(|err| {
        CheckupError::ReportWriteError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    fs::write(path, json).map_err(|err| CheckupError::ReportWriteError {
        path: path.to_path_buf(),
        message: err.to_string(),
    })?;

    tracing::debug!(path = %path.display(), "report written");
    Ok(())
}
