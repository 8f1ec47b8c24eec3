//! Interactive terminal reporter.
//!
//! Shows a progress bar while checks run, prints failures and warnings
//! as they happen, and renders the summary table at the end. Verbose
//! mode prints every result with per-check timing.

use std::collections::HashMap;
use std::time::Instant;

use chrono::Local;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::check::{CheckResult, CheckStatus};
use crate::report::{render_summary, Reporter};
use crate::runner::RunResults;

/// Reporter for interactive terminal sessions.
pub struct TerminalReporter {
    verbose: bool,
    progress: Option<ProgressBar>,
    started_at: HashMap<String, Instant>,
    run_started_at: Option<Instant>,
}

impl TerminalReporter {
    /// Create a terminal reporter.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            progress: None,
            started_at: HashMap::new(),
            run_started_at: None,
        }
    }

    /// Print a line above the progress bar if one is active.
    fn println(&self, line: &str) {
        match &self.progress {
            Some(progress) => progress.println(line),
            None => println!("{}", line),
        }
    }

    fn print_result(&self, name: &str, result: &CheckResult) {
        let styled_message = match result.status {
            CheckStatus::Passed => style(result.message.as_str()).green(),
            CheckStatus::Failed => style(result.message.as_str()).red(),
            CheckStatus::Warning => style(result.message.as_str()).yellow(),
            _ => style(result.message.as_str()).dim(),
        };

        let mut line = format!(
            "{} {}: {}",
            result.status.symbol(),
            style(name).bold(),
            styled_message
        );

        if self.verbose {
            if let Some(started) = self.started_at.get(name) {
                line.push_str(&format!(" {}", style(format!("({:.2}s)", started.elapsed().as_secs_f64())).dim()));
            }
        }

        self.println(&line);

        if let Some(details) = &result.details {
            if self.verbose || result.status == CheckStatus::Failed {
                for detail_line in details.lines() {
                    self.println(&format!("    {}", style(detail_line).dim()));
                }
            }
        }

        if let Some(suggestion) = &result.suggestion {
            if matches!(result.status, CheckStatus::Failed | CheckStatus::Warning) {
                self.println(&format!("    {} {}", style("hint:").blue().bold(), suggestion));
            }
        }
    }
}

impl Reporter for TerminalReporter {
    fn show_header(&mut self) {
        println!(
            "{} {}",
            style("checkup").bold().blue(),
            style("· development environment health check").dim()
        );
        println!(
            "{}",
            style(format!("Started at {}", Local::now().format("%Y-%m-%d %H:%M:%S"))).dim()
        );
        println!();
    }

    fn run_started(&mut self, total: usize) {
        self.run_started_at = Some(Instant::now());

        if self.verbose {
            println!("{}", style(format!("Running {} health checks...", total)).dim());
        }

        let progress = ProgressBar::new(total as u64);
        progress.set_style(
            ProgressStyle::with_template("{spinner:.blue} {msg:40} {bar:30.blue} {pos}/{len}")
                .expect("static progress template"),
        );
        self.progress = Some(progress);
    }

    fn check_started(&mut self, name: &str, description: &str) {
        self.started_at.insert(name.to_string(), Instant::now());

        if let Some(progress) = &self.progress {
            progress.set_message(format!("Checking: {}", description));
        }
    }

    fn check_completed(&mut self, name: &str, result: &CheckResult) {
        if let Some(progress) = &self.progress {
            progress.inc(1);
        }

        // Failures and warnings always surface immediately; passing
        // checks only in verbose mode.
        if self.verbose || matches!(result.status, CheckStatus::Failed | CheckStatus::Warning) {
            self.print_result(name, result);
        }
    }

    fn run_finished(&mut self) {
        if let Some(progress) = self.progress.take() {
            progress.finish_and_clear();
        }
    }

    fn show_summary(&mut self, overall_success: bool, results: &RunResults) {
        let elapsed = self.run_started_at.map(|started| started.elapsed());
        print!("{}", render_summary(results, overall_success, elapsed));
    }

    fn warning(&mut self, message: &str) {
        self.println(&format!("{} {}", style("warning:").yellow().bold(), message));
    }

    fn error(&mut self, message: &str) {
        self.println(&format!("{} {}", style("error:").red().bold(), message));
    }
}
