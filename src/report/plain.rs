//! Plain line-based reporter for CI/headless environments.
//!
//! No progress bar: log-based environments turn redraws into noise.
//! Every completed check prints one line; the summary table is kept
//! since CI logs are where failures get read.

use std::time::Instant;

use crate::check::{CheckResult, CheckStatus};
use crate::report::{render_summary, Reporter};
use crate::runner::RunResults;

/// Reporter for non-interactive output.
pub struct PlainReporter {
    verbose: bool,
    completed: usize,
    total: usize,
    run_started_at: Option<Instant>,
}

impl PlainReporter {
    /// Create a plain reporter.
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            completed: 0,
            total: 0,
            run_started_at: None,
        }
    }
}

impl Reporter for PlainReporter {
    fn show_header(&mut self) {
        println!("checkup - development environment health check");
        println!();
    }

    fn run_started(&mut self, total: usize) {
        self.total = total;
        self.completed = 0;
        self.run_started_at = Some(Instant::now());
        println!("Running {} health checks...", total);
    }

    fn check_started(&mut self, name: &str, _description: &str) {
        if self.verbose {
            println!("• Checking {}...", name);
        }
    }

    fn check_completed(&mut self, name: &str, result: &CheckResult) {
        self.completed += 1;
        println!(
            "[{}/{}] {} {}: {}",
            self.completed,
            self.total,
            result.status.symbol(),
            name,
            result.message
        );

        if let Some(details) = &result.details {
            if self.verbose || result.status == CheckStatus::Failed {
                for line in details.lines() {
                    println!("    {}", line);
                }
            }
        }

        if let Some(suggestion) = &result.suggestion {
            if matches!(result.status, CheckStatus::Failed | CheckStatus::Warning) {
                println!("    hint: {}", suggestion);
            }
        }
    }

    fn run_finished(&mut self) {}

    fn show_summary(&mut self, overall_success: bool, results: &RunResults) {
        let elapsed = self.run_started_at.map(|started| started.elapsed());
        print!("{}", render_summary(results, overall_success, elapsed));
    }

    fn warning(&mut self, message: &str) {
        eprintln!("warning: {}", message);
    }

    fn error(&mut self, message: &str) {
        eprintln!("error: {}", message);
    }
}
