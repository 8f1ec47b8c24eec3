//! Run progress reporting.
//!
//! This module provides:
//! - [`Reporter`] trait, the observer seam the runner notifies
//! - [`TerminalReporter`] for interactive terminal usage
//! - [`PlainReporter`] for CI/headless environments
//! - [`NullReporter`] when no observer is attached
//! - [`RecordingReporter`](mock::RecordingReporter) for tests
//!
//! The runner works identically with any implementation; reporters only
//! read results and never influence execution.

pub mod mock;
pub mod plain;
pub mod summary;
pub mod terminal;

pub use plain::PlainReporter;
pub use summary::render_summary;
pub use terminal::TerminalReporter;

use crate::check::CheckResult;
use crate::runner::RunResults;

/// Observer for run lifecycle events.
pub trait Reporter {
    /// The application banner, before any checks run.
    fn show_header(&mut self);

    /// A run is starting with this many checks.
    fn run_started(&mut self, total: usize);

    /// A check is about to execute.
    fn check_started(&mut self, name: &str, description: &str);

    /// A check finished with the given result.
    fn check_completed(&mut self, name: &str, result: &CheckResult);

    /// The per-check loop is over.
    fn run_finished(&mut self);

    /// The final summary of a run.
    fn show_summary(&mut self, overall_success: bool, results: &RunResults);

    /// An ad hoc warning (nothing to run, config issues).
    fn warning(&mut self, message: &str);

    /// An ad hoc error (dependency cycle).
    fn error(&mut self, message: &str);
}

/// Reporter that drops every notification.
pub struct NullReporter;

impl Reporter for NullReporter {
    fn show_header(&mut self) {}
    fn run_started(&mut self, _total: usize) {}
    fn check_started(&mut self, _name: &str, _description: &str) {}
    fn check_completed(&mut self, _name: &str, _result: &CheckResult) {}
    fn run_finished(&mut self) {}
    fn show_summary(&mut self, _overall_success: bool, _results: &RunResults) {}
    fn warning(&mut self, _message: &str) {}
    fn error(&mut self, _message: &str) {}
}

/// Create a reporter appropriate for the execution environment.
///
/// Interactive terminals get the progress-bar reporter; everything else
/// gets plain line output. `quiet` silences reporting entirely.
pub fn create_reporter(interactive: bool, verbose: bool, quiet: bool) -> Box<dyn Reporter> {
    if quiet {
        Box::new(NullReporter)
    } else if interactive {
        Box::new(TerminalReporter::new(verbose))
    } else {
        Box::new(PlainReporter::new(verbose))
    }
}
