//! Recording reporter for tests.
//!
//! Captures every notification as a typed event so tests can assert on
//! ordering, counts, and payloads without touching stdout.

use crate::check::{CheckResult, CheckStatus};
use crate::report::Reporter;
use crate::runner::RunResults;

/// One recorded reporter notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReporterEvent {
    Header,
    RunStarted { total: usize },
    CheckStarted { name: String },
    CheckCompleted { name: String, status: CheckStatus },
    RunFinished,
    Summary { overall_success: bool, results: usize },
    Warning(String),
    Error(String),
}

/// Reporter that records events instead of printing.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    /// Every event in arrival order.
    pub events: Vec<ReporterEvent>,
}

impl RecordingReporter {
    /// Create an empty recording reporter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Names from `check_started` events, in order.
    pub fn started_names(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReporterEvent::CheckStarted { name } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Names from `check_completed` events, in order.
    pub fn completed_names(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReporterEvent::CheckCompleted { name, .. } => Some(name.clone()),
                _ => None,
            })
            .collect()
    }

    /// Recorded warning messages, in order.
    pub fn warnings(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReporterEvent::Warning(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }

    /// Recorded error messages, in order.
    pub fn errors(&self) -> Vec<String> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ReporterEvent::Error(msg) => Some(msg.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Reporter for RecordingReporter {
    fn show_header(&mut self) {
        self.events.push(ReporterEvent::Header);
    }

    fn run_started(&mut self, total: usize) {
        self.events.push(ReporterEvent::RunStarted { total });
    }

    fn check_started(&mut self, name: &str, _description: &str) {
        self.events.push(ReporterEvent::CheckStarted {
            name: name.to_string(),
        });
    }

    fn check_completed(&mut self, name: &str, result: &CheckResult) {
        self.events.push(ReporterEvent::CheckCompleted {
            name: name.to_string(),
            status: result.status,
        });
    }

    fn run_finished(&mut self) {
        self.events.push(ReporterEvent::RunFinished);
    }

    fn show_summary(&mut self, overall_success: bool, results: &RunResults) {
        self.events.push(ReporterEvent::Summary {
            overall_success,
            results: results.len(),
        });
    }

    fn warning(&mut self, message: &str) {
        self.events.push(ReporterEvent::Warning(message.to_string()));
    }

    fn error(&mut self, message: &str) {
        self.events.push(ReporterEvent::Error(message.to_string()));
    }
}
