//! The check runner.
//!
//! Drives execution of the selected, ordered checks one at a time,
//! aggregates results, enforces the continue/stop-on-failure policy,
//! and notifies a [`Reporter`] of lifecycle events. The runner owns all
//! mutable run state; checks and registry stay read-only throughout.

use crate::check::{CheckResult, CheckStatus};
use crate::config::CheckConfig;
use crate::registry::CheckRegistry;
use crate::report::Reporter;
use crate::runner::order::{resolve_order, ResolvedOrder};
use crate::runner::selection::select_checks;

/// Lifecycle state of a runner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Registry populated, no results yet.
    Idle,

    /// Per-check loop in progress.
    Running,

    /// Check list exhausted or execution halted early.
    Finished,
}

/// A structured, queryable event recorded during a run.
///
/// Diagnostics are non-fatal. They are also surfaced to the reporter as
/// text, but tests and integrators assert on these values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunDiagnostic {
    /// The order resolver hit a dependency cycle and fell back to
    /// appending the stuck checks unordered.
    DependencyCycle { stuck: Vec<String> },

    /// Selection produced no checks to run.
    NothingToRun,
}

/// Results of a run, insertion-ordered by execution order.
#[derive(Debug, Clone, Default)]
pub struct RunResults {
    entries: Vec<(String, CheckResult)>,
}

impl RunResults {
    /// Create an empty result set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a result, replacing in place any entry under the same name.
    pub fn insert(&mut self, name: &str, result: CheckResult) {
        match self.entries.iter_mut().find(|(n, _)| n == name) {
            Some((_, existing)) => *existing = result,
            None => self.entries.push((name.to_string(), result)),
        }
    }

    /// Look up a result by check name.
    pub fn get(&self, name: &str) -> Option<&CheckResult> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, result)| result)
    }

    /// Iterate results in execution order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &CheckResult)> {
        self.entries.iter().map(|(n, r)| (n.as_str(), r))
    }

    /// Number of stored results.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no results are stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count results with the given status.
    pub fn count_status(&self, status: CheckStatus) -> usize {
        self.entries.iter().filter(|(_, r)| r.status == status).count()
    }
}

/// Executes health checks and aggregates their results.
pub struct CheckRunner<'a> {
    registry: &'a CheckRegistry,
    config: &'a CheckConfig,
    results: RunResults,
    diagnostics: Vec<RunDiagnostic>,
    state: RunState,
}

impl<'a> CheckRunner<'a> {
    /// Create a runner over a populated registry.
    pub fn new(registry: &'a CheckRegistry, config: &'a CheckConfig) -> Self {
        Self {
            registry,
            config,
            results: RunResults::new(),
            diagnostics: Vec::new(),
            state: RunState::Idle,
        }
    }

    /// Run every selected check in dependency order.
    ///
    /// Returns the overall verdict: `true` unless a selected,
    /// non-optional check ended in `Failed`. Individual check failures
    /// are contained and recorded as results; only programming errors
    /// in the orchestration itself may panic out of here.
    pub fn run_all(&mut self, reporter: &mut dyn Reporter) -> bool {
        let selected = select_checks(self.registry, self.config);

        if selected.is_empty() {
            reporter.warning("No checks to run");
            self.diagnostics.push(RunDiagnostic::NothingToRun);
            self.state = RunState::Finished;
            return true;
        }

        let ResolvedOrder { ordered, stuck } = resolve_order(selected);

        if let Some(stuck) = stuck {
            reporter.error(&format!(
                "Dependency cycle detected among checks: {}",
                stuck.join(", ")
            ));
            self.diagnostics.push(RunDiagnostic::DependencyCycle { stuck });
        }

        self.state = RunState::Running;
        reporter.run_started(ordered.len());

        let mut overall_success = true;

        for check in ordered {
            reporter.check_started(check.name(), check.description());
            tracing::debug!(check = check.name(), "running");

            let result = match check.run(self.config) {
                Ok(result) => result,
                Err(err) => self.exception_result(&err),
            };

            let failed = result.status == CheckStatus::Failed;
            self.results.insert(check.name(), result.clone());
            reporter.check_completed(check.name(), &result);

            if failed && !check.optional() {
                overall_success = false;
                if !self.config.continue_on_failure {
                    tracing::debug!(check = check.name(), "stopping after required failure");
                    break;
                }
            }
        }

        reporter.run_finished();
        self.state = RunState::Finished;

        overall_success
    }

    /// Convert an escaping check failure into a stored result.
    fn exception_result(&self, err: &crate::error::CheckupError) -> CheckResult {
        let mut result = CheckResult::failed(format!("Check failed with exception: {}", err))
            .with_cause(err.to_string());
        if self.config.verbose {
            result = result.with_details(format!("{:?}", err));
        }
        result
    }

    /// Snapshot of the results so far.
    ///
    /// Safe to call mid-run; reflects only checks completed so far.
    pub fn results(&self) -> RunResults {
        self.results.clone()
    }

    /// Diagnostics recorded during the run.
    pub fn diagnostics(&self) -> &[RunDiagnostic] {
        &self.diagnostics
    }

    /// Current lifecycle state.
    pub fn state(&self) -> RunState {
        self.state
    }
}
