//! Execution order resolution.
//!
//! Orders the selected checks so that every check runs after its
//! selected dependencies. The sort is a repeated-pass readiness scan:
//! each pass appends, in input order, every remaining check whose
//! dependencies have all been placed. A pass that places nothing while
//! checks remain means a dependency cycle; the remainder is appended
//! as-is and the stuck set is returned so callers can surface it.
//! Execution proceeds either way: a misconfigured graph degrades to
//! "run everything anyway" instead of failing the run.
//!
//! A dependency naming a check outside the selected set is vacuously
//! satisfied. It was never scheduled, so there is nothing to wait for.

use std::collections::HashSet;

use crate::check::HealthCheck;

/// Outcome of ordering a selected set of checks.
pub struct ResolvedOrder<'a> {
    /// Every input check exactly once, dependencies first where possible.
    pub ordered: Vec<&'a dyn HealthCheck>,
    /// Names of the checks caught in a dependency cycle, if any.
    pub stuck: Option<Vec<String>>,
}

/// Resolve the execution order for the selected checks.
pub fn resolve_order(selected: Vec<&dyn HealthCheck>) -> ResolvedOrder<'_> {
    let selected_names: HashSet<&str> = selected.iter().map(|c| c.name()).collect();

    let mut ordered: Vec<&dyn HealthCheck> = Vec::with_capacity(selected.len());
    let mut placed: HashSet<&str> = HashSet::new();
    let mut remaining = selected;
    let mut stuck = None;

    while !remaining.is_empty() {
        let (ready, rest): (Vec<_>, Vec<_>) = remaining
            .into_iter()
            .partition(|check| is_ready(*check, &selected_names, &placed));

        if ready.is_empty() {
            let stuck_names: Vec<String> = rest.iter().map(|c| c.name().to_string()).collect();
            tracing::debug!(stuck = ?stuck_names, "dependency cycle, appending remainder unordered");
            stuck = Some(stuck_names);
            ordered.extend(rest);
            break;
        }

        for check in ready {
            placed.insert(check.name());
            ordered.push(check);
        }
        remaining = rest;
    }

    ResolvedOrder { ordered, stuck }
}

/// A check is ready once every selected dependency has been placed.
fn is_ready(check: &dyn HealthCheck, selected: &HashSet<&str>, placed: &HashSet<&str>) -> bool {
    check
        .dependencies()
        .iter()
        .filter(|dep| selected.contains(dep.as_str()))
        .all(|dep| placed.contains(dep.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckResult;
    use crate::config::CheckConfig;
    use crate::error::Result;

    struct StubCheck {
        name: &'static str,
        dependencies: Vec<String>,
    }

    impl StubCheck {
        fn new(name: &'static str, dependencies: &[&str]) -> Self {
            Self {
                name,
                dependencies: dependencies.iter().map(|s| s.to_string()).collect(),
            }
        }
    }

    impl HealthCheck for StubCheck {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "stub"
        }

        fn dependencies(&self) -> &[String] {
            &self.dependencies
        }

        fn run(&self, _config: &CheckConfig) -> Result<CheckResult> {
            Ok(CheckResult::passed("ok"))
        }
    }

    fn names(order: &ResolvedOrder<'_>) -> Vec<String> {
        order.ordered.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn empty_input_resolves_empty() {
        let resolved = resolve_order(Vec::new());
        assert!(resolved.ordered.is_empty());
        assert!(resolved.stuck.is_none());
    }

    #[test]
    fn independent_checks_keep_input_order() {
        let a = StubCheck::new("a", &[]);
        let b = StubCheck::new("b", &[]);
        let c = StubCheck::new("c", &[]);

        let resolved = resolve_order(vec![&a, &b, &c]);
        assert_eq!(names(&resolved), vec!["a", "b", "c"]);
        assert!(resolved.stuck.is_none());
    }

    #[test]
    fn dependency_runs_before_dependent() {
        let cmake = StubCheck::new("cmake", &[]);
        let compiler = StubCheck::new("cpp_compiler", &["cmake"]);

        // Dependent listed first on purpose.
        let resolved = resolve_order(vec![&compiler, &cmake]);
        let order = names(&resolved);

        let cmake_idx = order.iter().position(|n| n == "cmake").unwrap();
        let compiler_idx = order.iter().position(|n| n == "cpp_compiler").unwrap();
        assert!(cmake_idx < compiler_idx);
        assert!(resolved.stuck.is_none());
    }

    #[test]
    fn diamond_orders_correctly() {
        let a = StubCheck::new("a", &[]);
        let b = StubCheck::new("b", &["a"]);
        let c = StubCheck::new("c", &["a"]);
        let d = StubCheck::new("d", &["b", "c"]);

        let resolved = resolve_order(vec![&d, &c, &b, &a]);
        let order = names(&resolved);

        let pos = |n: &str| order.iter().position(|x| x == n).unwrap();
        assert!(pos("a") < pos("b"));
        assert!(pos("a") < pos("c"));
        assert!(pos("b") < pos("d"));
        assert!(pos("c") < pos("d"));
    }

    #[test]
    fn ready_checks_append_in_input_relative_order() {
        let a = StubCheck::new("a", &[]);
        let b = StubCheck::new("b", &[]);
        let c = StubCheck::new("c", &["a", "b"]);

        let resolved = resolve_order(vec![&b, &c, &a]);
        assert_eq!(names(&resolved), vec!["b", "a", "c"]);
    }

    #[test]
    fn cycle_still_outputs_every_check_once() {
        let a = StubCheck::new("a", &["b"]);
        let b = StubCheck::new("b", &["a"]);
        let c = StubCheck::new("c", &[]);

        let resolved = resolve_order(vec![&a, &b, &c]);
        let order = names(&resolved);

        assert_eq!(order.len(), 3);
        let mut sorted = order.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(sorted.len(), 3);
    }

    #[test]
    fn cycle_reports_only_stuck_checks() {
        let a = StubCheck::new("a", &["b"]);
        let b = StubCheck::new("b", &["a"]);
        let c = StubCheck::new("c", &[]);

        let resolved = resolve_order(vec![&a, &b, &c]);
        let stuck = resolved.stuck.unwrap();

        assert_eq!(stuck, vec!["a", "b"]);
    }

    #[test]
    fn self_dependency_is_a_cycle() {
        let a = StubCheck::new("a", &["a"]);

        let resolved = resolve_order(vec![&a]);
        assert_eq!(names(&resolved), vec!["a"]);
        assert_eq!(resolved.stuck.unwrap(), vec!["a"]);
    }

    #[test]
    fn dependency_on_unselected_check_is_vacuously_satisfied() {
        // "cmake" is registered somewhere but not selected here.
        let compiler = StubCheck::new("cpp_compiler", &["cmake"]);
        let git = StubCheck::new("git", &[]);

        let resolved = resolve_order(vec![&compiler, &git]);
        assert_eq!(names(&resolved), vec!["cpp_compiler", "git"]);
        assert!(resolved.stuck.is_none());
    }
}
