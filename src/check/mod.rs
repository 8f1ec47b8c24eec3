//! The health check abstraction.
//!
//! A check is a single named, independently executable diagnostic unit:
//! given a configuration, it produces a [`CheckResult`]. Checks are
//! registered as trait objects in a [`CheckRegistry`](crate::registry::CheckRegistry)
//! and executed by the [`CheckRunner`](crate::runner::CheckRunner).

pub mod result;

pub use result::{CheckResult, CheckStatus};

use crate::config::CheckConfig;
use crate::error::Result;

/// A single health check.
///
/// Implementations read the configuration and the outside environment
/// (PATH lookups, subprocesses, files) but never mutate registry or
/// runner state. Well-behaved checks map predictable failures, such as
/// a missing tool, to a `Failed` result with a suggestion; returning
/// `Err` is reserved for unexpected faults, which the runner converts
/// to a synthetic failed result rather than aborting the run.
pub trait HealthCheck {
    /// Unique name, used as registry key and dependency reference.
    fn name(&self) -> &str;

    /// Human-readable description of what the check verifies.
    fn description(&self) -> &str;

    /// Whether the check is excluded from the default run.
    fn optional(&self) -> bool {
        false
    }

    /// Names of checks that must have already run before this one.
    ///
    /// A dependency is a precedence constraint, not a data dependency:
    /// the named check must have executed, successfully or not.
    fn dependencies(&self) -> &[String] {
        &[]
    }

    /// Execute the check against the given configuration.
    fn run(&self, config: &CheckConfig) -> Result<CheckResult>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct MinimalCheck;

    impl HealthCheck for MinimalCheck {
        fn name(&self) -> &str {
            "minimal"
        }

        fn description(&self) -> &str {
            "A check using every default"
        }

        fn run(&self, _config: &CheckConfig) -> Result<CheckResult> {
            Ok(CheckResult::passed("ok"))
        }
    }

    #[test]
    fn defaults_are_required_with_no_dependencies() {
        let check = MinimalCheck;
        assert!(!check.optional());
        assert!(check.dependencies().is_empty());
    }

    #[test]
    fn trait_objects_are_usable() {
        let check: Box<dyn HealthCheck> = Box::new(MinimalCheck);
        let result = check.run(&CheckConfig::default()).unwrap();
        assert_eq!(result.status, CheckStatus::Passed);
    }
}
