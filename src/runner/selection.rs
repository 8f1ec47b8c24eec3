//! Check selection policy.
//!
//! Maps configuration plus registry contents to the subset of checks to
//! execute. Rules are evaluated in order; the first that applies wins:
//!
//! 1. Non-empty `specific_checks` selects exactly those names,
//!    overriding everything including optionality.
//! 2. `skip_optional` drops every optional check.
//! 3. A non-empty `include_optional` opts optional checks in by name.
//! 4. Optional checks are otherwise never selected.
//! 5. Required checks always run.

use crate::check::HealthCheck;
use crate::config::CheckConfig;
use crate::registry::CheckRegistry;

/// Select the checks to run, preserving registry iteration order.
pub fn select_checks<'r>(
    registry: &'r CheckRegistry,
    config: &CheckConfig,
) -> Vec<&'r dyn HealthCheck> {
    let selected: Vec<_> = registry
        .iter()
        .filter(|check| should_run(*check, config))
        .collect();

    tracing::debug!(
        selected = selected.len(),
        registered = registry.len(),
        "selection complete"
    );

    selected
}

/// Decide whether a single check is selected under the configuration.
pub fn should_run(check: &dyn HealthCheck, config: &CheckConfig) -> bool {
    if !config.specific_checks.is_empty() {
        return config.specific_checks.iter().any(|n| n == check.name());
    }

    if check.optional() && config.skip_optional {
        return false;
    }

    if check.optional() && !config.include_optional.is_empty() {
        return config.include_optional.iter().any(|n| n == check.name());
    }

    !check.optional()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::CheckResult;
    use crate::error::Result;

    struct StubCheck {
        name: &'static str,
        optional: bool,
    }

    impl HealthCheck for StubCheck {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            "stub"
        }

        fn optional(&self) -> bool {
            self.optional
        }

        fn run(&self, _config: &CheckConfig) -> Result<CheckResult> {
            Ok(CheckResult::passed("ok"))
        }
    }

    fn registry() -> CheckRegistry {
        let mut registry = CheckRegistry::new();
        registry.register(
            Box::new(StubCheck {
                name: "git",
                optional: false,
            }),
            "tools",
        );
        registry.register(
            Box::new(StubCheck {
                name: "cmake",
                optional: false,
            }),
            "tools",
        );
        registry.register(
            Box::new(StubCheck {
                name: "ccache",
                optional: true,
            }),
            "tools",
        );
        registry.register(
            Box::new(StubCheck {
                name: "doxygen",
                optional: true,
            }),
            "tools",
        );
        registry
    }

    fn names(selected: &[&dyn HealthCheck]) -> Vec<String> {
        selected.iter().map(|c| c.name().to_string()).collect()
    }

    #[test]
    fn required_checks_selected_by_default() {
        let registry = registry();
        let selected = select_checks(&registry, &CheckConfig::default());
        assert_eq!(names(&selected), vec!["git", "cmake"]);
    }

    #[test]
    fn specific_checks_override_everything() {
        let registry = registry();
        let config = CheckConfig {
            specific_checks: vec!["git".into()],
            skip_optional: true,
            include_optional: vec!["doxygen".into()],
            ..Default::default()
        };

        let selected = select_checks(&registry, &config);
        assert_eq!(names(&selected), vec!["git"]);
    }

    #[test]
    fn specific_checks_can_pick_optional() {
        let registry = registry();
        let config = CheckConfig {
            specific_checks: vec!["ccache".into()],
            ..Default::default()
        };

        let selected = select_checks(&registry, &config);
        assert_eq!(names(&selected), vec!["ccache"]);
    }

    #[test]
    fn skip_optional_beats_include_optional() {
        let registry = registry();
        let config = CheckConfig {
            skip_optional: true,
            include_optional: vec!["doxygen".into()],
            ..Default::default()
        };

        let selected = select_checks(&registry, &config);
        assert_eq!(names(&selected), vec!["git", "cmake"]);
    }

    #[test]
    fn include_optional_selects_only_named_optionals() {
        let registry = registry();
        let config = CheckConfig {
            include_optional: vec!["doxygen".into()],
            ..Default::default()
        };

        let selected = select_checks(&registry, &config);
        assert_eq!(names(&selected), vec!["git", "cmake", "doxygen"]);
    }

    #[test]
    fn optional_checks_are_opt_in() {
        let registry = registry();
        let selected = select_checks(&registry, &CheckConfig::default());
        assert!(!names(&selected).contains(&"ccache".to_string()));
        assert!(!names(&selected).contains(&"doxygen".to_string()));
    }

    #[test]
    fn unknown_specific_name_selects_nothing() {
        let registry = registry();
        let config = CheckConfig {
            specific_checks: vec!["gti".into()],
            ..Default::default()
        };

        assert!(select_checks(&registry, &config).is_empty());
    }
}
