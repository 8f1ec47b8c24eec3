//! Configuration for check selection and runner behavior.
//!
//! A [`CheckConfig`] is an immutable snapshot built once per invocation:
//! file values (see [`loader`]), then `CHECKUP_*` environment overrides,
//! then CLI flags. It is passed by reference into every check and into
//! the selection and runner logic, and never mutated mid-run.

pub mod loader;

pub use loader::{load_config, validate_config, DEFAULT_CONFIG_LOCATIONS};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for health check execution.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckConfig {
    /// Run only these checks, overriding every other selection rule.
    pub specific_checks: Vec<String>,

    /// Optional checks to include in the run.
    pub include_optional: Vec<String>,

    /// Skip all optional checks, even ones listed in `include_optional`.
    pub skip_optional: bool,

    /// Retain long-form failure details and timing output.
    pub verbose: bool,

    /// Suppress interactive output (progress bars).
    pub non_interactive: bool,

    /// Keep running after a required check fails.
    pub continue_on_failure: bool,

    /// Write a JSON report of the run to this path.
    pub report_file: Option<PathBuf>,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            specific_checks: Vec::new(),
            include_optional: Vec::new(),
            skip_optional: false,
            verbose: false,
            non_interactive: false,
            continue_on_failure: true,
            report_file: None,
        }
    }
}

impl CheckConfig {
    /// Apply `CHECKUP_*` environment variable overrides.
    pub fn apply_env(&mut self) {
        self.apply_env_with(|key| std::env::var(key).ok());
    }

    /// Apply environment overrides from a custom lookup (for testing).
    pub fn apply_env_with(&mut self, get: impl Fn(&str) -> Option<String>) {
        if let Some(value) = get("CHECKUP_VERBOSE") {
            self.verbose = is_truthy(&value);
        }
        if let Some(value) = get("CHECKUP_NON_INTERACTIVE") {
            self.non_interactive = is_truthy(&value);
        }
        if let Some(value) = get("CHECKUP_SKIP_OPTIONAL") {
            self.skip_optional = is_truthy(&value);
        }
        if let Some(value) = get("CHECKUP_SPECIFIC_CHECKS") {
            self.specific_checks = split_list(&value);
        }
        if let Some(value) = get("CHECKUP_INCLUDE_OPTIONAL") {
            self.include_optional = split_list(&value);
        }
        if let Some(value) = get("CHECKUP_REPORT_FILE") {
            self.report_file = Some(PathBuf::from(value));
        }
    }
}

/// Parse a boolean environment value ("1", "true", "yes" are truthy).
fn is_truthy(value: &str) -> bool {
    matches!(value.to_lowercase().as_str(), "1" | "true" | "yes")
}

/// Split a comma-separated list, trimming whitespace and dropping empties.
fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
