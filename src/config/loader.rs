//! Configuration file discovery and loading.
//!
//! An explicit `--config` path must exist and parse. Without one, the
//! default locations are tried in order and the first readable file
//! wins; a file that fails to parse is skipped so a stale user-level
//! config cannot break project runs. No file at all means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::CheckConfig;
use crate::error::{CheckupError, Result};
use crate::registry::CheckRegistry;

/// Default config file locations, tried in order.
pub const DEFAULT_CONFIG_LOCATIONS: &[&str] = &[
    ".checkup.json",
    "~/.config/checkup/config.json",
    "~/.checkup.json",
];

/// Load configuration from an explicit path or the default locations.
pub fn load_config(explicit: Option<&Path>) -> Result<CheckConfig> {
    if let Some(path) = explicit {
        return load_file(path);
    }

    for location in DEFAULT_CONFIG_LOCATIONS {
        let path = expand_home(location);
        if path.exists() {
            match load_file(&path) {
                Ok(config) => {
                    tracing::debug!(path = %path.display(), "loaded config");
                    return Ok(config);
                }
                Err(err) => {
                    tracing::debug!(path = %path.display(), %err, "skipping unreadable config");
                    continue;
                }
            }
        }
    }

    Ok(CheckConfig::default())
}

fn load_file(path: &Path) -> Result<CheckConfig> {
    let contents = fs::read_to_string(path).map_err(|_| CheckupError::ConfigNotFound {
        path: path.to_path_buf(),
    })?;

    serde_json::from_str(&contents).map_err(|err| CheckupError::ConfigParseError {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}

/// Expand a leading `~/` using the HOME environment variable.
fn expand_home(location: &str) -> PathBuf {
    if let Some(rest) = location.strip_prefix("~/") {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(location)
}

/// Validate a configuration against the registry.
///
/// Returns human-readable issues. None of these are fatal: a name that
/// matches nothing simply selects nothing, but surfacing the typo here
/// beats a silently shorter run.
pub fn validate_config(config: &CheckConfig, registry: &CheckRegistry) -> Vec<String> {
    let mut issues = Vec::new();

    for name in &config.specific_checks {
        if registry.get(name).is_none() {
            issues.push(format!("--check '{}' does not match any registered check", name));
        }
    }

    for name in &config.include_optional {
        if registry.get(name).is_none() {
            issues.push(format!(
                "--include-optional '{}' does not match any registered check",
                name
            ));
        }
    }

    if let Some(report_file) = &config.report_file {
        if let Some(parent) = report_file.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                issues.push(format!(
                    "report directory {} does not exist",
                    parent.display()
                ));
            }
        }
    }

    issues
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::{CheckResult, HealthCheck};
    use crate::error::Result as CheckupResult;
    use tempfile::TempDir;

    struct NamedCheck(&'static str);

    impl HealthCheck for NamedCheck {
        fn name(&self) -> &str {
            self.0
        }

        fn description(&self) -> &str {
            "test check"
        }

        fn run(&self, _config: &CheckConfig) -> CheckupResult<CheckResult> {
            Ok(CheckResult::passed("ok"))
        }
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let result = load_config(Some(Path::new("/nonexistent/checkup.json")));
        assert!(matches!(result, Err(CheckupError::ConfigNotFound { .. })));
    }

    #[test]
    fn explicit_invalid_json_is_a_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.json");
        fs::write(&path, "{not json").unwrap();

        let result = load_config(Some(&path));
        assert!(matches!(result, Err(CheckupError::ConfigParseError { .. })));
    }

    #[test]
    fn explicit_valid_file_loads() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{"skip_optional": true}"#).unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.skip_optional);
    }

    #[test]
    fn expand_home_leaves_relative_paths() {
        assert_eq!(expand_home(".checkup.json"), PathBuf::from(".checkup.json"));
    }

    #[test]
    fn validate_flags_unknown_names() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(NamedCheck("git")), "tools");

        let config = CheckConfig {
            specific_checks: vec!["git".into(), "gti".into()],
            include_optional: vec!["doxygen".into()],
            ..Default::default()
        };

        let issues = validate_config(&config, &registry);
        assert_eq!(issues.len(), 2);
        assert!(issues[0].contains("gti"));
        assert!(issues[1].contains("doxygen"));
    }

    #[test]
    fn validate_accepts_known_names() {
        let mut registry = CheckRegistry::new();
        registry.register(Box::new(NamedCheck("git")), "tools");

        let config = CheckConfig {
            specific_checks: vec!["git".into()],
            ..Default::default()
        };

        assert!(validate_config(&config, &registry).is_empty());
    }

    #[test]
    fn validate_flags_missing_report_directory() {
        let registry = CheckRegistry::new();
        let config = CheckConfig {
            report_file: Some(PathBuf::from("/no/such/dir/report.json")),
            ..Default::default()
        };

        let issues = validate_config(&config, &registry);
        assert_eq!(issues.len(), 1);
        assert!(issues[0].contains("/no/such/dir"));
    }
}
