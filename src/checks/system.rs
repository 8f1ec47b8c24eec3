//! System-level health checks.

use crate::check::{CheckResult, HealthCheck};
use crate::config::CheckConfig;
use crate::error::Result;

/// Detects the operating system and architecture.
pub struct PlatformCheck;

impl PlatformCheck {
    /// Create the platform check.
    pub fn new() -> Self {
        Self
    }

    fn display_os(os: &str) -> &str {
        match os {
            "linux" => "Linux",
            "macos" => "macOS",
            "windows" => "Windows",
            other => other,
        }
    }
}

impl Default for PlatformCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for PlatformCheck {
    fn name(&self) -> &str {
        "platform"
    }

    fn description(&self) -> &str {
        "Detect operating system and architecture"
    }

    fn run(&self, _config: &CheckConfig) -> Result<CheckResult> {
        let os = std::env::consts::OS;
        let arch = std::env::consts::ARCH;

        if matches!(os, "linux" | "macos" | "windows") {
            let display = Self::display_os(os);
            Ok(CheckResult::passed(format!("{} {}", display, arch))
                .with_details(format!("OS: {}\nArchitecture: {}", display, arch)))
        } else {
            Ok(CheckResult::warning(format!("Unsupported platform: {}", os))
                .with_suggestion("This platform may not be fully supported"))
        }
    }
}
