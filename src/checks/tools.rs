//! Development tool health checks.
//!
//! Each check probes one external tool by invoking it with captured
//! output and mapping the outcome to a verdict. A tool that is missing
//! from PATH is a predictable failure and becomes a `Failed` result
//! with an install hint, never an `Err`.

use std::fs;
use std::sync::OnceLock;

use regex::Regex;

use crate::check::{CheckResult, HealthCheck};
use crate::config::CheckConfig;
use crate::error::Result;
use crate::shell::{run_capture, run_capture_in};

/// Extract a dotted version from tool output.
///
/// Returns the major and minor components plus the full matched string,
/// e.g. `(2, 44, "2.44.1")` from "git version 2.44.1".
pub fn extract_version(text: &str) -> Option<(u32, u32, String)> {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    let re = VERSION_RE
        .get_or_init(|| Regex::new(r"(\d+)\.(\d+)(?:\.\d+)*").expect("static version pattern"));

    let captures = re.captures(text)?;
    let major = captures[1].parse().ok()?;
    let minor = captures[2].parse().ok()?;
    Some((major, minor, captures[0].to_string()))
}

/// Compare a (major, minor) version against a minimum.
fn at_least(version: (u32, u32), minimum: (u32, u32)) -> bool {
    version.0 > minimum.0 || (version.0 == minimum.0 && version.1 >= minimum.1)
}

/// Verifies Git is installed and recent enough for submodule work.
pub struct GitCheck;

impl GitCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GitCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for GitCheck {
    fn name(&self) -> &str {
        "git"
    }

    fn description(&self) -> &str {
        "Verify Git installation and version"
    }

    fn run(&self, _config: &CheckConfig) -> Result<CheckResult> {
        let output = match run_capture("git", &["--version"]) {
            Ok(output) if output.success => output,
            _ => {
                return Ok(CheckResult::failed("Git is not installed or not in PATH")
                    .with_suggestion("Install Git from https://git-scm.com/"))
            }
        };

        let version_line = output.first_line().to_string();

        match extract_version(&version_line) {
            Some((major, minor, version)) if at_least((major, minor), (2, 20)) => {
                Ok(CheckResult::passed(format!("Git {}", version)).with_details(version_line))
            }
            Some((_, _, version)) => Ok(CheckResult::warning(format!("Git {} is old", version))
                .with_suggestion(
                    "Consider upgrading to Git 2.20+ for better submodule support",
                )),
            None => Ok(CheckResult::passed("Git is installed").with_details(version_line)),
        }
    }
}

/// Verifies CMake is installed and new enough for C++20 projects.
pub struct CMakeCheck;

impl CMakeCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CMakeCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for CMakeCheck {
    fn name(&self) -> &str {
        "cmake"
    }

    fn description(&self) -> &str {
        "Verify CMake installation and version"
    }

    fn run(&self, _config: &CheckConfig) -> Result<CheckResult> {
        let output = match run_capture("cmake", &["--version"]) {
            Ok(output) if output.success => output,
            _ => {
                return Ok(CheckResult::failed("CMake is not installed or not in PATH")
                    .with_suggestion("Install CMake from https://cmake.org/download/"))
            }
        };

        let version_line = output.first_line().to_string();

        match extract_version(&version_line) {
            Some((major, minor, version)) if at_least((major, minor), (3, 20)) => {
                Ok(CheckResult::passed(format!("CMake {}", version)).with_details(version_line))
            }
            Some((_, _, version)) => {
                Ok(CheckResult::failed(format!("CMake {} is too old", version))
                    .with_suggestion("Upgrade to CMake 3.20+ for C++20 support"))
            }
            None => Ok(CheckResult::passed("CMake is installed").with_details(version_line)),
        }
    }
}

const SMOKE_CMAKELISTS: &str = "\
cmake_minimum_required(VERSION 3.20)
project(SmokeCpp20)
set(CMAKE_CXX_STANDARD 20)
set(CMAKE_CXX_STANDARD_REQUIRED ON)
add_executable(smoke_cpp20 main.cpp)
";

const SMOKE_MAIN: &str = "\
#include <iostream>
int main() {
    std::cout << \"cpp20 smoke test\" << std::endl;
    return 0;
}
";

/// Compiles a minimal C++20 program through CMake.
pub struct CppCompilerCheck {
    dependencies: Vec<String>,
}

impl CppCompilerCheck {
    pub fn new() -> Self {
        Self {
            dependencies: vec!["cmake".to_string()],
        }
    }
}

impl Default for CppCompilerCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for CppCompilerCheck {
    fn name(&self) -> &str {
        "cpp_compiler"
    }

    fn description(&self) -> &str {
        "Test C++20 compiler compatibility via CMake"
    }

    fn dependencies(&self) -> &[String] {
        &self.dependencies
    }

    fn run(&self, _config: &CheckConfig) -> Result<CheckResult> {
        let scratch = tempfile::TempDir::new()?;
        fs::write(scratch.path().join("CMakeLists.txt"), SMOKE_CMAKELISTS)?;
        fs::write(scratch.path().join("main.cpp"), SMOKE_MAIN)?;

        let Ok(configure) = run_capture_in(scratch.path(), "cmake", &["."]) else {
            return Ok(
                CheckResult::failed("CMake is not available to drive the compiler test")
                    .with_suggestion("Install CMake first, then re-run this check"),
            );
        };

        if !configure.success {
            return Ok(CheckResult::failed("No C++20 compatible compiler found")
                .with_suggestion(
                    "Install a C++20 compatible compiler (GCC 10+, Clang 10+, MSVC 2019+)",
                )
                .with_details(configure.stderr));
        }

        let build = run_capture_in(scratch.path(), "cmake", &["--build", "."])?;

        if !build.success {
            return Ok(CheckResult::failed("C++20 test program failed to build")
                .with_suggestion(
                    "Install a C++20 compatible compiler (GCC 10+, Clang 10+, MSVC 2019+)",
                )
                .with_details(build.stderr));
        }

        Ok(CheckResult::passed("C++20 compatible compiler detected")
            .with_details("Successfully compiled a C++20 test program via CMake"))
    }
}

/// Verifies the optional Doxygen documentation generator.
pub struct DoxygenCheck;

impl DoxygenCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DoxygenCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for DoxygenCheck {
    fn name(&self) -> &str {
        "doxygen"
    }

    fn description(&self) -> &str {
        "Verify Doxygen installation for API documentation builds"
    }

    fn optional(&self) -> bool {
        true
    }

    fn run(&self, _config: &CheckConfig) -> Result<CheckResult> {
        match run_capture("doxygen", &["--version"]) {
            Ok(output) if output.success => {
                let version_line = output.first_line().to_string();
                match extract_version(&version_line) {
                    Some((_, _, version)) => Ok(CheckResult::passed(format!("Doxygen {}", version))),
                    None => Ok(CheckResult::passed("Doxygen is installed")
                        .with_details(version_line)),
                }
            }
            _ => Ok(CheckResult::failed("Doxygen is not installed or not in PATH")
                .with_suggestion("Install Doxygen from https://www.doxygen.nl/download.html")),
        }
    }
}

/// Verifies the optional ccache compiler cache.
pub struct CcacheCheck;

impl CcacheCheck {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CcacheCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl HealthCheck for CcacheCheck {
    fn name(&self) -> &str {
        "ccache"
    }

    fn description(&self) -> &str {
        "Verify ccache installation for faster rebuilds"
    }

    fn optional(&self) -> bool {
        true
    }

    fn run(&self, _config: &CheckConfig) -> Result<CheckResult> {
        match run_capture("ccache", &["--version"]) {
            Ok(output) if output.success => {
                let version_line = output.first_line().to_string();
                match extract_version(&version_line) {
                    Some((_, _, version)) => Ok(CheckResult::passed(format!("ccache {}", version))),
                    None => Ok(CheckResult::passed("ccache is installed")
                        .with_details(version_line)),
                }
            }
            _ => Ok(CheckResult::failed("ccache is not installed or not in PATH")
                .with_suggestion("Install ccache from https://ccache.dev/")),
        }
    }
}
