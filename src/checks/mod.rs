//! Built-in health checks.
//!
//! - [`system`] - platform and architecture detection
//! - [`tools`] - external development tools (git, cmake, compilers)

pub mod system;
pub mod tools;

pub use system::PlatformCheck;
pub use tools::{CMakeCheck, CcacheCheck, CppCompilerCheck, DoxygenCheck, GitCheck};
