//! Built-in check registration.

use crate::checks::{
    CMakeCheck, CcacheCheck, CppCompilerCheck, DoxygenCheck, GitCheck, PlatformCheck,
};
use crate::registry::CheckRegistry;

/// Build a registry populated with every built-in check.
///
/// Registration order is the default execution order for checks with no
/// dependency constraints.
pub fn builtin_registry() -> CheckRegistry {
    let mut registry = CheckRegistry::new();

    registry.register(Box::new(PlatformCheck::new()), "system");

    registry.register(Box::new(GitCheck::new()), "tools");
    registry.register(Box::new(CMakeCheck::new()), "tools");
    registry.register(Box::new(CppCompilerCheck::new()), "tools");
    registry.register(Box::new(DoxygenCheck::new()), "tools");
    registry.register(Box::new(CcacheCheck::new()), "tools");

    registry
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registers_all_builtin_checks() {
        let registry = builtin_registry();
        assert_eq!(registry.len(), 6);
        for name in ["platform", "git", "cmake", "cpp_compiler", "doxygen", "ccache"] {
            assert!(registry.get(name).is_some(), "missing {}", name);
        }
    }

    #[test]
    fn categories_are_system_then_tools() {
        let registry = builtin_registry();
        assert_eq!(registry.categories(), vec!["system", "tools"]);
        assert_eq!(registry.checks_in_category("system").len(), 1);
        assert_eq!(registry.checks_in_category("tools").len(), 5);
    }

    #[test]
    fn optional_checks_are_marked() {
        let registry = builtin_registry();
        assert!(registry.get("doxygen").unwrap().optional());
        assert!(registry.get("ccache").unwrap().optional());
        assert!(!registry.get("git").unwrap().optional());
    }

    #[test]
    fn compiler_check_declares_cmake_dependency() {
        let registry = builtin_registry();
        let compiler = registry.get("cpp_compiler").unwrap();
        assert_eq!(compiler.dependencies(), &["cmake".to_string()]);
    }
}
