//! Check registry.
//!
//! Holds every known check keyed by unique name, grouped by category.
//! Registries are built once at startup and read-only afterwards: there
//! is no removal operation, and re-registering a name silently replaces
//! the previous check.

pub mod builtin;

pub use builtin::builtin_registry;

use std::collections::HashMap;

use crate::check::HealthCheck;

/// Default category for checks registered without one.
pub const DEFAULT_CATEGORY: &str = "general";

/// Registry of health checks.
///
/// Iteration follows first-registration order, so selection and the
/// downstream execution order are deterministic.
#[derive(Default)]
pub struct CheckRegistry {
    checks: HashMap<String, Box<dyn HealthCheck>>,
    /// Names in first-registration order. A replaced name keeps its slot.
    order: Vec<String>,
    categories: HashMap<String, Vec<String>>,
    category_order: Vec<String>,
    /// Category of the most recent registration per name.
    category_by_name: HashMap<String, String>,
}

impl CheckRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a check under a category.
    ///
    /// Re-registering a name replaces the stored check but does not
    /// remove the name from a previously assigned category list, so
    /// that list may carry a stale duplicate. Known quirk, kept for
    /// compatibility with existing category listings.
    pub fn register(&mut self, check: Box<dyn HealthCheck>, category: &str) {
        let name = check.name().to_string();

        if !self.checks.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.checks.insert(name.clone(), check);

        if !self.categories.contains_key(category) {
            self.category_order.push(category.to_string());
        }
        self.categories
            .entry(category.to_string())
            .or_default()
            .push(name.clone());
        self.category_by_name.insert(name, category.to_string());
    }

    /// Register a check under the default category.
    pub fn register_default(&mut self, check: Box<dyn HealthCheck>) {
        self.register(check, DEFAULT_CATEGORY);
    }

    /// Look up a check by name.
    pub fn get(&self, name: &str) -> Option<&dyn HealthCheck> {
        self.checks.get(name).map(|c| c.as_ref())
    }

    /// All checks in a category, in registration order.
    ///
    /// Unknown categories yield an empty list.
    pub fn checks_in_category(&self, category: &str) -> Vec<&dyn HealthCheck> {
        match self.categories.get(category) {
            Some(names) => names
                .iter()
                .filter_map(|name| self.get(name))
                .collect(),
            None => Vec::new(),
        }
    }

    /// Find the category a check name was most recently registered under.
    pub fn category_of(&self, name: &str) -> Option<&str> {
        self.category_by_name.get(name).map(|s| s.as_str())
    }

    /// Iterate over all checks in first-registration order.
    ///
    /// Shared references only: callers can read but never mutate a
    /// registered check, which is the defensive-copy guarantee.
    pub fn iter(&self) -> impl Iterator<Item = &dyn HealthCheck> {
        self.order.iter().filter_map(|name| self.get(name))
    }

    /// Category names in first-registration order.
    pub fn categories(&self) -> Vec<String> {
        self.category_order.clone()
    }

    /// Number of registered checks.
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}

impl std::fmt::Debug for CheckRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CheckRegistry")
            .field("checks", &self.order)
            .field("categories", &self.category_order)
            .finish()
    }
}
