//! Configuration for exit-history queries
//!
//! A small, caller-owned value object. The embedding application constructs
//! one at initialization and injects it where queries are made; there is no
//! process-wide configuration state and no configuration file.

use serde::{Deserialize, Serialize};

use crate::domain::PackageName;

/// Query-scoping configuration owned by the caller
///
/// `package_name` is the default scope applied by unfiltered queries.
/// `None` defers to the host's own default scoping (commonly: the host
/// derives the package from the calling context).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExitInfoConfig {
    package_name: Option<PackageName>,
}

impl ExitInfoConfig {
    /// Creates a configuration with host-default scoping
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default package scope for unfiltered queries
    #[must_use]
    pub fn with_package_name(mut self, package_name: PackageName) -> Self {
        self.package_name = Some(package_name);
        self
    }

    /// Returns the configured package scope, if any
    pub fn package_name(&self) -> Option<&PackageName> {
        self.package_name.as_ref()
    }

    /// Replaces the configured package scope
    pub fn set_package_name(&mut self, package_name: Option<PackageName>) {
        self.package_name = package_name;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_scope() {
        let config = ExitInfoConfig::new();
        assert!(config.package_name().is_none());
    }

    #[test]
    fn test_with_package_name() {
        let config = ExitInfoConfig::new()
            .with_package_name(PackageName::new("com.example.app").unwrap());
        assert_eq!(config.package_name().unwrap().as_str(), "com.example.app");
    }

    #[test]
    fn test_set_package_name_replaces_scope() {
        let mut config = ExitInfoConfig::new()
            .with_package_name(PackageName::new("com.example.one").unwrap());

        config.set_package_name(Some(PackageName::new("com.example.two").unwrap()));
        assert_eq!(config.package_name().unwrap().as_str(), "com.example.two");

        config.set_package_name(None);
        assert!(config.package_name().is_none());
    }
}
