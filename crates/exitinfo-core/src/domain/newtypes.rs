//! Domain newtypes with validation
//!
//! Strongly-typed wrappers for values that cross the host boundary.
//! Each newtype ensures data validity at construction time.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::DomainError;

/// A validated host package identifier
///
/// The host scopes history queries by package name, and an empty or
/// whitespace-containing name would silently widen the query to a scope the
/// caller did not ask for. Validity is therefore enforced at construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PackageName(String);

impl PackageName {
    /// Creates a package name, rejecting empty or whitespace-containing input
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidPackageName("<empty>".to_string()));
        }
        if name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidPackageName(name));
        }
        Ok(Self(name))
    }

    /// Returns the package name as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PackageName {
    type Error = DomainError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        Self::new(name)
    }
}

impl From<PackageName> for String {
    fn from(name: PackageName) -> Self {
        name.0
    }
}

impl FromStr for PackageName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Display for PackageName {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_package_name() {
        let name = PackageName::new("com.example.app").unwrap();
        assert_eq!(name.as_str(), "com.example.app");
        assert_eq!(name.to_string(), "com.example.app");
    }

    #[test]
    fn test_empty_package_name_rejected() {
        assert!(matches!(
            PackageName::new(""),
            Err(DomainError::InvalidPackageName(_))
        ));
    }

    #[test]
    fn test_whitespace_package_name_rejected() {
        assert!(PackageName::new("com.example app").is_err());
        assert!(PackageName::new(" ").is_err());
        assert!(PackageName::new("com.example\tapp").is_err());
    }

    #[test]
    fn test_from_str() {
        let name: PackageName = "com.example.game".parse().unwrap();
        assert_eq!(name.as_str(), "com.example.game");

        let result: Result<PackageName, _> = "bad name".parse();
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let name = PackageName::new("com.example.app").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"com.example.app\"");

        let deserialized: PackageName = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, name);
    }

    #[test]
    fn test_invalid_deserialization_rejected() {
        let result: Result<PackageName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
