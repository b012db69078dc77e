//! Domain error types

use thiserror::Error;

/// Errors that can occur in domain operations
///
/// Note that the query pipeline itself never surfaces these to callers:
/// classification is total and normalization degrades field-by-field.
/// Validation errors only arise when constructing domain values from
/// caller-supplied input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Package name is empty or contains whitespace
    #[error("Invalid package name: {0}")]
    InvalidPackageName(String),
}
