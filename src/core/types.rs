//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A parameter name (e.g., `/app/prod/db/password`).
///
/// Path-like names with a leading `/` are common but not required.
pub type ParameterKey = String;

/// A parameter value, already decrypted when the parameter is a `SecureString`.
pub type ParameterValue = String;

/// Opaque continuation token returned by a describe page.
pub type NextToken = String;
