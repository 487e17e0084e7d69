//! Parameter store backends.
//!
//! Abstracts the three Parameter Store calls the service needs, with an
//! AWS SDK implementation and an in-memory one. The in-memory store, with
//! its failure injection, is only built for tests and the `test-support`
//! feature.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module
//!
//! ## Example
//!
//! ```ignore
//! struct Vault { /* ... */ }
//!
//! impl ParameterStore for Vault {
//!     fn describe_page(&self, max_results: i32, next_token: Option<&str>) -> Result<MetadataPage> {
//!         // List one page of secret names
//!     }
//!     fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<FetchedValue> {
//!         // Read one secret
//!     }
//!     fn get_parameters(&self, names: &[String], with_decryption: bool) -> Result<Vec<FetchedValue>> {
//!         // Read many secrets
//!     }
//! }
//! ```

use chrono::{DateTime, Utc};

use crate::core::domain::ParameterType;
use crate::core::types::{NextToken, ParameterKey, ParameterValue};
use crate::error::Result;

mod aws;
#[cfg(any(test, feature = "test-support"))]
mod memory;

pub use aws::AwsSsm;
#[cfg(any(test, feature = "test-support"))]
pub use memory::MemoryStore;

/// Name and metadata of a parameter, as returned by a describe call.
///
/// Never carries a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParameterMetadata {
    pub name: ParameterKey,
    pub description: Option<String>,
    pub kind: ParameterType,
    pub last_modified: Option<DateTime<Utc>>,
}

/// One page of a describe enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataPage {
    pub entries: Vec<ParameterMetadata>,
    /// `None` when this is the last page.
    pub next_token: Option<NextToken>,
}

/// A parameter value returned by a get call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedValue {
    pub name: ParameterKey,
    pub value: ParameterValue,
    pub kind: ParameterType,
    pub last_modified: Option<DateTime<Utc>>,
}

/// Parameter store trait.
///
/// Mirrors the `DescribeParameters`, `GetParameter` and `GetParameters`
/// calls of Parameter Store. Implementations must be shareable across
/// threads so the UI can list on a worker thread.
pub trait ParameterStore: Send + Sync {
    /// Fetch one page of parameter metadata.
    ///
    /// # Arguments
    ///
    /// * `max_results` - Upper bound on entries in the page
    /// * `next_token` - Token from the previous page, `None` for the first
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Request` if the call fails.
    fn describe_page(&self, max_results: i32, next_token: Option<&str>) -> Result<MetadataPage>;

    /// Fetch a single parameter.
    ///
    /// # Arguments
    ///
    /// * `name` - Parameter name
    /// * `with_decryption` - Decrypt `SecureString` values
    ///
    /// # Errors
    ///
    /// Returns `StoreError::ParameterNotFound` if no such parameter exists,
    /// or `StoreError::Request` for any other failure.
    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<FetchedValue>;

    /// Fetch several parameters in one call.
    ///
    /// Names the store does not know are left out of the result; this is
    /// not an error.
    ///
    /// # Arguments
    ///
    /// * `names` - Parameter names, at most `MAX_PAGE_SIZE`
    /// * `with_decryption` - Decrypt `SecureString` values
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Request` if the call fails.
    fn get_parameters(&self, names: &[String], with_decryption: bool)
        -> Result<Vec<FetchedValue>>;
}
