//! Parameter access service.
//!
//! Fetches single values and enumerates the whole store. Every value is
//! requested with decryption; nothing is cached between calls.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::core::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};
use crate::core::domain::{Parameter, ParameterType};
use crate::core::store::{ParameterMetadata, ParameterStore};
use crate::error::{Error, ParameterError, Result, StoreError};

/// Read-only access to a parameter store.
#[derive(Debug)]
pub struct ParameterService<S> {
    store: S,
    page_size: i32,
}

impl<S: ParameterStore> ParameterService<S> {
    /// Create a service listing `DEFAULT_PAGE_SIZE` parameters per page.
    pub fn new(store: S) -> Self {
        Self {
            store,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Set the describe page size, clamped to `1..=MAX_PAGE_SIZE`.
    ///
    /// Every describe page feeds one batched get, which takes at most
    /// `MAX_PAGE_SIZE` names. `Config::validate` rejects out-of-range
    /// user-supplied values before they get here.
    pub fn with_page_size(mut self, page_size: i32) -> Self {
        let clamped = page_size.clamp(1, MAX_PAGE_SIZE);
        if clamped != page_size {
            warn!(requested = page_size, used = clamped, "page size out of range");
        }
        self.page_size = clamped;
        self
    }

    pub fn page_size(&self) -> i32 {
        self.page_size
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Fetch and decrypt a single parameter value.
    ///
    /// # Errors
    ///
    /// Returns `ParameterError::NotFound` carrying `key` if the store has no
    /// such parameter, `ParameterError::EmptyKey` for an empty key, and any
    /// other store error unchanged.
    pub fn get(&self, key: &str) -> Result<String> {
        if key.is_empty() {
            return Err(ParameterError::EmptyKey.into());
        }
        debug!(key, "fetching parameter");

        match self.store.get_parameter(key, true) {
            Ok(fetched) => Ok(fetched.value),
            Err(Error::Store(StoreError::ParameterNotFound)) => {
                Err(ParameterError::NotFound(key.to_string()).into())
            }
            Err(e) => Err(e),
        }
    }

    /// Enumerate every parameter with its decrypted value.
    ///
    /// Pages are described one at a time and each page's values are
    /// fetched with a single batched call. Parameters the batched call does
    /// not return are skipped.
    ///
    /// # Errors
    ///
    /// The first describe or batched-get failure aborts the listing and is
    /// returned as-is; no partial list is produced.
    pub fn list(&self) -> Result<Vec<Parameter>> {
        let mut parameters = Vec::new();
        let mut next_token: Option<String> = None;
        let mut page_number = 0usize;

        loop {
            let page = match self
                .store
                .describe_page(self.page_size, next_token.as_deref())
            {
                Ok(page) => page,
                Err(e) => {
                    debug!(page = page_number, error = %e, "describe failed, aborting list");
                    return Err(e);
                }
            };

            trace!(
                page = page_number,
                entries = page.entries.len(),
                last = page.next_token.is_none(),
                "described page"
            );

            parameters.extend(self.parameters_from_page(&page.entries)?);

            match page.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
            page_number += 1;
        }

        debug!(
            count = parameters.len(),
            pages = page_number + 1,
            "listed parameters"
        );
        Ok(parameters)
    }

    /// Fetch the values for one describe page and merge in its metadata.
    ///
    /// Output follows the order of the batched-get response.
    fn parameters_from_page(&self, entries: &[ParameterMetadata]) -> Result<Vec<Parameter>> {
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        let names: Vec<String> = entries.iter().map(|e| e.name.clone()).collect();
        let metadata: HashMap<&str, &ParameterMetadata> =
            entries.iter().map(|e| (e.name.as_str(), e)).collect();

        let values = self.store.get_parameters(&names, true)?;
        if values.len() < names.len() {
            debug!(
                requested = names.len(),
                returned = values.len(),
                "some parameters disappeared between describe and get"
            );
        }

        Ok(values
            .into_iter()
            .map(|fetched| {
                let meta = metadata.get(fetched.name.as_str());
                let description = meta
                    .and_then(|m| m.description.clone())
                    .unwrap_or_default();
                let kind = meta.map_or(fetched.kind, |m| merged_kind(m.kind, fetched.kind));
                let last_modified = fetched
                    .last_modified
                    .or_else(|| meta.and_then(|m| m.last_modified));

                Parameter {
                    key: fetched.name,
                    value: fetched.value,
                    description,
                    kind,
                    last_modified,
                }
            })
            .collect())
    }
}

/// The describe page is authoritative for the type, unless it could not
/// tell and the get response could.
fn merged_kind(described: ParameterType, fetched: ParameterType) -> ParameterType {
    if described == ParameterType::String {
        fetched
    } else {
        described
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryStore;

    fn service(store: MemoryStore) -> ParameterService<MemoryStore> {
        ParameterService::new(store)
    }

    #[test]
    fn test_get_returns_value() {
        let store = MemoryStore::new();
        store.put("/foo/bar/baz", "qux", ParameterType::SecureString);

        let svc = service(store);
        assert_eq!(svc.get("/foo/bar/baz").unwrap(), "qux");
    }

    #[test]
    fn test_get_missing_key_is_not_found() {
        let svc = service(MemoryStore::new());
        let err = svc.get("missing-key").unwrap_err();

        assert!(matches!(
            &err,
            Error::Parameter(ParameterError::NotFound(key)) if key == "missing-key"
        ));
        assert!(err.to_string().contains("missing-key"));
    }

    #[test]
    fn test_get_empty_key_makes_no_call() {
        let svc = service(MemoryStore::new());
        let err = svc.get("").unwrap_err();

        assert!(matches!(err, Error::Parameter(ParameterError::EmptyKey)));
        assert_eq!(svc.store().get_parameter_calls(), 0);
    }

    #[test]
    fn test_list_merges_descriptions() {
        let store = MemoryStore::new();
        store.put_described("/db/password", "hunter2", "Primary DB", ParameterType::SecureString);
        store.put("/db/host", "localhost", ParameterType::String);

        let params = service(store).list().unwrap();
        assert_eq!(params.len(), 2);

        let password = params.iter().find(|p| p.key == "/db/password").unwrap();
        assert_eq!(password.value, "hunter2");
        assert_eq!(password.description, "Primary DB");
        assert!(password.is_secure());
        assert!(password.last_modified.is_some());

        let host = params.iter().find(|p| p.key == "/db/host").unwrap();
        assert_eq!(host.description, "");
    }

    #[test]
    fn test_list_makes_two_calls_per_page() {
        let store = MemoryStore::new();
        for i in 0..23 {
            store.put(&format!("k{:02}", i), "v", ParameterType::String);
        }

        let svc = service(store);
        assert_eq!(svc.list().unwrap().len(), 23);
        assert_eq!(svc.store().describe_calls(), 3);
        assert_eq!(svc.store().get_parameters_calls(), 3);
        assert_eq!(svc.store().undecrypted_requests(), 0);
    }

    #[test]
    fn test_list_empty_store_skips_batched_get() {
        let svc = service(MemoryStore::new());
        assert!(svc.list().unwrap().is_empty());
        assert_eq!(svc.store().describe_calls(), 1);
        assert_eq!(svc.store().get_parameters_calls(), 0);
    }

    #[test]
    fn test_list_fails_fast_on_batched_get_error() {
        let store = MemoryStore::new();
        for i in 0..25 {
            store.put(&format!("k{:02}", i), "v", ParameterType::String);
        }
        store.fail_get_parameters_at(1);

        let svc = service(store);
        assert!(svc.list().is_err());
        // Nothing past the failing page is requested.
        assert_eq!(svc.store().describe_calls(), 2);
    }

    #[test]
    fn test_page_size_is_clamped_to_batch_limit() {
        assert_eq!(service(MemoryStore::new()).with_page_size(50).page_size(), MAX_PAGE_SIZE);
        assert_eq!(service(MemoryStore::new()).with_page_size(0).page_size(), 1);
        assert_eq!(service(MemoryStore::new()).with_page_size(7).page_size(), 7);
    }

    #[test]
    fn test_oversized_page_size_still_lists_everything() {
        let store = MemoryStore::new();
        for i in 0..25 {
            store.put(&format!("k{:02}", i), "v", ParameterType::String);
        }

        let svc = service(store).with_page_size(11);
        assert_eq!(svc.list().unwrap().len(), 25);
        assert_eq!(svc.store().get_parameters_calls(), 3);
    }

    #[test]
    fn test_merged_kind_prefers_described_type() {
        assert_eq!(
            merged_kind(ParameterType::SecureString, ParameterType::String),
            ParameterType::SecureString
        );
        assert_eq!(
            merged_kind(ParameterType::String, ParameterType::StringList),
            ParameterType::StringList
        );
    }
}
