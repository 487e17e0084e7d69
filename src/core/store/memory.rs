//! In-memory parameter store.
//!
//! Behaves like Parameter Store for the calls ssm makes, including page
//! tokens, the batched-get limit and hidden `SecureString` values, and can
//! inject failures. Used by the test suites.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::{FetchedValue, MetadataPage, ParameterMetadata, ParameterStore};
use crate::core::constants::MAX_PAGE_SIZE;
use crate::core::domain::ParameterType;
use crate::error::{Result, StoreError};

/// Largest page a describe call may request.
const MAX_DESCRIBE_RESULTS: i32 = 50;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    description: Option<String>,
    kind: ParameterType,
    last_modified: DateTime<Utc>,
}

#[derive(Debug, Default)]
struct State {
    entries: BTreeMap<String, Entry>,
    /// Names that describe lists but batched gets leave out.
    vanished: BTreeSet<String>,
    /// Zero-based describe call that fails.
    fail_describe_at: Option<usize>,
    /// Zero-based batched-get call that fails.
    fail_get_many_at: Option<usize>,
    describe_calls: usize,
    get_calls: usize,
    get_many_calls: usize,
    undecrypted_requests: usize,
}

/// Parameter store held in memory.
///
/// Entries are enumerated in key order. Page tokens are the index of the
/// next entry.
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: Mutex<State>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a value, overwriting any existing entry.
    pub fn put(&self, name: &str, value: &str, kind: ParameterType) {
        self.put_entry(name, value, None, kind);
    }

    /// Store a value with a description, overwriting any existing entry.
    pub fn put_described(&self, name: &str, value: &str, description: &str, kind: ParameterType) {
        self.put_entry(name, value, Some(description.to_string()), kind);
    }

    fn put_entry(&self, name: &str, value: &str, description: Option<String>, kind: ParameterType) {
        self.lock().entries.insert(
            name.to_string(),
            Entry {
                value: value.to_string(),
                description,
                kind,
                last_modified: Utc::now(),
            },
        );
    }

    /// Remove a parameter. Returns `false` if it did not exist.
    pub fn delete(&self, name: &str) -> bool {
        self.lock().entries.remove(name).is_some()
    }

    /// Keep `name` in describe pages but leave it out of batched gets,
    /// as if it were deleted between the two calls.
    pub fn vanish_between_calls(&self, name: &str) {
        self.lock().vanished.insert(name.to_string());
    }

    /// Make the describe call with the given zero-based index fail.
    pub fn fail_describe_at(&self, call: usize) {
        self.lock().fail_describe_at = Some(call);
    }

    /// Make the batched-get call with the given zero-based index fail.
    pub fn fail_get_parameters_at(&self, call: usize) {
        self.lock().fail_get_many_at = Some(call);
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of describe calls made so far.
    pub fn describe_calls(&self) -> usize {
        self.lock().describe_calls
    }

    /// Number of single-get calls made so far.
    pub fn get_parameter_calls(&self) -> usize {
        self.lock().get_calls
    }

    /// Number of batched-get calls made so far.
    pub fn get_parameters_calls(&self) -> usize {
        self.lock().get_many_calls
    }

    /// Number of get calls (single or batched) made without decryption.
    pub fn undecrypted_requests(&self) -> usize {
        self.lock().undecrypted_requests
    }

    fn lock(&self) -> MutexGuard<'_, State> {
        // A panicking test thread must not take the store down with it.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Entry {
    fn fetched(&self, name: &str, with_decryption: bool) -> FetchedValue {
        let value = if self.kind.is_secure() && !with_decryption {
            encrypted_placeholder(&self.value)
        } else {
            self.value.clone()
        };
        FetchedValue {
            name: name.to_string(),
            value,
            kind: self.kind,
            last_modified: Some(self.last_modified),
        }
    }
}

/// Stand-in for the ciphertext returned when decryption is off.
fn encrypted_placeholder(value: &str) -> String {
    let hex: String = value.bytes().map(|b| format!("{:02x}", b)).collect();
    format!("encrypted:{}", hex)
}

impl ParameterStore for MemoryStore {
    fn describe_page(&self, max_results: i32, next_token: Option<&str>) -> Result<MetadataPage> {
        let mut state = self.lock();
        let call = state.describe_calls;
        state.describe_calls += 1;

        if state.fail_describe_at == Some(call) {
            return Err(StoreError::Request(format!(
                "injected describe failure on call {}",
                call
            ))
            .into());
        }
        if !(1..=MAX_DESCRIBE_RESULTS).contains(&max_results) {
            return Err(StoreError::Request(format!(
                "ValidationException: maxResults must be between 1 and {}, got {}",
                MAX_DESCRIBE_RESULTS, max_results
            ))
            .into());
        }

        let start = match next_token {
            None => 0,
            Some(token) => token.parse::<usize>().map_err(|_| {
                StoreError::Request(format!("InvalidNextToken: {}", token))
            })?,
        };
        let end = (start + max_results as usize).min(state.entries.len());

        let entries = state
            .entries
            .iter()
            .skip(start)
            .take(end.saturating_sub(start))
            .map(|(name, entry)| ParameterMetadata {
                name: name.clone(),
                description: entry.description.clone(),
                kind: entry.kind,
                last_modified: Some(entry.last_modified),
            })
            .collect();

        let next_token = (end < state.entries.len()).then(|| end.to_string());
        Ok(MetadataPage {
            entries,
            next_token,
        })
    }

    fn get_parameter(&self, name: &str, with_decryption: bool) -> Result<FetchedValue> {
        let mut state = self.lock();
        state.get_calls += 1;
        if !with_decryption {
            state.undecrypted_requests += 1;
        }

        let entry = state
            .entries
            .get(name)
            .ok_or(StoreError::ParameterNotFound)?;
        Ok(entry.fetched(name, with_decryption))
    }

    fn get_parameters(
        &self,
        names: &[String],
        with_decryption: bool,
    ) -> Result<Vec<FetchedValue>> {
        let mut state = self.lock();
        let call = state.get_many_calls;
        state.get_many_calls += 1;
        if !with_decryption {
            state.undecrypted_requests += 1;
        }

        if state.fail_get_many_at == Some(call) {
            return Err(StoreError::Request(format!(
                "injected get-parameters failure on call {}",
                call
            ))
            .into());
        }
        if names.is_empty() || names.len() > MAX_PAGE_SIZE as usize {
            return Err(StoreError::Request(format!(
                "ValidationException: names must contain 1 to {} entries, got {}",
                MAX_PAGE_SIZE,
                names.len()
            ))
            .into());
        }

        Ok(names
            .iter()
            .filter(|name| !state.vanished.contains(*name))
            .filter_map(|name| {
                state
                    .entries
                    .get(name)
                    .map(|entry| entry.fetched(name, with_decryption))
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn store_with(count: usize) -> MemoryStore {
        let store = MemoryStore::new();
        for i in 0..count {
            store.put(&format!("key{:02}", i), &format!("value{}", i), ParameterType::String);
        }
        store
    }

    #[test]
    fn test_describe_pages_in_key_order() {
        let store = store_with(5);

        let first = store.describe_page(2, None).unwrap();
        let names: Vec<_> = first.entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["key00", "key01"]);
        assert_eq!(first.next_token.as_deref(), Some("2"));

        let last = store.describe_page(4, Some("2")).unwrap();
        assert_eq!(last.entries.len(), 3);
        assert!(last.next_token.is_none());
    }

    #[test]
    fn test_describe_empty_store() {
        let store = MemoryStore::new();
        let page = store.describe_page(10, None).unwrap();
        assert!(page.entries.is_empty());
        assert!(page.next_token.is_none());
    }

    #[test]
    fn test_describe_rejects_bad_page_size() {
        let store = store_with(1);
        assert!(store.describe_page(0, None).is_err());
        assert!(store.describe_page(51, None).is_err());
    }

    #[test]
    fn test_describe_rejects_bad_token() {
        let store = store_with(1);
        assert!(store.describe_page(10, Some("not-a-token")).is_err());
    }

    #[test]
    fn test_get_parameter_not_found() {
        let store = MemoryStore::new();
        let err = store.get_parameter("missing", true).unwrap_err();
        assert!(matches!(err, Error::Store(StoreError::ParameterNotFound)));
    }

    #[test]
    fn test_secure_value_hidden_without_decryption() {
        let store = MemoryStore::new();
        store.put("token", "s3cr3t", ParameterType::SecureString);

        let hidden = store.get_parameter("token", false).unwrap();
        assert_ne!(hidden.value, "s3cr3t");
        assert_eq!(store.undecrypted_requests(), 1);

        let plain = store.get_parameter("token", true).unwrap();
        assert_eq!(plain.value, "s3cr3t");
    }

    #[test]
    fn test_get_parameters_skips_unknown_and_vanished() {
        let store = store_with(3);
        store.vanish_between_calls("key01");

        let names = vec!["key00".into(), "key01".into(), "nope".into(), "key02".into()];
        let values = store.get_parameters(&names, true).unwrap();
        let got: Vec<_> = values.iter().map(|v| v.name.as_str()).collect();
        assert_eq!(got, ["key00", "key02"]);
    }

    #[test]
    fn test_get_parameters_enforces_batch_limit() {
        let store = store_with(11);
        let names: Vec<String> = (0..11).map(|i| format!("key{:02}", i)).collect();
        assert!(store.get_parameters(&names, true).is_err());
        assert!(store.get_parameters(&[], true).is_err());
    }

    #[test]
    fn test_injected_failures_hit_the_right_call() {
        let store = store_with(4);
        store.fail_describe_at(1);

        assert!(store.describe_page(2, None).is_ok());
        assert!(store.describe_page(2, Some("2")).is_err());
        assert_eq!(store.describe_calls(), 2);
    }

    #[test]
    fn test_put_overwrites_and_delete() {
        let store = MemoryStore::new();
        store.put("a", "1", ParameterType::String);
        store.put("a", "2", ParameterType::String);
        assert_eq!(store.len(), 1);
        assert_eq!(store.get_parameter("a", true).unwrap().value, "2");

        assert!(store.delete("a"));
        assert!(!store.delete("a"));
        assert!(store.is_empty());
    }
}
