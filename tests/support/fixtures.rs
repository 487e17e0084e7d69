//! Test fixtures and constants.

use ssm::{MemoryStore, ParameterType};

/// Parameters with the key shapes seen in real stores.
pub const STANDARD_PARAMETERS: &[(&str, &str, ParameterType)] = &[
    ("/app/db/host", "db.internal", ParameterType::String),
    ("/app/db/password", "hunter2", ParameterType::SecureString),
    ("/app/feature.flags", "a,b,c", ParameterType::StringList),
    ("plain-key", "plain value", ParameterType::String),
    ("/app/v1.2/api.key", "sk-test-12345", ParameterType::SecureString),
];

/// Config file with every setting.
pub const FULL_CONFIG: &str = r#"
region = "eu-west-1"
profile = "staging"
endpoint_url = "http://localhost:4566"
page_size = 5
"#;

/// Store filled with `STANDARD_PARAMETERS`.
pub fn standard_store() -> MemoryStore {
    let store = MemoryStore::new();
    for (key, value, kind) in STANDARD_PARAMETERS {
        store.put(key, value, *kind);
    }
    store
}

/// Store with `count` plain parameters `foo{i}` = `bar{i}`.
pub fn numbered_store(count: usize) -> MemoryStore {
    let store = MemoryStore::new();
    for i in 0..count {
        store.put(&format!("foo{}", i), &format!("bar{}", i), ParameterType::String);
    }
    store
}

/// Expected `(key, value)` pairs for `numbered_store(count)`.
pub fn numbered_pairs(count: usize) -> Vec<(String, String)> {
    (0..count)
        .map(|i| (format!("foo{}", i), format!("bar{}", i)))
        .collect()
}
