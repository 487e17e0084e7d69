//! Parameter type.
//!
//! A read-only projection of one Parameter Store entry, rebuilt on every
//! list or get call.

use chrono::{DateTime, Utc};

use crate::core::types::{ParameterKey, ParameterValue};

/// Parameter Store value types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParameterType {
    #[default]
    String,
    StringList,
    SecureString,
}

impl ParameterType {
    /// Name used by the Parameter Store API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "String",
            Self::StringList => "StringList",
            Self::SecureString => "SecureString",
        }
    }

    /// Whether values of this type are stored encrypted.
    pub fn is_secure(&self) -> bool {
        matches!(self, Self::SecureString)
    }
}

impl std::fmt::Display for ParameterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parameter with its decrypted value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub key: ParameterKey,
    pub value: ParameterValue,
    /// Empty when the parameter has no description.
    pub description: String,
    pub kind: ParameterType,
    pub last_modified: Option<DateTime<Utc>>,
}

impl Parameter {
    /// Create a parameter with no description or modification time.
    pub fn new(
        key: impl Into<ParameterKey>,
        value: impl Into<ParameterValue>,
        kind: ParameterType,
    ) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
            description: String::new(),
            kind,
            last_modified: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_last_modified(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified = Some(at);
        self
    }

    pub fn is_secure(&self) -> bool {
        self.kind.is_secure()
    }
}

impl std::fmt::Display for Parameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key)
    }
}
