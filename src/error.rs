//! Error types.
//!
//! One enum per concern, all folded into [`Error`] so callers can match on
//! the layer that failed.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),

    #[error("terminal error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors about a requested parameter.
#[derive(Error, Debug)]
pub enum ParameterError {
    #[error("parameter \"{0}\" not found")]
    NotFound(String),

    #[error("parameter key must not be empty")]
    EmptyKey,
}

/// Errors raised by a parameter store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store has no parameter under the requested name.
    #[error("parameter not found")]
    ParameterNotFound,

    /// Network, auth, throttling or validation failure reported by the store.
    #[error("{0}")]
    Request(String),

    #[error("failed to start async runtime: {0}")]
    Runtime(String),

    #[error("invalid response from parameter store: {0}")]
    InvalidResponse(String),
}

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Clipboard errors.
#[derive(Error, Debug)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("failed to write to clipboard: {0}")]
    Write(String),
}

pub type Result<T> = std::result::Result<T, Error>;
