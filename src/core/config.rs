//! Configuration management.
//!
//! Settings come from an optional TOML file and from command-line flags or
//! environment variables, which take precedence. The file lives at
//! `$SSM_CONFIG` when set, otherwise `<config dir>/ssm/config.toml`:
//!
//! ```toml
//! region = "eu-west-1"
//! profile = "staging"
//! endpoint_url = "http://localhost:4566"
//! page_size = 10
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Connection and listing settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// AWS region; the SDK default chain decides when unset
    pub region: Option<String>,
    /// Named profile from the shared AWS config files
    pub profile: Option<String>,
    /// Custom endpoint, e.g. LocalStack
    pub endpoint_url: Option<String>,
    /// Parameters per describe page
    pub page_size: Option<i32>,
}

impl Config {
    /// Location of the config file, if one can be determined.
    pub fn config_path() -> Option<PathBuf> {
        match std::env::var_os(constants::CONFIG_ENV) {
            Some(path) => Some(PathBuf::from(path)),
            None => dirs::config_dir().map(|dir| dir.join(constants::CONFIG_FILE)),
        }
    }

    /// Load the config file, falling back to defaults when it is absent.
    ///
    /// A path given through `SSM_CONFIG` must exist.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse` when the file
    /// cannot be read or is malformed.
    pub fn load() -> Result<Self> {
        let explicit = std::env::var_os(constants::CONFIG_ENV).is_some();
        match Self::config_path() {
            Some(path) if explicit || path.exists() => Self::load_from(&path),
            _ => {
                debug!("no config file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ReadFile` or `ConfigError::Parse`.
    pub fn load_from(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "loading config");

        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.display().to_string(),
            source,
        })?;
        let config: Self = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })?;

        debug!(?config, "config loaded");
        Ok(config)
    }

    /// Layer `overrides` on top of this config; set fields in `overrides` win.
    pub fn merge(self, overrides: Config) -> Config {
        Config {
            region: overrides.region.or(self.region),
            profile: overrides.profile.or(self.profile),
            endpoint_url: overrides.endpoint_url.or(self.endpoint_url),
            page_size: overrides.page_size.or(self.page_size),
        }
    }

    /// Effective page size.
    pub fn page_size(&self) -> i32 {
        self.page_size.unwrap_or(constants::DEFAULT_PAGE_SIZE)
    }

    /// Validate the merged configuration.
    ///
    /// Checks:
    /// - Page size fits a single batched get (1 to `MAX_PAGE_SIZE`)
    /// - Endpoint, when set, is an http(s) URL
    /// - Region and profile, when set, are not blank
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let page_size = self.page_size();
        if !(1..=constants::MAX_PAGE_SIZE).contains(&page_size) {
            return Err(ConfigError::InvalidValue {
                field: "page_size",
                reason: format!(
                    "must be between 1 and {}, got {}",
                    constants::MAX_PAGE_SIZE,
                    page_size
                ),
            }
            .into());
        }

        if let Some(endpoint) = &self.endpoint_url {
            if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
                return Err(ConfigError::InvalidValue {
                    field: "endpoint_url",
                    reason: format!("expected an http(s) URL, got {}", endpoint),
                }
                .into());
            }
        }

        for (field, value) in [("region", &self.region), ("profile", &self.profile)] {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }

        Ok(())
    }
}
