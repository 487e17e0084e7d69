//! Constants used throughout ssm.
//!
//! Centralizes limits imposed by Parameter Store and UI timings.

use std::time::Duration;

/// Default number of parameters requested per describe page.
pub const DEFAULT_PAGE_SIZE: i32 = 10;

/// Largest page size that still fits one batched `GetParameters` call.
///
/// `GetParameters` accepts at most 10 names per request.
pub const MAX_PAGE_SIZE: i32 = 10;

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "SSM_CONFIG";

/// Config file path relative to the platform config directory.
pub const CONFIG_FILE: &str = "ssm/config.toml";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "SSM_LOG";

/// Title shown above the parameter list.
pub const APP_TITLE: &str = "AWS SSM";

/// How long copy/preview status messages stay visible.
pub const STATUS_MESSAGE_LIFETIME: Duration = Duration::from_secs(5);

/// Event loop poll interval; also drives the spinner.
pub const TICK_RATE: Duration = Duration::from_millis(100);
