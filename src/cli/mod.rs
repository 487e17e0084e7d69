//! Command-line interface.

pub mod get;
pub mod output;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing::debug;

use crate::core::config::Config;
use crate::core::constants::MAX_PAGE_SIZE;
use crate::core::service::ParameterService;
use crate::core::store::AwsSsm;
use crate::error::Result;
use crate::tui::{self, KeyMap, Theme};

/// ssm - Browse and copy AWS SSM Parameter Store values.
#[derive(Parser, Debug)]
#[command(
    name = "ssm",
    about = "Browse and copy AWS SSM Parameter Store values",
    long_about = "Browse and copy AWS SSM Parameter Store values.\n\n\
        With KEY, prints that parameter's decrypted value and exits.\n\
        Without it, opens an interactive list of every parameter.",
    version
)]
pub struct Cli {
    /// Parameter to print (e.g. /app/db/password); omit to browse
    pub key: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// AWS region
    #[arg(long, env = "SSM_REGION")]
    pub region: Option<String>,

    /// AWS profile from the shared config files
    #[arg(long, env = "SSM_PROFILE")]
    pub profile: Option<String>,

    /// Custom endpoint (e.g. http://localhost:4566 for LocalStack)
    #[arg(long, env = "SSM_ENDPOINT_URL")]
    pub endpoint_url: Option<String>,

    /// Parameters fetched per request (1-10)
    #[arg(
        long,
        env = "SSM_PAGE_SIZE",
        value_parser = clap::value_parser!(i32).range(1..=i64::from(MAX_PAGE_SIZE))
    )]
    pub page_size: Option<i32>,

    /// Write logs to this file (the only log output while browsing)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Settings given as flags or environment variables.
    pub fn overrides(&self) -> Config {
        Config {
            region: self.region.clone(),
            profile: self.profile.clone(),
            endpoint_url: self.endpoint_url.clone(),
            page_size: self.page_size,
        }
    }

    /// Whether this invocation opens the interactive list.
    pub fn is_interactive(&self) -> bool {
        self.key.is_none()
    }
}

/// Execute the parsed command line.
///
/// # Errors
///
/// Returns configuration errors, and in single-key mode the fetch error.
pub fn execute(cli: Cli) -> Result<()> {
    let config = Config::load()?.merge(cli.overrides());
    config.validate()?;
    debug!(?config, "effective config");

    let store = AwsSsm::connect(&config)?;
    let service = ParameterService::new(store).with_page_size(config.page_size());

    match cli.key {
        Some(key) => get::execute(&service, &key),
        None => tui::run(Arc::new(service), Theme::default(), KeyMap::default()),
    }
}
