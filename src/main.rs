//! ssm - Browse and copy AWS SSM Parameter Store values.

use std::fs::File;
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ssm::cli::output;
use ssm::cli::{execute, Cli};
use ssm::core::constants::LOG_ENV;
use ssm::error::{ConfigError, Error, ParameterError};

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Parameter(ParameterError::NotFound(_)) => {
                Some("check the key; parameter names are case sensitive and start with / when hierarchical")
            }
            Error::Config(ConfigError::Parse { .. }) | Error::Config(ConfigError::ReadFile { .. }) => {
                Some("fix or remove the config file, or point SSM_CONFIG elsewhere")
            }
            Error::Config(ConfigError::InvalidValue { .. }) => Some("run: ssm --help"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

/// Install the tracing subscriber.
///
/// Single-key mode logs to stderr. The interactive list owns the terminal,
/// so there logs only go to `--log-file`, as JSON lines.
fn init_logging(cli: &Cli) {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("ssm=debug")
        } else {
            EnvFilter::new("ssm=warn")
        }
    });

    let file = cli.log_file.as_ref().and_then(|path| match File::create(path) {
        Ok(file) => Some(file),
        Err(e) => {
            output::warn(&format!(
                "cannot open log file {}: {}; file logging disabled",
                path.display(),
                e
            ));
            None
        }
    });

    let file_layer = file.map(|file| fmt::layer().json().with_writer(Mutex::new(file)));
    let stderr_layer = (!cli.is_interactive()).then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .without_time()
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stderr_layer)
        .init();
}
