//! Terminal output helpers for the single-key mode.
//!
//! Everything goes to stderr so stdout carries nothing but the parameter value.
//! Color is dropped when `NO_COLOR` is set or stderr is not a terminal.

use console::style;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none()
}

/// Print an error message (red).
///
/// Example: `✗ parameter "/app/db" not found`
pub fn error(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("✗").red().for_stderr(), msg);
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Print a hint message (cyan).
///
/// Example: `→ check the key, parameter names are case sensitive`
pub fn hint(msg: &str) {
    if colors_enabled() {
        eprintln!(
            "{} {}",
            style("→").cyan().for_stderr(),
            style(msg).cyan().for_stderr()
        );
    } else {
        eprintln!("→ {}", msg);
    }
}

/// Print a warning message (yellow).
///
/// Example: `⚠ cannot open log file, logging disabled`
pub fn warn(msg: &str) {
    if colors_enabled() {
        eprintln!("{} {}", style("⚠").yellow().for_stderr(), msg);
    } else {
        eprintln!("⚠ {}", msg);
    }
}
