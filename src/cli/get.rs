//! Single-key mode: print one decrypted value.

use std::io::Write;

use crate::core::service::ParameterService;
use crate::core::store::ParameterStore;
use crate::error::Result;

/// Fetch `key` and print its value to stdout.
pub fn execute<S: ParameterStore>(service: &ParameterService<S>, key: &str) -> Result<()> {
    let stdout = std::io::stdout();
    execute_to(service, key, &mut stdout.lock())
}

/// Fetch `key` and write its value, followed by a newline, to `out`.
///
/// Nothing is written when the fetch fails.
pub fn execute_to<S: ParameterStore>(
    service: &ParameterService<S>,
    key: &str,
    out: &mut impl Write,
) -> Result<()> {
    let value = service.get(key)?;
    writeln!(out, "{}", value)?;
    out.flush()?;
    Ok(())
}
