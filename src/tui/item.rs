//! Text shown for each parameter in the list.

use chrono::{DateTime, Utc};

use crate::core::domain::Parameter;

/// Prefix marking encrypted parameters.
pub const SECURE_MARKER: &str = "🔒 ";

/// Item title: the key, marked when the value is encrypted.
pub fn title(param: &Parameter) -> String {
    if param.is_secure() {
        format!("{}{}", SECURE_MARKER, param.key)
    } else {
        param.key.clone()
    }
}

/// Relative modification time, e.g. `(Modified: 3 days ago)`.
///
/// Timestamps in the future, from clock skew, read as `now`.
pub fn last_edited(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(at).to_std().unwrap_or_default();
    let formatter = timeago::Formatter::new();
    format!("(Modified: {})", formatter.convert(elapsed))
}

/// Item subtitle parts: description and relative modification time.
pub fn subtitle(param: &Parameter, now: DateTime<Utc>) -> (String, Option<String>) {
    (
        param.description.clone(),
        param.last_modified.map(|at| last_edited(at, now)),
    )
}
