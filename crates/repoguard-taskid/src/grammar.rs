//! Task ID grammar: `[A-Z]+[0-9](\.[0-9]+)?`, word-bounded.

use std::sync::LazyLock;

use regex::Regex;

use crate::TaskIdError;

/// Prefixes accepted when no allow-list is configured.
pub const DEFAULT_PREFIXES: &[&str] = &["T", "TX", "D", "Q"];

static TASK_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?P<prefix>[A-Z]+)[0-9](?:\.[0-9]+)?\b").expect("valid regex literal")
});

/// Return the task ID on `line`, if any.
///
/// Only the first grammar match on the line is considered. If its letter
/// run does not start with one of `prefixes` the line yields nothing, even
/// when a later token would qualify. `TA1` and `TASK1` pass the `T` prefix.
pub fn extract_task_id<'a, S: AsRef<str>>(line: &'a str, prefixes: &[S]) -> Option<&'a str> {
    let caps = TASK_ID.captures(line)?;
    let prefix = caps.name("prefix")?.as_str();
    if prefixes.iter().any(|p| prefix.starts_with(p.as_ref())) {
        caps.get(0).map(|m| m.as_str())
    } else {
        None
    }
}

/// Check that every configured prefix is a non-empty run of `A-Z`.
pub fn validate_prefixes<S: AsRef<str>>(prefixes: &[S]) -> Result<(), TaskIdError> {
    if prefixes.is_empty() {
        return Err(TaskIdError::NoPrefixes);
    }
    for p in prefixes {
        let p = p.as_ref();
        if p.is_empty() || !p.bytes().all(|b| b.is_ascii_uppercase()) {
            return Err(TaskIdError::InvalidPrefix(p.to_string()));
        }
    }
    Ok(())
}
