//! Gate evaluation.

use serde::Serialize;

use crate::Version;

/// Result of comparing a found version against the required minimum.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionCheck {
    pub tool: String,
    pub required: Version,
    pub found: Version,
    pub passed: bool,
}

impl VersionCheck {
    /// Human-readable failure line naming both versions.
    pub fn diagnostic(&self) -> String {
        format!(
            "{} {}+ required; found {}",
            self.tool, self.required, self.found
        )
    }
}

/// Pass iff `found >= required`.
pub fn check_version(tool: &str, required: Version, found: Version) -> VersionCheck {
    VersionCheck {
        tool: tool.to_string(),
        required,
        found,
        passed: found >= required,
    }
}
