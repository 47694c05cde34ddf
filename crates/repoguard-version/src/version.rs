//! `major.minor` version type.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static BANNER_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)\.(\d+)").expect("valid regex literal"));

/// Errors from version parsing and interpreter probing.
#[derive(Debug, Error)]
pub enum VersionError {
    #[error("Invalid version '{0}': expected MAJOR.MINOR")]
    Invalid(String),

    #[error("No version number found in '{0}'")]
    NotFound(String),

    #[error("Failed to run interpreter '{interpreter}': {source}")]
    ProbeFailed {
        interpreter: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Interpreter '{interpreter}' exited with {status}")]
    ProbeExit { interpreter: String, status: String },

    #[error("Interpreter command is empty")]
    EmptyInterpreter,
}

/// A `major.minor` pair. Ordering is lexicographic, so `3.9 < 3.13`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Version {
    pub major: u32,
    pub minor: u32,
}

impl Version {
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }

    /// Parse `MAJOR.MINOR` or `MAJOR.MINOR.PATCH...`; anything past the minor
    /// component is ignored.
    pub fn parse(s: &str) -> Result<Self, VersionError> {
        let trimmed = s.trim();
        let mut parts = trimmed.split('.');
        let major = parts.next().and_then(|p| p.parse::<u32>().ok());
        let minor = parts.next().and_then(|p| p.parse::<u32>().ok());
        match (major, minor) {
            (Some(major), Some(minor)) => Ok(Self { major, minor }),
            _ => Err(VersionError::Invalid(trimmed.to_string())),
        }
    }

    /// Extract the first `N.N` occurrence from free text such as
    /// `Python 3.13.1`.
    pub fn from_banner(text: &str) -> Result<Self, VersionError> {
        let caps = BANNER_VERSION
            .captures(text)
            .ok_or_else(|| VersionError::NotFound(text.trim().to_string()))?;
        let major: u32 = caps[1]
            .parse()
            .map_err(|_| VersionError::Invalid(caps[0].to_string()))?;
        let minor: u32 = caps[2]
            .parse()
            .map_err(|_| VersionError::Invalid(caps[0].to_string()))?;
        Ok(Self { major, minor })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

impl FromStr for Version {
    type Err = VersionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Version {
    type Error = VersionError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Version> for String {
    fn from(v: Version) -> Self {
        v.to_string()
    }
}
