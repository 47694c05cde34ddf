//! # repoguard-version
//!
//! **Tier 1 (Version Gate)**
//!
//! Compares the `major.minor` version of a runtime against a required
//! minimum.
//!
//! ## What belongs here
//! * `major.minor` parsing (plain strings and interpreter banners)
//! * Interpreter probing (`<interpreter> --version`)
//! * Gate evaluation and the failure diagnostic
//!
//! ## What does NOT belong here
//! * CLI parsing or exit-code mapping (use `repoguard`)
//! * Config file loading (use `repoguard-config`)
//!
//! ## Example
//! ```
//! use repoguard_version::{Version, check_version};
//!
//! let check = check_version("Python", Version::new(3, 13), Version::new(3, 12));
//! assert!(!check.passed);
//! assert_eq!(check.diagnostic(), "Python 3.13+ required; found 3.12");
//! ```

mod gate;
mod probe;
mod version;

pub use gate::{VersionCheck, check_version};
pub use probe::probe_interpreter;
pub use version::{Version, VersionError};

/// Tool name used in diagnostics when nothing else is configured.
pub const DEFAULT_TOOL: &str = "Python";

/// Interpreter probed when nothing else is configured.
pub const DEFAULT_INTERPRETER: &str = "python3";

/// Minimum version required when nothing else is configured.
pub const DEFAULT_MINIMUM: Version = Version::new(3, 13);
