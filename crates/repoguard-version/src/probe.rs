//! Interpreter probing.

use std::process::Command;

use tracing::debug;

use crate::{Version, VersionError};

/// Run `<interpreter> --version` and parse the reported `major.minor`.
///
/// `interpreter` is split on whitespace so launchers such as `py -3` work.
/// The banner is read from stdout, falling back to stderr, which is where
/// older Python releases print it.
pub fn probe_interpreter(interpreter: &str) -> Result<Version, VersionError> {
    let mut words = interpreter.split_whitespace();
    let program = words.next().ok_or(VersionError::EmptyInterpreter)?;

    let output = Command::new(program)
        .args(words)
        .arg("--version")
        .output()
        .map_err(|source| VersionError::ProbeFailed {
            interpreter: interpreter.to_string(),
            source,
        })?;

    if !output.status.success() {
        return Err(VersionError::ProbeExit {
            interpreter: interpreter.to_string(),
            status: output.status.to_string(),
        });
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    debug!(%interpreter, stdout = %stdout.trim(), stderr = %stderr.trim(), "probed interpreter");

    Version::from_banner(&stdout).or_else(|_| Version::from_banner(&stderr))
}
