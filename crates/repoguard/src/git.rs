//! Minimal git plumbing: repository root and hooks directory.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Create a `Command` for git with process-environment isolation.
///
/// Strips `GIT_DIR` and `GIT_WORK_TREE` so that inherited environment
/// variables cannot override the explicit `-C` path.
fn git_cmd() -> Command {
    let mut cmd = Command::new("git");
    cmd.env_remove("GIT_DIR").env_remove("GIT_WORK_TREE");
    cmd
}

fn rev_parse(path: &Path, args: &[&str]) -> Option<String> {
    let output = git_cmd()
        .arg("-C")
        .arg(path)
        .arg("rev-parse")
        .args(args)
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let out = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if out.is_empty() { None } else { Some(out) }
}

/// Top-level directory of the work tree containing `path`.
pub(crate) fn repo_root(path: &Path) -> Option<PathBuf> {
    rev_parse(path, &["--show-toplevel"]).map(PathBuf::from)
}

/// Directory git runs hooks from, honouring `core.hooksPath`.
pub(crate) fn hooks_dir(path: &Path) -> Option<PathBuf> {
    let hooks = PathBuf::from(rev_parse(path, &["--git-path", "hooks"])?);
    if hooks.is_absolute() {
        Some(hooks)
    } else {
        Some(path.join(hooks))
    }
}
