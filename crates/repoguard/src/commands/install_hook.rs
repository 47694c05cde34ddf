//! Handler for the `repoguard install-hook` command.

use anyhow::{Context, Result, bail};
use repoguard_config::{GlobalArgs, InstallHookArgs};
use tracing::warn;

use crate::GuardStatus;
use crate::git;

/// Program name used when the running executable cannot be located.
const FALLBACK_PROGRAM: &str = "repoguard";

/// Shell script installed as `.git/hooks/commit-msg`, invoking `program`.
///
/// Git runs hooks with whatever `PATH` the committing process has, so the
/// script names the binary by absolute path when one is known.
pub(crate) fn hook_script(program: &str) -> String {
    format!(
        "#!/bin/sh\n\
         # Installed by repoguard: commit messages must reference a task ID.\n\
         exec {} commit-msg \"$1\"\n",
        shell_quote(program)
    )
}

/// Single-quote `s` for POSIX sh.
fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

fn current_program() -> String {
    match std::env::current_exe() {
        Ok(path) => path.display().to_string(),
        Err(err) => {
            warn!(%err, "could not locate the running executable; hook relies on PATH");
            FALLBACK_PROGRAM.to_string()
        }
    }
}

pub(crate) fn handle(args: InstallHookArgs, global: &GlobalArgs) -> Result<GuardStatus> {
    let script = hook_script(&current_program());

    if args.print {
        print!("{script}");
        return Ok(GuardStatus::Pass);
    }

    let start = match &global.repo_root {
        Some(root) => root.clone(),
        None => std::env::current_dir().context("Failed to read current directory")?,
    };
    let Some(hooks_dir) = git::hooks_dir(&start) else {
        bail!("Not inside a git repository: {}", start.display());
    };

    let hook = hooks_dir.join("commit-msg");
    if hook.exists() && !args.force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            hook.display()
        );
    }

    std::fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("Failed to create {}", hooks_dir.display()))?;
    std::fs::write(&hook, &script)
        .with_context(|| format!("Failed to write {}", hook.display()))?;
    make_executable(&hook)?;

    eprintln!("Installed {}", hook.display());
    Ok(GuardStatus::Pass)
}

#[cfg(unix)]
fn make_executable(path: &std::path::Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = std::fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(path, perms)
        .with_context(|| format!("Failed to make {} executable", path.display()))
}

#[cfg(not(unix))]
fn make_executable(_path: &std::path::Path) -> Result<()> {
    Ok(())
}
