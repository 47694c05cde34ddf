//! Repository root discovery and `repoguard.toml` resolution.
//!
//! Precedence for every setting: CLI flag, then config file, then built-in
//! default.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use repoguard_config::{CONFIG_FILE_NAME, CheckVersionArgs, GlobalArgs, TomlConfig};
use repoguard_taskid::{DEFAULT_PREFIXES, DEFAULT_TASKS_FILE, validate_prefixes};
use repoguard_version::{DEFAULT_INTERPRETER, DEFAULT_MINIMUM, DEFAULT_TOOL, Version};
use tracing::debug;

use crate::git;

#[derive(Debug, Clone)]
pub(crate) struct ResolvedConfig {
    pub(crate) repo_root: PathBuf,
    pub(crate) file: TomlConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct VersionSettings {
    pub(crate) tool: String,
    pub(crate) interpreter: String,
    pub(crate) minimum: Version,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct TaskSettings {
    /// Task list path as configured, used in messages.
    pub(crate) label: String,
    /// Task list path resolved against the repository root.
    pub(crate) path: PathBuf,
    pub(crate) prefixes: Vec<String>,
}

impl ResolvedConfig {
    pub(crate) fn load(global: &GlobalArgs) -> Result<Self> {
        let repo_root = resolve_repo_root(global)?;
        let file = match &global.config {
            Some(path) => TomlConfig::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?,
            None => discover(&repo_root)?,
        };
        debug!(repo_root = %repo_root.display(), "resolved repository root");
        Ok(Self { repo_root, file })
    }

    pub(crate) fn version_settings(&self, args: &CheckVersionArgs) -> VersionSettings {
        let cfg = &self.file.version;
        VersionSettings {
            tool: args
                .tool
                .clone()
                .or_else(|| cfg.tool.clone())
                .unwrap_or_else(|| DEFAULT_TOOL.to_string()),
            interpreter: args
                .interpreter
                .clone()
                .or_else(|| cfg.interpreter.clone())
                .unwrap_or_else(|| DEFAULT_INTERPRETER.to_string()),
            minimum: args.minimum.or(cfg.minimum).unwrap_or(DEFAULT_MINIMUM),
        }
    }

    pub(crate) fn task_settings(&self) -> Result<TaskSettings> {
        let cfg = &self.file.tasks;
        let label = cfg
            .file
            .clone()
            .unwrap_or_else(|| DEFAULT_TASKS_FILE.to_string());
        let prefixes = cfg
            .prefixes
            .clone()
            .unwrap_or_else(|| DEFAULT_PREFIXES.iter().map(|p| p.to_string()).collect());
        validate_prefixes(&prefixes).context("Invalid [tasks] prefixes in config")?;
        Ok(TaskSettings {
            path: self.repo_root.join(&label),
            label,
            prefixes,
        })
    }
}

fn resolve_repo_root(global: &GlobalArgs) -> Result<PathBuf> {
    if let Some(root) = &global.repo_root {
        return Ok(root.clone());
    }
    let cwd = std::env::current_dir().context("Failed to read current directory")?;
    Ok(git::repo_root(&cwd).unwrap_or(cwd))
}

fn discover(repo_root: &Path) -> Result<TomlConfig> {
    let path = repo_root.join(CONFIG_FILE_NAME);
    if !path.is_file() {
        return Ok(TomlConfig::default());
    }
    debug!(path = %path.display(), "loading config");
    TomlConfig::from_file(&path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}
