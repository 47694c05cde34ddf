//! # repoguard-config
//!
//! **Tier 2 (Configuration)**
//!
//! This crate defines the CLI arguments and the `repoguard.toml` schema.
//!
//! ## What belongs here
//! * Clap `Parser`, `Args`, `Subcommand` structs
//! * Configuration file struct definitions (Serde)
//! * Default values and enums
//!
//! ## What does NOT belong here
//! * Business logic
//! * I/O operations (except config file parsing)

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use repoguard_version::Version;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// File name looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = "repoguard.toml";

/// Small repository guards for commit hooks and CI.
#[derive(Parser, Debug)]
#[command(name = "repoguard", version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Repository root (default: git toplevel of the current directory).
    #[arg(long, global = true, value_name = "PATH")]
    pub repo_root: Option<PathBuf>,

    /// Config file (default: `repoguard.toml` at the repository root).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Verbose logging to stderr (repeat for more detail).
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Check that a runtime meets the minimum major.minor version.
    CheckVersion(CheckVersionArgs),

    /// Check that a commit message references a task ID from the task list.
    CommitMsg(CommitMsgArgs),

    /// Print a greeting.
    Hello(HelloArgs),

    /// Install a git `commit-msg` hook that runs `repoguard commit-msg`.
    InstallHook(InstallHookArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct CheckVersionArgs {
    /// Check this version instead of probing the interpreter (e.g. `3.12`).
    #[arg(long, value_name = "MAJOR.MINOR")]
    pub found: Option<Version>,

    /// Minimum required version.
    #[arg(long, value_name = "MAJOR.MINOR")]
    pub minimum: Option<Version>,

    /// Interpreter command to probe with `--version`.
    #[arg(long, value_name = "CMD")]
    pub interpreter: Option<String>,

    /// Tool name used in the diagnostic.
    #[arg(long, value_name = "NAME")]
    pub tool: Option<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone, Default)]
pub struct CommitMsgArgs {
    /// Path to the commit message file (git passes it as `$1`).
    #[arg(value_name = "COMMIT_MSG_FILE")]
    pub file: Option<PathBuf>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug, Clone)]
pub struct HelloArgs {
    /// Name to greet.
    pub name: String,
}

#[derive(Args, Debug, Clone, Default)]
pub struct InstallHookArgs {
    /// Overwrite an existing `commit-msg` hook.
    #[arg(long)]
    pub force: bool,

    /// Print the hook script to stdout instead of installing it.
    #[arg(long)]
    pub print: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// A single JSON object on stdout.
    Json,
}

// =============================================================================
// TOML Configuration File Structures
// =============================================================================

/// Errors from loading `repoguard.toml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Root TOML configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    /// Version gate settings.
    pub version: VersionConfig,

    /// Commit message guard settings.
    pub tasks: TasksConfig,
}

/// `[version]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionConfig {
    /// Tool name used in the diagnostic (default: "Python").
    pub tool: Option<String>,

    /// Interpreter command to probe (default: "python3").
    pub interpreter: Option<String>,

    /// Minimum required version (default: "3.13").
    pub minimum: Option<Version>,
}

/// `[tasks]` table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    /// Task list path relative to the repository root (default: "docs/tasks.md").
    pub file: Option<String>,

    /// Accepted task ID prefixes (default: ["T", "TX", "D", "Q"]).
    pub prefixes: Option<Vec<String>>,
}

impl TomlConfig {
    /// Load configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Load configuration from a file path.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&content)
    }
}
