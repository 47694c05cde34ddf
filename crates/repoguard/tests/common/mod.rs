//! Shared test utilities for repoguard integration tests.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;

/// A throwaway repository layout in a temp dir.
pub struct TempRepo {
    dir: tempfile::TempDir,
}

impl TempRepo {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Write `docs/tasks.md`.
    pub fn with_tasks(self, contents: &str) -> Self {
        self.write("docs/tasks.md", contents);
        self
    }

    pub fn write(&self, rel: &str, contents: &str) -> PathBuf {
        let path = self.root().join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    /// Write a commit message file and return its path.
    pub fn commit_msg(&self, message: &str) -> PathBuf {
        self.write("COMMIT_EDITMSG", message)
    }

    /// A `repoguard` command pinned to this repository.
    pub fn cmd(&self) -> Command {
        let mut cmd = repoguard();
        cmd.current_dir(self.root()).arg("--repo-root").arg(self.root());
        cmd
    }
}

/// Build a bare `repoguard` command with a clean log environment.
pub fn repoguard() -> Command {
    let mut cmd: Command = cargo_bin_cmd!("repoguard");
    cmd.env_remove("RUST_LOG");
    cmd
}
