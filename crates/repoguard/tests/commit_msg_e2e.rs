//! End-to-end tests for the `repoguard commit-msg` command.

mod common;

use common::TempRepo;
use predicates::prelude::*;

// ── 1. Matching task ID → pass ───────────────────────────────────────

#[test]
fn commit_msg_with_task_id_passes() {
    let repo = TempRepo::new().with_tasks("T1: Do X\n");
    let msg = repo.commit_msg("fix T1\n");

    repo.cmd()
        .arg("commit-msg")
        .arg(&msg)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

// ── 2. No task ID → fail listing valid IDs ───────────────────────────

#[test]
fn commit_msg_without_task_id_fails() {
    let repo = TempRepo::new().with_tasks("T1\n");
    let msg = repo.commit_msg("unrelated change\n");

    repo.cmd()
        .arg("commit-msg")
        .arg(&msg)
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "[GUARD] Commit message must reference a task id from docs/tasks.md",
        ))
        .stderr(predicate::str::contains("[GUARD] Valid IDs: T1"));
}

#[test]
fn valid_ids_are_listed_sorted() {
    let repo = TempRepo::new().with_tasks("T2 b\nD0 a\nTX1 c\n");
    let msg = repo.commit_msg("nothing\n");

    repo.cmd()
        .arg("commit-msg")
        .arg(&msg)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Valid IDs: D0 T2 TX1"));
}

#[test]
fn ids_extending_an_allowed_prefix_are_enforced() {
    let repo = TempRepo::new().with_tasks("TASK1 ship it\nDX3 design\n");
    let msg = repo.commit_msg("unrelated change\n");

    repo.cmd()
        .arg("commit-msg")
        .arg(&msg)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Valid IDs: DX3 TASK1"));

    let ok = repo.commit_msg("ship TASK1\n");
    repo.cmd().arg("commit-msg").arg(&ok).assert().success();
}

// ── 3. Permissive fallback ───────────────────────────────────────────

#[test]
fn missing_task_list_skips_enforcement() {
    let repo = TempRepo::new();
    let msg = repo.commit_msg("anything goes\n");

    repo.cmd()
        .arg("commit-msg")
        .arg(&msg)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[guard] docs/tasks.md not found or empty; skipping Task ID enforcement.",
        ));
}

#[test]
fn task_list_without_ids_skips_enforcement() {
    let repo = TempRepo::new().with_tasks("# Tasks\n\nNothing planned yet.\n");
    let msg = repo.commit_msg("anything goes\n");

    repo.cmd()
        .arg("commit-msg")
        .arg(&msg)
        .assert()
        .success()
        .stdout(predicate::str::contains("skipping Task ID enforcement"));
}

// ── 4. Longest-first matching ────────────────────────────────────────

#[test]
fn longer_id_is_reported_as_match() {
    let repo = TempRepo::new().with_tasks("T1\nT1.2\n");
    let msg = repo.commit_msg("T1.2 fix\n");

    let output = repo
        .cmd()
        .arg("commit-msg")
        .arg(&msg)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], true);
    assert_eq!(json["outcome"], "matched");
    assert_eq!(json["id"], "T1.2");
    assert_eq!(json["tasks_file"], "docs/tasks.md");
}

// ── 5. JSON output on failure ────────────────────────────────────────

#[test]
fn json_failure_lists_valid_ids() {
    let repo = TempRepo::new().with_tasks("T1\nQ1.3\n");
    let msg = repo.commit_msg("wip\n");

    let output = repo
        .cmd()
        .arg("commit-msg")
        .arg(&msg)
        .arg("--format")
        .arg("json")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["passed"], false);
    assert_eq!(json["outcome"], "missing");
    assert_eq!(json["valid_ids"], serde_json::json!(["Q1.3", "T1"]));
}

#[test]
fn json_skip_has_reason() {
    let repo = TempRepo::new();
    let msg = repo.commit_msg("wip\n");

    let output = repo
        .cmd()
        .args(["commit-msg", "--format", "json"])
        .arg(&msg)
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "skipped");
    assert_eq!(json["reason"], "document_missing");
}

// ── 6. Usage and I/O errors ──────────────────────────────────────────

#[test]
fn missing_argument_is_usage_error() {
    let repo = TempRepo::new().with_tasks("T1\n");

    repo.cmd()
        .arg("commit-msg")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Usage: repoguard commit-msg <COMMIT_MSG_FILE>",
        ));
}

#[test]
fn missing_argument_is_usage_error_even_with_broken_config() {
    let repo = TempRepo::new().with_tasks("T1\n");
    repo.write("repoguard.toml", "[tasks\nprefixes = ");

    repo.cmd()
        .arg("commit-msg")
        .assert()
        .code(1)
        .stderr(predicate::str::contains(
            "Usage: repoguard commit-msg <COMMIT_MSG_FILE>",
        ))
        .stderr(predicate::str::contains("TOML").not());
}

#[test]
fn unreadable_commit_message_is_error() {
    let repo = TempRepo::new().with_tasks("T1\n");

    repo.cmd()
        .arg("commit-msg")
        .arg(repo.root().join("no-such-file"))
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Failed to read commit message"))
        .stderr(predicate::str::contains("Hints:"));
}

// ── 7. Configuration ─────────────────────────────────────────────────

#[test]
fn config_file_changes_task_list_and_prefixes() {
    let repo = TempRepo::new();
    repo.write(
        "repoguard.toml",
        "[tasks]\nfile = \"TASKS.md\"\nprefixes = [\"BUG\"]\n",
    );
    repo.write("TASKS.md", "BUG7 crash on start\nT1 ignored prefix\n");

    let ok = repo.commit_msg("fix BUG7\n");
    repo.cmd().arg("commit-msg").arg(&ok).assert().success();

    let bad = repo.commit_msg("fix T1\n");
    repo.cmd()
        .arg("commit-msg")
        .arg(&bad)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("from TASKS.md"))
        .stderr(predicate::str::contains("Valid IDs: BUG7"));
}

#[test]
fn invalid_prefix_in_config_is_error() {
    let repo = TempRepo::new().with_tasks("T1\n");
    repo.write("repoguard.toml", "[tasks]\nprefixes = [\"t1\"]\n");
    let msg = repo.commit_msg("fix T1\n");

    repo.cmd()
        .arg("commit-msg")
        .arg(&msg)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid task ID prefix 't1'"));
}

#[test]
fn explicit_config_path_is_used() {
    let repo = TempRepo::new().with_tasks("T1\n");
    let config = repo.write("ci/guard.toml", "[tasks]\nfile = \"docs/other.md\"\n");
    let msg = repo.commit_msg("fix T1\n");

    // docs/other.md does not exist, so the guard falls back to skipping.
    repo.cmd()
        .arg("--config")
        .arg(&config)
        .arg("commit-msg")
        .arg(&msg)
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/other.md not found or empty"));
}

// ── 8. Repository root fallback ──────────────────────────────────────

#[test]
fn repo_root_defaults_to_current_directory() {
    let repo = TempRepo::new().with_tasks("T1\n");
    let msg = repo.commit_msg("unrelated\n");

    common::repoguard()
        .current_dir(repo.root())
        .arg("commit-msg")
        .arg(&msg)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Valid IDs: T1"));
}
