//! # repoguard-taskid
//!
//! **Tier 1 (Commit Guard)**
//!
//! Collects task IDs (`T1`, `TX2`, `D0`, `Q1.3`, ...) from a task list
//! document and checks that a commit message references one of them.
//!
//! ## What belongs here
//! * The task ID grammar and prefix allow-list
//! * Task document parsing and loading
//! * Commit message matching and the guard's messages
//!
//! ## What does NOT belong here
//! * Repository root discovery (use `repoguard`)
//! * Exit-code mapping
//!
//! ## Example
//! ```
//! use repoguard_taskid::{GuardOutcome, TaskIdSet, evaluate_message};
//!
//! let ids = TaskIdSet::parse("T1: Do X\nT1.2: Do Y\n", &["T"]);
//! let outcome = evaluate_message("T1.2 fix", Some(&ids));
//! assert_eq!(outcome, GuardOutcome::Matched { id: "T1.2".into() });
//! ```

mod document;
mod grammar;
mod guard;

pub use document::{TaskIdError, TaskIdSet};
pub use grammar::{DEFAULT_PREFIXES, extract_task_id, validate_prefixes};
pub use guard::{GuardOutcome, SkipReason, evaluate_message, failure_message, skip_notice};

/// Location of the task list relative to the repository root.
pub const DEFAULT_TASKS_FILE: &str = "docs/tasks.md";
