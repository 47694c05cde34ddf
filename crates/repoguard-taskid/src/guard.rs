//! Commit message evaluation.

use serde::Serialize;

use crate::TaskIdSet;

/// Why the guard let a commit through without checking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    DocumentMissing,
    NoTaskIds,
}

/// Outcome of checking one commit message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum GuardOutcome {
    /// The message references `id`.
    Matched { id: String },
    /// No task list is configured; the check is vacuously satisfied.
    Skipped { reason: SkipReason },
    /// The message references none of `valid_ids` (sorted ascending).
    Missing { valid_ids: Vec<String> },
}

impl GuardOutcome {
    pub fn passed(&self) -> bool {
        !matches!(self, GuardOutcome::Missing { .. })
    }
}

/// Check `message` against the task IDs loaded from the task list.
/// `ids` is `None` when the task list does not exist.
pub fn evaluate_message(message: &str, ids: Option<&TaskIdSet>) -> GuardOutcome {
    let ids = match ids {
        None => {
            return GuardOutcome::Skipped {
                reason: SkipReason::DocumentMissing,
            };
        }
        Some(ids) if ids.is_empty() => {
            return GuardOutcome::Skipped {
                reason: SkipReason::NoTaskIds,
            };
        }
        Some(ids) => ids,
    };

    match ids.find_in(message) {
        Some(id) => GuardOutcome::Matched { id: id.to_string() },
        None => GuardOutcome::Missing {
            valid_ids: ids.iter().map(str::to_string).collect(),
        },
    }
}

/// Informational line printed when enforcement is skipped.
pub fn skip_notice(tasks_file: &str) -> String {
    format!("[guard] {tasks_file} not found or empty; skipping Task ID enforcement.")
}

/// Error text printed when the message references no known task.
pub fn failure_message(tasks_file: &str, valid_ids: &[String]) -> String {
    format!(
        "[GUARD] Commit message must reference a task id from {tasks_file}\n\
         [GUARD] Valid IDs: {}",
        valid_ids.join(" ")
    )
}
