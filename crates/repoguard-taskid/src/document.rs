//! Task list documents.

use std::collections::BTreeSet;
use std::io::ErrorKind;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, trace};

use crate::extract_task_id;

/// Line boundaries recognised in task lists, the full Unicode set rather than
/// just `\n` and `\r\n`.
const LINE_BREAKS: [char; 10] = [
    '\n', '\r', '\x0b', '\x0c', '\x1c', '\x1d', '\x1e', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Split `text` into lines. `\r\n` counts as a single break.
fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(LINE_BREAKS) {
            Some(at) => {
                let line = &rest[..at];
                let tail = &rest[at..];
                let width = if tail.starts_with("\r\n") {
                    2
                } else {
                    tail.chars().next().map_or(1, char::len_utf8)
                };
                rest = &tail[width..];
                Some(line)
            }
            None => {
                let line = rest;
                rest = "";
                Some(line)
            }
        }
    })
}

/// Errors from loading a task list.
#[derive(Debug, Error)]
pub enum TaskIdError {
    #[error("Failed to read task list {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid task ID prefix '{0}': prefixes must be uppercase letters A-Z")]
    InvalidPrefix(String),

    #[error("Task ID prefix allow-list is empty")]
    NoPrefixes,
}

/// The set of task IDs declared in a task list. Iteration is sorted
/// ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TaskIdSet {
    ids: BTreeSet<String>,
}

impl TaskIdSet {
    /// Collect the first allow-listed task ID of every line in `text`.
    pub fn parse<S: AsRef<str>>(text: &str, prefixes: &[S]) -> Self {
        let ids = split_lines(text)
            .filter_map(|line| extract_task_id(line, prefixes))
            .inspect(|id| trace!(%id, "task id"))
            .map(str::to_string)
            .collect();
        Self { ids }
    }

    /// Load and parse the task list at `path`.
    ///
    /// Returns `Ok(None)` when the file does not exist.
    pub fn load<S: AsRef<str>>(path: &Path, prefixes: &[S]) -> Result<Option<Self>, TaskIdError> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "task list not found");
                return Ok(None);
            }
            Err(source) => {
                return Err(TaskIdError::Read {
                    path: path.display().to_string(),
                    source,
                });
            }
        };
        let set = Self::parse(&text, prefixes);
        debug!(path = %path.display(), count = set.len(), "loaded task list");
        Ok(Some(set))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// IDs in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// IDs ordered longest first, ties broken by descending string order.
    pub fn longest_first(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.iter().collect();
        ids.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| b.cmp(a)));
        ids
    }

    /// The first ID, checking longest first, that occurs in `message` as a
    /// literal substring.
    pub fn find_in(&self, message: &str) -> Option<&str> {
        self.longest_first()
            .into_iter()
            .find(|id| message.contains(id))
    }
}

impl<S: Into<String>> FromIterator<S> for TaskIdSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().map(Into::into).collect(),
        }
    }
}
