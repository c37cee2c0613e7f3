use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single tracked task — the only entity in the system.
///
/// Ids are assigned by the store, never by callers. `completed` only ever
/// transitions from `false` to `true`; there is no un-complete operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub completed: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Build a new pending task with a freshly captured timestamp.
    ///
    /// `title` and `description` are taken as-is; normalization happens in
    /// the store before this is called.
    pub fn new(id: u64, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Pending = not yet completed. Duplicate-title rejection only applies
    /// among pending tasks.
    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Case-insensitive title comparison used for duplicate detection.
    pub fn title_matches(&self, other: &str) -> bool {
        self.title.to_lowercase() == other.to_lowercase()
    }
}

/// The input shape shared by the CLI `add` command and the HTTP POST body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
}

/// Strip embedded line breaks (`\r` and `\n`) from free text before storage.
pub fn strip_line_breaks(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}
