use crate::error::StoreError;
use crate::lockfile::Lockfile;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use taskdeck_core::task::{strip_line_breaks, Task, TaskDraft};

/// The task store: sole owner of the on-disk JSON collection.
///
/// Every operation is a full read-modify-write cycle against the file; there
/// is no in-memory cache, so the file is the single source of truth across
/// CLI invocations and server requests. Operations are serialized behind an
/// in-process mutex: at most one in-flight mutation at a time, enforced by
/// the store, not by callers. Races between separate processes sharing the
/// file remain possible (last writer wins).
pub struct TaskStore {
    path: PathBuf,
    gate: Mutex<()>,
}

impl TaskStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            gate: Mutex::new(()),
        }
    }

    /// Path of the storage medium.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create a pending task and persist the collection.
    ///
    /// Line breaks are stripped from both fields before validation, so a
    /// title that is nothing but newlines counts as empty. Duplicate titles
    /// are rejected case-insensitively, but only among pending tasks — a
    /// completed task's title may be reused.
    pub fn create(&self, draft: TaskDraft) -> Result<Task, StoreError> {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        let title = strip_line_breaks(&draft.title);
        let description = strip_line_breaks(&draft.description);
        if title.is_empty() || description.is_empty() {
            return Err(StoreError::InvalidArgument(
                "a task needs a title and a description".into(),
            ));
        }

        let mut tasks = self.load_or_default()?;

        if let Some(dup) = tasks.iter().find(|t| t.is_pending() && t.title_matches(&title)) {
            return Err(StoreError::DuplicateTask(dup.title.clone()));
        }

        let next_id = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        let task = Task::new(next_id, title, description);
        tasks.push(task.clone());
        self.persist(&tasks)?;
        Ok(task)
    }

    /// Return the full collection in stored order.
    pub fn list(&self) -> Result<Vec<Task>, StoreError> {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        self.require_file()?;
        let tasks = self.load_existing()?;
        if tasks.is_empty() {
            return Err(StoreError::EmptyCollection);
        }
        Ok(tasks)
    }

    /// Mark the task with the given id as completed.
    ///
    /// Completing an already-completed task is a silent success: the
    /// unchanged collection is re-persisted.
    pub fn complete(&self, id: &str) -> Result<Task, StoreError> {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        let id = parse_id(id)?;
        self.require_file()?;
        let mut tasks = self.load_existing()?;

        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        task.completed = true;
        let updated = task.clone();

        self.persist(&tasks)?;
        Ok(updated)
    }

    /// Delete one task by id, or every task with the `"all"` sentinel.
    ///
    /// Returns the removed task, or `None` for a full clear.
    pub fn delete(&self, selector: &str) -> Result<Option<Task>, StoreError> {
        let _gate = self.gate.lock().unwrap_or_else(PoisonError::into_inner);

        if selector == "all" {
            self.require_file()?;
            let tasks = self.load_existing()?;
            if tasks.is_empty() {
                return Err(StoreError::EmptyCollection);
            }
            self.persist(&[])?;
            return Ok(None);
        }

        let id = parse_id(selector)?;
        self.require_file()?;
        let mut tasks = self.load_existing()?;

        let index = tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        let removed = tasks.remove(index);

        self.persist(&tasks)?;
        Ok(Some(removed))
    }

    /// Existence guard: the file must be present before any parse attempt.
    fn require_file(&self) -> Result<(), StoreError> {
        if !self.path.exists() {
            return Err(StoreError::NoStorage);
        }
        Ok(())
    }

    /// Load the collection, treating a missing file as empty (create path).
    fn load_or_default(&self) -> Result<Vec<Task>, StoreError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        self.load_existing()
    }

    /// Load the collection from a file known to exist.
    fn load_existing(&self) -> Result<Vec<Task>, StoreError> {
        let data = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// Overwrite the storage medium with the full collection.
    ///
    /// Staged to a lock file and renamed into place, so a crash mid-write
    /// cannot leave a truncated JSON document behind.
    fn persist(&self, tasks: &[Task]) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(tasks)?;
        Lockfile::stage(&self.path, json.as_bytes())?.commit()
    }
}

fn parse_id(raw: &str) -> Result<u64, StoreError> {
    raw.trim()
        .parse()
        .map_err(|_| StoreError::InvalidId(raw.to_string()))
}
