use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidArgument(String),

    #[error("a pending task with title '{0}' already exists")]
    DuplicateTask(String),

    #[error("no task currently in memory")]
    NoStorage,

    #[error("no tasks found")]
    EmptyCollection,

    #[error("id must be a number, got '{0}'")]
    InvalidId(String),

    #[error("there is no task with the id {0}")]
    TaskNotFound(u64),

    #[error("lock file conflict: {0}")]
    LockConflict(String),
}
