// File: ./src/error.rs
//! Error taxonomy for the task core.
//!
//! Every variant is a local, recoverable condition. A failed call never leaves
//! the store half-mutated and never records a history snapshot.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Task with title '{0}' not found.")]
    NotFound(String),

    #[error("A task titled '{0}' already exists.")]
    DuplicateTitle(String),

    #[error("Permission denied: '{0}' is read-only.")]
    PermissionDenied(String),

    #[error("Invalid due date '{0}', expected YYYY-MM-DD.")]
    InvalidDate(String),

    #[error("No actions to undo.")]
    NothingToUndo,

    #[error("No actions to redo.")]
    NothingToRedo,

    #[error("User '{0}' does not exist.")]
    UnknownUser(String),

    #[error("User '{0}' already exists.")]
    UserExists(String),
}

pub type TaskResult<T> = Result<T, TaskError>;
