// File: src/validation.rs
//! Input guards applied before a mutation reaches the store.
use crate::error::{TaskError, TaskResult};
use crate::model::NewTask;
use crate::store::TaskStore;
use serde::{Deserialize, Serialize};

/// Whether the controller rejects bad input or silently ignores misses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Blank fields fail with `InvalidInput`, title misses with `NotFound`.
    #[default]
    Validated,
    /// No input checks; a title miss is a no-op.
    Lenient,
}

pub fn validate_new_task(new: &NewTask) -> TaskResult<()> {
    if new.title.trim().is_empty() || new.description.trim().is_empty() {
        return Err(TaskError::InvalidInput(
            "Task title and description cannot be empty.".to_string(),
        ));
    }
    Ok(())
}

pub fn ensure_exists(store: &TaskStore, title: &str) -> TaskResult<()> {
    if store.contains(title) {
        Ok(())
    } else {
        Err(TaskError::NotFound(title.to_string()))
    }
}
