// File: src/controller.rs
//! Central logic controller for task operations.
//! This is the single entry point for all mutations (add, remove, status, comments, sort)
//! and for undo/redo. UI layers (CLI, TUI, collaboration) must delegate to it so that
//! validation, history recording and observer notification happen the same way everywhere.
use crate::config::Config;
use crate::error::{TaskError, TaskResult};
use crate::history::HistoryManager;
use crate::model::{NewTask, SortKey, Task, TaskStatus};
use crate::observer::{LogObserver, TaskEvent, TaskObserver};
use crate::query::FilterOptions;
use crate::store::TaskStore;
use crate::validation::{self, ValidationMode};

pub const UNDO_MESSAGE: &str = "Undo successful.";
pub const REDO_MESSAGE: &str = "Redo successful.";

/// Result of a batch import. Rejections never abort the batch.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImportReport {
    pub added: usize,
    pub rejected: Vec<(String, TaskError)>,
}

/// Owns one store and its history. Each session (or collaborating user)
/// gets its own controller; nothing is shared between them.
pub struct TaskController {
    store: TaskStore,
    history: HistoryManager,
    mode: ValidationMode,
    observers: Vec<Box<dyn TaskObserver>>,
}

impl Default for TaskController {
    fn default() -> Self {
        Self::new(ValidationMode::Validated)
    }
}

impl std::fmt::Debug for TaskController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskController")
            .field("store", &self.store)
            .field("history", &self.history)
            .field("mode", &self.mode)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl TaskController {
    /// A controller with no observers attached.
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            store: TaskStore::new(),
            history: HistoryManager::new(),
            mode,
            observers: Vec::new(),
        }
    }

    /// Builds a controller from configuration, with the log observer attached.
    pub fn from_config(config: &Config) -> Self {
        let mode = if config.validation {
            ValidationMode::Validated
        } else {
            ValidationMode::Lenient
        };
        Self::new(mode)
            .with_history_limit(config.history_limit)
            .with_observer(Box::new(LogObserver))
    }

    pub fn with_history_limit(mut self, limit: Option<usize>) -> Self {
        self.history = HistoryManager::with_limit(limit);
        self
    }

    pub fn with_observer(mut self, observer: Box<dyn TaskObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    fn notify(&self, event: TaskEvent) {
        for o in &self.observers {
            o.notify(&event);
        }
    }

    fn reject<T>(&self, operation: &'static str, err: TaskError) -> TaskResult<T> {
        self.notify(TaskEvent::Rejected {
            operation,
            reason: err.to_string(),
        });
        Err(err)
    }

    // --- Mutations ---

    pub fn add_task(&mut self, new: impl Into<NewTask>) -> TaskResult<Task> {
        let new = new.into();
        if self.mode == ValidationMode::Validated
            && let Err(e) = validation::validate_new_task(&new)
        {
            return self.reject("add task", e);
        }
        self.insert_task(new.into_task(), "add task")
    }

    /// Appends a fully built task (shared copies keep their access level).
    pub fn receive_task(&mut self, task: Task) -> TaskResult<Task> {
        self.insert_task(task, "receive shared task")
    }

    fn insert_task(&mut self, task: Task, operation: &'static str) -> TaskResult<Task> {
        if self.store.contains(&task.title) {
            return self.reject(operation, TaskError::DuplicateTitle(task.title));
        }
        self.history.record(&self.store);
        let added = self.store.insert(task)?.clone();
        self.notify(TaskEvent::Added {
            title: added.title.clone(),
        });
        Ok(added)
    }

    /// Returns `Ok(false)` in lenient mode when nothing matched.
    pub fn remove_task(&mut self, title: &str) -> TaskResult<bool> {
        if !self.check_exists(title, "remove task")? {
            return Ok(false);
        }
        self.history.record(&self.store);
        self.store.remove(title);
        self.notify(TaskEvent::Removed {
            title: title.to_string(),
        });
        Ok(true)
    }

    pub fn set_status(&mut self, title: &str, status: TaskStatus) -> TaskResult<bool> {
        if !self.check_exists(title, "set status")? {
            return Ok(false);
        }
        if self
            .store
            .find_by_title(title)
            .is_some_and(|t| t.is_read_only())
        {
            return self.reject("set status", TaskError::PermissionDenied(title.to_string()));
        }
        self.history.record(&self.store);
        self.store.set_status(title, status);
        self.notify(TaskEvent::StatusChanged {
            title: title.to_string(),
            status,
        });
        Ok(true)
    }

    pub fn mark_complete(&mut self, title: &str) -> TaskResult<bool> {
        self.set_status(title, TaskStatus::Complete)
    }

    pub fn mark_incomplete(&mut self, title: &str) -> TaskResult<bool> {
        self.set_status(title, TaskStatus::Incomplete)
    }

    /// Comments are allowed on read-only tasks: they annotate, not modify.
    pub fn add_comment(&mut self, title: &str, comment: &str) -> TaskResult<bool> {
        if self.mode == ValidationMode::Validated && comment.trim().is_empty() {
            return self.reject(
                "add comment",
                TaskError::InvalidInput("Comment cannot be empty.".to_string()),
            );
        }
        if !self.check_exists(title, "add comment")? {
            return Ok(false);
        }
        self.history.record(&self.store);
        self.store.add_comment(title, comment);
        self.notify(TaskEvent::Commented {
            title: title.to_string(),
        });
        Ok(true)
    }

    /// Reorders the store. Recorded like any other mutation, so undo restores the old order.
    pub fn sort(&mut self, key: SortKey) {
        self.history.record(&self.store);
        self.store.sort_by(key);
        self.notify(TaskEvent::Sorted { key });
    }

    /// Adds each entry in order. A rejected entry is logged and skipped.
    pub fn import<I, T>(&mut self, entries: I) -> ImportReport
    where
        I: IntoIterator<Item = T>,
        T: Into<NewTask>,
    {
        let mut report = ImportReport::default();
        for entry in entries {
            let new = entry.into();
            let title = new.title.clone();
            match self.add_task(new) {
                Ok(_) => report.added += 1,
                Err(e) => report.rejected.push((title, e)),
            }
        }
        self.notify(TaskEvent::Imported {
            added: report.added,
            failed: report.rejected.len(),
        });
        report
    }

    // Lenient mode turns a miss into `Ok(false)`; validated mode into `NotFound`.
    fn check_exists(&self, title: &str, operation: &'static str) -> TaskResult<bool> {
        match self.mode {
            ValidationMode::Validated => match validation::ensure_exists(&self.store, title) {
                Ok(()) => Ok(true),
                Err(e) => self.reject(operation, e),
            },
            ValidationMode::Lenient => {
                let found = self.store.contains(title);
                if !found {
                    self.notify(TaskEvent::Skipped {
                        operation,
                        title: title.to_string(),
                    });
                }
                Ok(found)
            }
        }
    }

    // --- History ---

    pub fn undo(&mut self) -> TaskResult<&'static str> {
        match self.history.undo(&mut self.store) {
            Ok(()) => {
                self.notify(TaskEvent::Undone);
                Ok(UNDO_MESSAGE)
            }
            Err(e) => self.reject("undo", e),
        }
    }

    pub fn redo(&mut self) -> TaskResult<&'static str> {
        match self.history.redo(&mut self.store) {
            Ok(()) => {
                self.notify(TaskEvent::Redone);
                Ok(REDO_MESSAGE)
            }
            Err(e) => self.reject("redo", e),
        }
    }

    pub fn history(&self) -> &HistoryManager {
        &self.history
    }

    // --- Read access ---

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    pub fn find(&self, title: &str) -> Option<&Task> {
        self.store.find_by_title(title)
    }

    pub fn filter(&self, options: &FilterOptions) -> Vec<Task> {
        self.store.filter(options)
    }
}
