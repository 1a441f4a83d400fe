// File: src/observer.rs
//! State-change notifications.
//!
//! The core never logs or prints on its own. It reports each outcome to the
//! observers injected into the controller; `LogObserver` forwards them to the
//! `log` facade.
use crate::model::{SortKey, TaskStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskEvent {
    Added { title: String },
    Removed { title: String },
    StatusChanged { title: String, status: TaskStatus },
    Commented { title: String },
    Sorted { key: SortKey },
    Imported { added: usize, failed: usize },
    Undone,
    Redone,
    Rejected { operation: &'static str, reason: String },
    /// A lenient-mode operation that matched no task and changed nothing.
    Skipped { operation: &'static str, title: String },
}

pub trait TaskObserver {
    fn notify(&self, event: &TaskEvent);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogObserver;

impl TaskObserver for LogObserver {
    fn notify(&self, event: &TaskEvent) {
        match event {
            TaskEvent::Added { title } => log::info!("Task added: {}", title),
            TaskEvent::Removed { title } => log::info!("Task removed: {}", title),
            TaskEvent::StatusChanged { title, status } => {
                log::info!("Task marked as {}: {}", status, title)
            }
            TaskEvent::Commented { title } => log::info!("Comment added to task: {}", title),
            TaskEvent::Sorted { key } => log::debug!("Tasks sorted by {}", key),
            TaskEvent::Imported { added, failed } => {
                if *failed > 0 {
                    log::warn!("Imported {} tasks, {} rejected", added, failed);
                } else {
                    log::info!("Imported {} tasks", added);
                }
            }
            TaskEvent::Undone => log::info!("Undo successful."),
            TaskEvent::Redone => log::info!("Redo successful."),
            TaskEvent::Rejected { operation, reason } => {
                log::error!("Failed to {}: {}", operation, reason)
            }
            TaskEvent::Skipped { operation, title } => {
                log::debug!("Skipped {}: no task titled '{}'", operation, title)
            }
        }
    }
}
