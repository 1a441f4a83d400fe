// File: src/store.rs
use crate::error::{TaskError, TaskResult};
use crate::model::sort::{SortKey, sort_tasks};
use crate::model::{NewTask, Task, TaskStatus};
use crate::query::{self, FilterOptions};

/// Ordered collection of tasks. Insertion order is display order.
///
/// `Clone` is a deep copy and doubles as the history snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Appends a task. Titles are unique keys, so a duplicate is rejected.
    pub fn add(&mut self, new: NewTask) -> TaskResult<&Task> {
        self.insert(new.into_task())
    }

    /// Appends an already-built task (used when receiving shared copies).
    pub fn insert(&mut self, task: Task) -> TaskResult<&Task> {
        if self.contains(&task.title) {
            return Err(TaskError::DuplicateTitle(task.title));
        }
        self.tasks.push(task);
        // Just pushed, so the list is non-empty.
        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// Deletes every task with exactly this title. Returns whether anything was removed.
    pub fn remove(&mut self, title: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.title != title);
        self.tasks.len() != before
    }

    pub fn contains(&self, title: &str) -> bool {
        self.tasks.iter().any(|t| t.title == title)
    }

    pub fn find_by_title(&self, title: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.title == title)
    }

    pub fn find_by_title_mut(&mut self, title: &str) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.title == title)
    }

    pub fn set_status(&mut self, title: &str, status: TaskStatus) -> bool {
        if let Some(task) = self.find_by_title_mut(title) {
            task.status = status;
            return true;
        }
        false
    }

    pub fn add_comment(&mut self, title: &str, comment: &str) -> bool {
        if let Some(task) = self.find_by_title_mut(title) {
            task.comments.push(comment.to_string());
            return true;
        }
        false
    }

    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn titles(&self) -> Vec<&str> {
        self.tasks.iter().map(|t| t.title.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Reorders the store in place. Callers wanting the previous order back
    /// must snapshot first.
    pub fn sort_by(&mut self, key: SortKey) {
        sort_tasks(&mut self.tasks, key);
    }

    pub fn filter(&self, options: &FilterOptions) -> Vec<Task> {
        query::filter(&self.tasks, options)
    }
}
