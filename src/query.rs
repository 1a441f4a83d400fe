// File: src/query.rs
//! Read-only queries over a task list.
//!
//! Every function returns a freshly built `Vec<Task>` in source order and
//! never touches the input.
use crate::model::{Task, TaskStatus};
use chrono::NaiveDate;
use std::collections::BTreeSet;

pub fn by_status(tasks: &[Task], status: TaskStatus) -> Vec<Task> {
    collect(tasks, |t| t.has_status(status))
}

pub fn by_keyword(tasks: &[Task], keyword: &str) -> Vec<Task> {
    collect(tasks, |t| t.matches_keyword(keyword))
}

/// Union of `by_keyword` over `keywords`, without duplicates.
pub fn by_keywords<S: AsRef<str>>(tasks: &[Task], keywords: &[S]) -> Vec<Task> {
    collect(tasks, |t| t.matches_any_keyword(keywords))
}

pub fn by_category(tasks: &[Task], category: &str) -> Vec<Task> {
    collect(tasks, |t| t.in_category(category))
}

pub fn by_category_path<S: AsRef<str>>(tasks: &[Task], segments: &[S]) -> Vec<Task> {
    collect(tasks, |t| t.in_category_path(segments))
}

pub fn by_tags(tasks: &[Task], tags: &BTreeSet<String>) -> Vec<Task> {
    collect(tasks, |t| t.has_any_tag(tags))
}

pub fn due_soon(tasks: &[Task], days: u32, today: NaiveDate) -> Vec<Task> {
    collect(tasks, |t| t.is_due_soon(days, today))
}

/// Intersection of the optional status and keyword filters.
pub fn combined<S: AsRef<str>>(
    tasks: &[Task],
    status: Option<TaskStatus>,
    keywords: Option<&[S]>,
) -> Vec<Task> {
    let keywords: Vec<String> = keywords
        .map(|ks| ks.iter().map(|k| k.as_ref().to_string()).collect())
        .unwrap_or_default();
    filter(
        tasks,
        &FilterOptions {
            status,
            keywords,
            ..FilterOptions::default()
        },
    )
}

/// Multi-criteria filter. Each criterion is optional; set ones are ANDed.
/// An empty keyword list or tag set counts as unset.
#[derive(Debug, Clone, Default)]
pub struct FilterOptions {
    pub status: Option<TaskStatus>,
    pub keywords: Vec<String>,
    pub category: Option<String>,
    pub tags: BTreeSet<String>,
    /// `(days, today)` for a due-soon window.
    pub due_within: Option<(u32, NaiveDate)>,
}

impl FilterOptions {
    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.keywords.is_empty()
            && self.category.is_none()
            && self.tags.is_empty()
            && self.due_within.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status
            && !task.has_status(status)
        {
            return false;
        }
        if !self.keywords.is_empty() && !task.matches_any_keyword(self.keywords.as_slice()) {
            return false;
        }
        if let Some(cat) = &self.category
            && !task.in_category(cat)
        {
            return false;
        }
        if !self.tags.is_empty() && !task.has_any_tag(&self.tags) {
            return false;
        }
        if let Some((days, today)) = self.due_within
            && !task.is_due_soon(days, today)
        {
            return false;
        }
        true
    }
}

pub fn filter(tasks: &[Task], options: &FilterOptions) -> Vec<Task> {
    collect(tasks, |t| options.matches(t))
}

fn collect<F>(tasks: &[Task], pred: F) -> Vec<Task>
where
    F: Fn(&Task) -> bool,
{
    tasks.iter().filter(|t| pred(t)).cloned().collect()
}
