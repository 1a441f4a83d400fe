// File: ./src/model/sort.rs
//! Stable orderings of a task list.
//!
//! `slice::sort_by` is a stable merge sort, so tasks that compare equal keep
//! their relative order.
use crate::model::item::{Priority, Task};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use strum::{Display, EnumIter, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum SortKey {
    DueDate,
    Priority,
    Status,
}

impl SortKey {
    /// The key after this one, used by the TUI to cycle orderings.
    pub fn next(self) -> Self {
        match self {
            SortKey::DueDate => SortKey::Priority,
            SortKey::Priority => SortKey::Status,
            SortKey::Status => SortKey::DueDate,
        }
    }

    pub fn compare(self, a: &Task, b: &Task) -> Ordering {
        match self {
            SortKey::DueDate => due_key(a).cmp(&due_key(b)),
            SortKey::Priority => Priority::rank(a.priority).cmp(&Priority::rank(b.priority)),
            SortKey::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

// Undated tasks sort as if due on the maximal date.
fn due_key(task: &Task) -> NaiveDate {
    task.due.unwrap_or(NaiveDate::MAX)
}

pub fn sort_tasks(tasks: &mut [Task], key: SortKey) {
    tasks.sort_by(|a, b| key.compare(a, b));
}
