// File: ./src/model/item.rs
use crate::error::{TaskError, TaskResult};
use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use strum::{Display, EnumIter, EnumString};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TaskStatus {
    #[default]
    Incomplete,
    Complete,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Incomplete => "incomplete",
            Self::Complete => "complete",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

#[derive(
    Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    /// Sort rank: High(1) < Medium(2) < Low(3). Unset priorities rank 4.
    pub fn rank(priority: Option<Priority>) -> u8 {
        match priority {
            Some(Priority::High) => 1,
            Some(Priority::Medium) => 2,
            Some(Priority::Low) => 3,
            None => 4,
        }
    }

    /// Lenient parse used by importers: unknown strings become `None`.
    pub fn parse_lenient(raw: &str) -> Option<Priority> {
        raw.trim().parse().ok()
    }
}

/// Access level of a task inside a store.
/// `Read` marks a shared, capability-restricted copy whose status cannot change.
#[derive(
    Debug,
    Clone,
    Copy,
    Eq,
    PartialEq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Permission {
    Read,
    #[default]
    Edit,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub tags: BTreeSet<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<String>,

    #[serde(default)]
    pub access: Permission,
}

impl Task {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            status: TaskStatus::Incomplete,
            due: None,
            priority: None,
            category: None,
            tags: BTreeSet::new(),
            comments: Vec::new(),
            access: Permission::Edit,
        }
    }

    pub fn mark_complete(&mut self) {
        self.status = TaskStatus::Complete;
    }

    pub fn mark_incomplete(&mut self) {
        self.status = TaskStatus::Incomplete;
    }

    pub fn is_read_only(&self) -> bool {
        self.access == Permission::Read
    }

    /// True when the task is due on or before `today + days`.
    /// Undated tasks are never due soon. A window past the calendar's end
    /// covers every dated task.
    pub fn is_due_soon(&self, days: u32, today: NaiveDate) -> bool {
        let Some(due) = self.due else {
            return false;
        };
        match today.checked_add_signed(Duration::days(i64::from(days))) {
            Some(limit) => due <= limit,
            None => true,
        }
    }

    /// Category split on '/', e.g. "Work/Project A" -> ["Work", "Project A"].
    pub fn category_path(&self) -> Vec<&str> {
        self.category
            .as_deref()
            .map(|c| c.split('/').collect())
            .unwrap_or_default()
    }

    /// Copy handed to another user when sharing. Comments stay with the original.
    pub fn shared_copy(&self, access: Permission) -> Self {
        Self {
            comments: Vec::new(),
            access,
            ..self.clone()
        }
    }
}

pub fn parse_due_date(raw: &str) -> TaskResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .map_err(|_| TaskError::InvalidDate(raw.to_string()))
}

/// Input for `TaskStore::add`: the required pair plus optional extension fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub due: Option<NaiveDate>,
    #[serde(default)]
    pub priority: Option<Priority>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            ..Self::default()
        }
    }

    pub fn due(mut self, due: NaiveDate) -> Self {
        self.due = Some(due);
        self
    }

    /// Parses a `YYYY-MM-DD` string; fails with `InvalidDate`.
    pub fn due_str(self, raw: &str) -> TaskResult<Self> {
        Ok(self.due(parse_due_date(raw)?))
    }

    pub fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.insert(tag.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn into_task(self) -> Task {
        Task {
            due: self.due,
            priority: self.priority,
            category: self.category,
            tags: self.tags,
            ..Task::new(self.title, self.description)
        }
    }
}

impl From<(String, String)> for NewTask {
    fn from((title, description): (String, String)) -> Self {
        Self::new(title, description)
    }
}

impl From<(&str, &str)> for NewTask {
    fn from((title, description): (&str, &str)) -> Self {
        Self::new(title, description)
    }
}
