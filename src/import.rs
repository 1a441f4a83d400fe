// File: src/import.rs
//! Task import from a JSON or TOML file.
//!
//! JSON: `{"tasks": [{"title": "..", "description": ".."}]}`
//! TOML: `[[tasks]]` tables with the same keys.
//!
//! Optional keys per entry: `due` (YYYY-MM-DD), `priority`, `category`, `tags`.
//! Entries without a recognized priority get the configured default.
use crate::controller::{ImportReport, TaskController};
use crate::error::TaskResult;
use crate::model::{NewTask, Priority, parse_due_date};
use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportFile {
    #[serde(default)]
    pub tasks: Vec<ImportEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ImportEntry {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub due: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl ImportEntry {
    /// Unknown priorities fall back to `default_priority` (with a warning);
    /// a bad date is an error.
    pub fn to_new_task(&self, default_priority: Option<Priority>) -> TaskResult<NewTask> {
        let mut new = NewTask::new(self.title.clone(), self.description.clone());
        if let Some(raw) = &self.due {
            new.due = Some(parse_due_date(raw)?);
        }
        new.priority = match &self.priority {
            Some(raw) => Priority::parse_lenient(raw).or_else(|| {
                log::warn!("Unrecognized priority '{}' for task '{}'", raw, self.title);
                default_priority
            }),
            None => default_priority,
        };
        new.category = self.category.clone();
        new.tags = self.tags.clone();
        Ok(new)
    }
}

impl ImportFile {
    pub fn parse_json(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn parse_toml(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Picks the format from the extension; anything but `.toml` is read as JSON.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read tasks file '{}'", path.display()))?;
        let is_toml = path
            .extension()
            .is_some_and(|e| e.eq_ignore_ascii_case("toml"));
        let parsed = if is_toml {
            Self::parse_toml(&contents)
        } else {
            Self::parse_json(&contents)
        };
        parsed.with_context(|| format!("Failed to parse tasks file '{}'", path.display()))
    }

    /// Adds every entry to `controller` in file order.
    pub fn apply(
        &self,
        controller: &mut TaskController,
        default_priority: Option<Priority>,
    ) -> ImportReport {
        let mut ready = Vec::new();
        let mut bad = Vec::new();
        for entry in &self.tasks {
            match entry.to_new_task(default_priority) {
                Ok(new) => ready.push(new),
                Err(e) => {
                    log::error!("Skipping task '{}': {}", entry.title, e);
                    bad.push((entry.title.clone(), e));
                }
            }
        }
        let mut report = controller.import(ready);
        report.rejected.extend(bad);
        report
    }
}

/// Loads `path` and imports it into `controller`.
pub fn import_file(
    controller: &mut TaskController,
    path: &Path,
    default_priority: Option<Priority>,
) -> Result<ImportReport> {
    let file = ImportFile::load(path)?;
    let report = file.apply(controller, default_priority);
    log::info!(
        "Loaded {} tasks from '{}'",
        report.added,
        path.display()
    );
    Ok(report)
}
