// File: ./src/cli.rs
//! Command-line interface definition and one-shot command execution.
//!
//! Tasks are not persisted, so a CLI run works on whatever was imported at
//! startup (`--import` or `import_file` in the config).
use crate::config::Config;
use crate::controller::TaskController;
use crate::model::display::format_listing;
use crate::model::{NewTask, Priority, SortKey, TaskStatus};
use crate::query::FilterOptions;
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "taskpad",
    version,
    about = "Small in-memory task tracker with undo/redo, queries and sharing",
    long_about = "Without a command, starts the interactive menu."
)]
pub struct Cli {
    /// Use a different directory for config and data
    #[arg(short, long, global = true)]
    pub root: Option<PathBuf>,

    /// Read configuration from this file instead of the default location
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Import tasks from a JSON or TOML file before running the command
    #[arg(short, long, global = true, env = "TASKPAD_IMPORT")]
    pub import: Option<PathBuf>,

    /// Treat unknown titles as no-ops and skip input validation
    #[arg(long, global = true)]
    pub lenient: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Add a task
    Add(AddArgs),
    /// Remove a task by title
    Remove { title: String },
    /// List all tasks
    List(ListArgs),
    /// Mark a task as complete
    Complete { title: String },
    /// Mark a task as incomplete
    Incomplete { title: String },
    /// Filter tasks by status, keywords, category, tags or due window
    Search(SearchArgs),
    /// List tasks due within a number of days
    DueSoon {
        /// Defaults to `due_soon_days` from the config
        #[arg(short, long)]
        days: Option<u32>,
    },
    /// Print the config file location
    ConfigPath,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct AddArgs {
    pub title: String,
    pub description: String,
    /// Due date (YYYY-MM-DD)
    #[arg(long)]
    pub due: Option<NaiveDate>,
    /// high, medium or low
    #[arg(short, long)]
    pub priority: Option<Priority>,
    /// Category, "/" separates levels (Work/Project A)
    #[arg(long)]
    pub category: Option<String>,
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct ListArgs {
    /// due-date, priority or status
    #[arg(short, long)]
    pub sort: Option<SortKey>,
    /// Show extension fields and comments
    #[arg(short, long)]
    pub detailed: bool,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Args)]
pub struct SearchArgs {
    #[arg(short, long)]
    pub status: Option<TaskStatus>,
    /// Matches title or description, case-insensitive. Repeat for OR.
    #[arg(short, long = "keyword")]
    pub keywords: Vec<String>,
    #[arg(long)]
    pub category: Option<String>,
    /// Match tasks carrying any of these tags
    #[arg(short, long = "tag")]
    pub tags: Vec<String>,
    /// Only tasks due within this many days
    #[arg(long)]
    pub due_within: Option<u32>,
}

impl SearchArgs {
    pub fn to_filter(&self, today: NaiveDate) -> FilterOptions {
        FilterOptions {
            status: self.status,
            keywords: self.keywords.clone(),
            category: self.category.clone(),
            tags: self.tags.iter().cloned().collect(),
            due_within: self.due_within.map(|d| (d, today)),
        }
    }
}

/// Runs one command and returns the lines to print.
/// `ConfigPath` needs the filesystem context and is answered by the binary.
pub fn execute(
    command: &Command,
    controller: &mut TaskController,
    config: &Config,
    today: NaiveDate,
) -> Result<Vec<String>> {
    let out = match command {
        Command::Add(args) => {
            let mut new = NewTask::new(args.title.clone(), args.description.clone())
                .tags(args.tags.iter().cloned());
            new.due = args.due;
            new.priority = args.priority.or(config.default_priority);
            new.category = args.category.clone();
            let task = controller.add_task(new)?;
            vec![format!("Task '{}' added successfully.", task.title)]
        }
        Command::Remove { title } => {
            if controller.remove_task(title)? {
                vec![format!("Task '{}' removed successfully.", title)]
            } else {
                vec![format!("Task '{}' not found; nothing removed.", title)]
            }
        }
        Command::List(args) => {
            if let Some(key) = args.sort {
                controller.sort(key);
            }
            if args.json {
                vec![serde_json::to_string_pretty(controller.tasks())?]
            } else {
                let mut lines = vec!["Listing all tasks:".to_string()];
                lines.extend(format_listing(controller.tasks(), args.detailed));
                lines
            }
        }
        Command::Complete { title } => status_change(controller, title, TaskStatus::Complete)?,
        Command::Incomplete { title } => {
            status_change(controller, title, TaskStatus::Incomplete)?
        }
        Command::Search(args) => format_listing(&controller.filter(&args.to_filter(today)), false),
        Command::DueSoon { days } => {
            let days = days.unwrap_or(config.due_soon_days);
            let hits = crate::query::due_soon(controller.tasks(), days, today);
            if hits.is_empty() {
                vec![format!("No tasks due within {} days.", days)]
            } else {
                hits.iter()
                    .map(|t| {
                        format!(
                            "Title: {}, Due Date: {}, Priority: {}",
                            t.title,
                            t.due.map(|d| d.to_string()).unwrap_or_default(),
                            t.priority.map(|p| p.to_string()).unwrap_or_else(|| "-".into())
                        )
                    })
                    .collect()
            }
        }
        Command::ConfigPath => Vec::new(),
    };
    Ok(out)
}

fn status_change(
    controller: &mut TaskController,
    title: &str,
    status: TaskStatus,
) -> Result<Vec<String>> {
    if controller.set_status(title, status)? {
        Ok(vec![format!("Task '{}' marked as {}.", title, status)])
    } else {
        Ok(vec![format!("Task '{}' not found; nothing changed.", title)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_fields() {
        let cli = Cli::try_parse_from([
            "taskpad",
            "add",
            "Complete project",
            "Finish it",
            "--due",
            "2023-10-15",
            "-p",
            "High",
            "-t",
            "work",
            "-t",
            "q4",
        ])
        .unwrap();
        let Some(Command::Add(args)) = cli.command else {
            panic!("expected add");
        };
        assert_eq!(args.priority, Some(Priority::High));
        assert_eq!(args.due, NaiveDate::from_ymd_opt(2023, 10, 15));
        assert_eq!(args.tags, vec!["work", "q4"]);
    }

    #[test]
    fn test_unknown_priority_rejected() {
        assert!(Cli::try_parse_from(["taskpad", "add", "A", "d", "-p", "urgent"]).is_err());
    }

    #[test]
    fn test_invalid_command_rejected() {
        assert!(Cli::try_parse_from(["taskpad", "explode"]).is_err());
    }
}
