// File: ./src/model/display.rs
use crate::model::item::{DATE_FORMAT, Permission, Task, TaskStatus};

pub trait TaskDisplay {
    fn to_line(&self) -> String;
    fn to_detail_lines(&self) -> Vec<String>;
    fn checkbox_symbol(&self) -> &'static str;
}

impl TaskDisplay for Task {
    fn checkbox_symbol(&self) -> &'static str {
        match self.status {
            TaskStatus::Complete => "[✔]",
            TaskStatus::Incomplete => "[ ]",
        }
    }

    /// One-line listing: `Title: X, Description: Y, Status: incomplete`.
    fn to_line(&self) -> String {
        format!(
            "Title: {}, Description: {}, Status: {}",
            self.title, self.description, self.status
        )
    }

    fn to_detail_lines(&self) -> Vec<String> {
        let mut lines = vec![self.to_line()];
        if let Some(d) = self.due {
            lines.push(format!("  Due: {}", d.format(DATE_FORMAT)));
        }
        if let Some(p) = self.priority {
            lines.push(format!("  Priority: {}", p));
        }
        if let Some(c) = &self.category {
            lines.push(format!("  Category: {}", c));
        }
        if !self.tags.is_empty() {
            let tags: Vec<&str> = self.tags.iter().map(String::as_str).collect();
            lines.push(format!("  Tags: {}", tags.join(", ")));
        }
        if self.access == Permission::Read {
            lines.push("  Access: read-only".to_string());
        }
        for c in &self.comments {
            lines.push(format!("  Comment: {}", c));
        }
        lines
    }
}

/// Formats a whole listing, with a placeholder line for an empty list.
pub fn format_listing(tasks: &[Task], detailed: bool) -> Vec<String> {
    if tasks.is_empty() {
        return vec!["No tasks available.".to_string()];
    }
    if detailed {
        tasks.iter().flat_map(|t| t.to_detail_lines()).collect()
    } else {
        tasks.iter().map(|t| t.to_line()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::item::{NewTask, Priority, parse_due_date};

    #[test]
    fn test_line_format() {
        let t = Task::new("Task 1", "Description 1");
        assert_eq!(
            t.to_line(),
            "Title: Task 1, Description: Description 1, Status: incomplete"
        );
    }

    #[test]
    fn test_detail_lines() {
        let t = NewTask::new("Task 1", "d")
            .due(parse_due_date("2023-10-15").unwrap())
            .priority(Priority::High)
            .tags(["b", "a"])
            .into_task();
        let lines = t.to_detail_lines();
        assert!(lines.contains(&"  Due: 2023-10-15".to_string()));
        assert!(lines.contains(&"  Priority: high".to_string()));
        assert!(lines.contains(&"  Tags: a, b".to_string()));
    }

    #[test]
    fn test_empty_listing() {
        assert_eq!(format_listing(&[], false), vec!["No tasks available."]);
    }
}
