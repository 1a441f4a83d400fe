// File: src/collab.rs
//! Multi-user sharing and comments.
//!
//! Every user owns an independent `TaskController`. Sharing copies a task into
//! the recipient's store; the copy carries its own access level and never
//! aliases the original.
use crate::controller::TaskController;
use crate::error::{TaskError, TaskResult};
use crate::model::Permission;
use crate::validation::ValidationMode;
use std::collections::BTreeMap;

#[derive(Debug)]
pub struct User {
    pub username: String,
    pub tasks: TaskController,
}

impl User {
    pub fn new(username: impl Into<String>, tasks: TaskController) -> Self {
        Self {
            username: username.into(),
            tasks,
        }
    }
}

#[derive(Debug, Default)]
pub struct CollaborationManager {
    users: BTreeMap<String, User>,
    mode: ValidationMode,
}

impl CollaborationManager {
    pub fn new(mode: ValidationMode) -> Self {
        Self {
            users: BTreeMap::new(),
            mode,
        }
    }

    pub fn add_user(&mut self, username: &str) -> TaskResult<()> {
        self.add_user_with(username, TaskController::new(self.mode))
    }

    /// Registers a user with a pre-built controller (e.g. with observers attached).
    pub fn add_user_with(&mut self, username: &str, tasks: TaskController) -> TaskResult<()> {
        if self.users.contains_key(username) {
            return Err(TaskError::UserExists(username.to_string()));
        }
        self.users
            .insert(username.to_string(), User::new(username, tasks));
        log::info!("User '{}' added.", username);
        Ok(())
    }

    pub fn user(&self, username: &str) -> TaskResult<&User> {
        self.users
            .get(username)
            .ok_or_else(|| TaskError::UnknownUser(username.to_string()))
    }

    pub fn user_mut(&mut self, username: &str) -> TaskResult<&mut User> {
        self.users
            .get_mut(username)
            .ok_or_else(|| TaskError::UnknownUser(username.to_string()))
    }

    pub fn usernames(&self) -> Vec<&str> {
        self.users.keys().map(String::as_str).collect()
    }

    /// Copies `title` from `from` into `to` with the given access level.
    pub fn share_task(
        &mut self,
        from: &str,
        to: &str,
        title: &str,
        permission: Permission,
    ) -> TaskResult<()> {
        self.user(to)?;
        let copy = self
            .user(from)?
            .tasks
            .find(title)
            .map(|t| t.shared_copy(permission))
            .ok_or_else(|| TaskError::NotFound(title.to_string()))?;

        self.user_mut(to)?.tasks.receive_task(copy)?;
        log::info!(
            "Task '{}' shared from '{}' to '{}' with '{}' permission.",
            title,
            from,
            to,
            permission
        );
        Ok(())
    }

    pub fn add_comment(&mut self, username: &str, title: &str, comment: &str) -> TaskResult<()> {
        let user = self.user_mut(username)?;
        if !user.tasks.add_comment(title, comment)? {
            return Err(TaskError::NotFound(title.to_string()));
        }
        Ok(())
    }
}
