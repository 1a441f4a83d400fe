// File: ./src/context.rs
//! Where taskpad keeps its files.
//!
//! Config and log locations come from an `AppContext` handed to whoever does
//! filesystem IO. `StandardContext` serves the binary (platform directories,
//! or everything under `--root`); `TestContext` serves tests with a throwaway
//! directory.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

pub trait AppContext: Send + Sync + std::fmt::Debug {
    fn get_data_dir(&self) -> Result<PathBuf>;
    fn get_config_dir(&self) -> Result<PathBuf>;

    fn get_config_file_path(&self) -> Result<PathBuf> {
        Ok(self.get_config_dir()?.join("config.toml"))
    }

    fn get_log_file_path(&self) -> Option<PathBuf> {
        self.get_data_dir().ok().map(|p| p.join("taskpad.log"))
    }
}

fn create_dir(path: PathBuf) -> Result<PathBuf> {
    std::fs::create_dir_all(&path)
        .with_context(|| format!("Failed to create directory: {:?}", path))?;
    Ok(path)
}

// --- Binary ---

#[derive(Clone, Debug, Default)]
pub struct StandardContext {
    root: Option<PathBuf>,
}

impl StandardContext {
    /// `Some(root)` puts data under `root/data` and config under `root/config`.
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    fn resolve(&self, subdir: &str, platform: fn(&ProjectDirs) -> &Path) -> Result<PathBuf> {
        let path = match &self.root {
            Some(root) => root.join(subdir),
            None => ProjectDirs::from("org", "taskpad", "taskpad")
                .map(|dirs| platform(&dirs).to_path_buf())
                .ok_or_else(|| anyhow::anyhow!("No home directory"))?,
        };
        create_dir(path)
    }
}

impl AppContext for StandardContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        self.resolve("data", ProjectDirs::data_dir)
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        self.resolve("config", ProjectDirs::config_dir)
    }
}

// --- Tests ---

/// A uniquely named temp directory, deleted again on drop.
#[derive(Clone, Debug)]
pub struct TestContext {
    pub root: PathBuf,
}

impl TestContext {
    pub fn new() -> Self {
        let root = std::env::temp_dir().join(format!("taskpad_test_{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&root).expect("failed to create TestContext temp dir");
        Self { root }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AppContext for TestContext {
    fn get_data_dir(&self) -> Result<PathBuf> {
        create_dir(self.root.join("data"))
    }

    fn get_config_dir(&self) -> Result<PathBuf> {
        create_dir(self.root.join("config"))
    }
}

impl Drop for TestContext {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}
