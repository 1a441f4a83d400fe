// File: ./src/config.rs
// Handles configuration loading, saving, and defaults.
use crate::context::AppContext;
use crate::model::Priority;
use anyhow::{Context, Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use strum::EnumIter;

fn default_true() -> bool {
    true
}

fn default_due_soon_days() -> u32 {
    3
}

fn default_priority() -> Option<Priority> {
    Some(Priority::Medium)
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, EnumIter)]
pub enum AppTheme {
    #[default]
    Default,
    Dark,
    Light,
}

impl fmt::Display for AppTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppTheme::Default => write!(f, "Default"),
            AppTheme::Dark => write!(f, "Dark Mode"),
            AppTheme::Light => write!(f, "Light Mode"),
        }
    }
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    /// Reject blank input and unknown titles. `false` selects the lenient path.
    #[serde(default = "default_true")]
    pub validation: bool,
    /// Undo depth cap. Unset keeps every snapshot.
    #[serde(default)]
    pub history_limit: Option<usize>,
    #[serde(default = "default_due_soon_days")]
    pub due_soon_days: u32,
    /// Priority given to tasks added without one (CLI / TUI only).
    #[serde(default = "default_priority")]
    pub default_priority: Option<Priority>,
    #[serde(default)]
    pub theme: AppTheme,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Tasks file imported at startup.
    #[serde(default)]
    pub import_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validation: true,
            history_limit: None,
            due_soon_days: 3,
            default_priority: Some(Priority::Medium),
            theme: AppTheme::default(),
            log_level: "info".to_string(),
            import_file: None,
        }
    }
}

impl Config {
    /// Load the configuration from disk using an explicit context.
    pub fn load(ctx: &dyn AppContext) -> Result<Self> {
        let path = ctx.get_config_file_path()?;
        Self::load_from(&path)
    }

    /// Load from an explicit path (the `--config` flag).
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found"));
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;

        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file '{}'", path.display()))?;

        Ok(config)
    }

    /// Loads the config, falling back to defaults only when the file is missing.
    /// Syntax or permission problems are still reported.
    pub fn load_or_default(ctx: &dyn AppContext) -> Result<Self> {
        match Self::load(ctx) {
            Ok(c) => Ok(c),
            Err(e) if Self::is_missing_config_error(&e) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }

    /// Detects whether an error means the config file was missing.
    pub fn is_missing_config_error(err: &Error) -> bool {
        if err.to_string().contains("Config file not found") {
            return true;
        }

        for cause in err.chain() {
            if let Some(io_err) = cause.downcast_ref::<std::io::Error>()
                && io_err.kind() == std::io::ErrorKind::NotFound
            {
                return true;
            }
        }

        false
    }

    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }

    /// Save configuration using an explicit context.
    pub fn save(&self, ctx: &dyn AppContext) -> Result<()> {
        let path = ctx.get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        atomic_write(&path, toml_str)
    }

    pub fn get_path_string(ctx: &dyn AppContext) -> Result<String> {
        let path = ctx.get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }
}

/// Writes to a sibling temp file, then renames over the target.
pub fn atomic_write<P: AsRef<Path>, C: AsRef<[u8]>>(path: P, contents: C) -> Result<()> {
    let path = path.as_ref();
    let tmp_path = path.with_extension("tmp");
    fs::write(&tmp_path, contents)?;
    fs::rename(tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TestContext;

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let ctx = TestContext::new();
        let err = Config::load(&ctx).unwrap_err();
        assert!(Config::is_missing_config_error(&err));
        assert_eq!(Config::load_or_default(&ctx).unwrap(), Config::default());
    }

    #[test]
    fn test_partial_file_uses_serde_defaults() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "validation = false\ntheme = \"Dark\"\n").unwrap();

        let cfg = Config::load(&ctx).unwrap();
        assert!(!cfg.validation);
        assert_eq!(cfg.theme, AppTheme::Dark);
        assert_eq!(cfg.due_soon_days, 3);
        assert_eq!(cfg.default_priority, Some(Priority::Medium));
    }

    #[test]
    fn test_syntax_error_is_not_missing() {
        let ctx = TestContext::new();
        let path = ctx.get_config_file_path().unwrap();
        fs::write(&path, "validation = [").unwrap();
        let err = Config::load_or_default(&ctx).unwrap_err();
        assert!(!Config::is_missing_config_error(&err));
    }

    #[test]
    fn test_save_roundtrip() {
        let ctx = TestContext::new();
        let cfg = Config {
            history_limit: Some(10),
            theme: AppTheme::Light,
            ..Config::default()
        };
        cfg.save(&ctx).unwrap();
        assert_eq!(Config::load(&ctx).unwrap(), cfg);
    }

    #[test]
    fn test_log_level_parse() {
        let cfg = Config {
            log_level: "debug".into(),
            ..Config::default()
        };
        assert_eq!(cfg.log_level_filter(), log::LevelFilter::Debug);
        let bad = Config {
            log_level: "loud".into(),
            ..Config::default()
        };
        assert_eq!(bad.log_level_filter(), log::LevelFilter::Info);
    }
}
