//! `.ircsv.toml` configuration files
//!
//! Configuration files can be placed in:
//! - User home directory: `~/.ircsv.toml` (user defaults)
//! - Project directory: `./.ircsv.toml` (project defaults)
//!
//! Precedence order (highest to lowest):
//! 1. Command-line arguments (`--base-path`, `--parallel`, `--dataset`)
//! 2. Project config (`./.ircsv.toml`)
//! 3. User config (`~/.ircsv.toml`)
//! 4. Built-in defaults

use anyhow::{Context, Result};
use colored::Colorize;
use ircsv_backend::DatasetDescriptor;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// File name looked up in the home and working directories
pub const CONFIG_FILE_NAME: &str = ".ircsv.toml";

pub const DEFAULT_CONFIG: &str = r#"# ircsv Configuration File

# Directory holding one subdirectory per collection; CSVs are written here
# base_path = "./collections"

# Convert datasets concurrently
# parallel = false

# Datasets converted by `ircsv run` (defaults: cran, CISI, MED, NPL)
# [[datasets]]
# name = "cran"
# format = "tagged"
#
# [[datasets]]
# name = "NPL"
# stem = "npl"
# format = "numeric"
"#;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Root directory of the collections
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_path: Option<PathBuf>,

    /// Convert datasets concurrently
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,

    /// Datasets to convert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasets: Option<Vec<DatasetDescriptor>>,
}

impl Config {
    /// Load configuration from file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Find and load configuration files
    /// Returns (`user_config`, `project_config`)
    pub fn discover_configs() -> (Option<Self>, Option<Self>) {
        let user_config = user_config_path().and_then(|path| Self::load_optional(&path, "user"));
        let project_config = Self::load_optional(&project_config_path(), "project");
        (user_config, project_config)
    }

    fn load_optional(path: &Path, kind: &str) -> Option<Self> {
        if !path.exists() {
            return None;
        }
        match Self::load_from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!(
                    "{} Failed to load {kind} config from {}: {e:#}",
                    "Warning:".yellow().bold(),
                    path.display()
                );
                None
            }
        }
    }

    /// Merge configs with precedence: project config > user config > defaults
    pub fn merge(user_config: Option<Self>, project_config: Option<Self>) -> Self {
        let mut merged = user_config.unwrap_or_default();

        if let Some(project) = project_config {
            if project.base_path.is_some() {
                merged.base_path = project.base_path;
            }
            if project.parallel.is_some() {
                merged.parallel = project.parallel;
            }
            if project.datasets.is_some() {
                merged.datasets = project.datasets;
            }
        }

        merged
    }

    /// Discover and merge in one step
    pub fn load() -> Self {
        let (user_config, project_config) = Self::discover_configs();
        Self::merge(user_config, project_config)
    }
}

/// `~/.ircsv.toml`, if the home directory is known
pub fn user_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}

/// `./.ircsv.toml`
pub fn project_config_path() -> PathBuf {
    PathBuf::from(CONFIG_FILE_NAME)
}
