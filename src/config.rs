//! Gate configuration management
//!
//! The gate is designed to run with zero arguments against fixed locations.
//! Those locations are supplied as defaults here and may be pinned by a
//! committed `.lintgate.toml` in the project, or by a user-global
//! `~/.lintgate/config.toml` when the project carries none. The first file
//! found wins as a whole; keys are not merged across files.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::paths;

/// Gate configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GateConfig {
    /// Project location settings
    #[serde(default)]
    pub project: ProjectConfig,
    /// Virtual environment settings
    #[serde(default)]
    pub venv: VenvConfig,
    /// Linter invocation settings
    #[serde(default)]
    pub linter: LinterConfig,
}

/// Project location settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Directory the gate runs in. Relative paths resolve against the
    /// invocation directory; absent means the invocation directory itself.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Virtual environment settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenvConfig {
    /// Venv directory name, relative to the project directory
    #[serde(default = "default_venv_dir")]
    pub dir: String,
}

fn default_venv_dir() -> String {
    paths::DEFAULT_VENV_DIR.to_string()
}

impl Default for VenvConfig {
    fn default() -> Self {
        Self {
            dir: default_venv_dir(),
        }
    }
}

/// Linter invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinterConfig {
    /// Linter program name, resolved inside the venv bin directory first
    #[serde(default = "default_linter_program")]
    pub program: String,
    /// Arguments passed to the linter
    #[serde(default = "default_linter_args")]
    pub args: Vec<String>,
}

fn default_linter_program() -> String {
    "flake8".to_string()
}

fn default_linter_args() -> Vec<String> {
    vec![".".to_string()]
}

impl Default for LinterConfig {
    fn default() -> Self {
        Self {
            program: default_linter_program(),
            args: default_linter_args(),
        }
    }
}

impl GateConfig {
    /// Load config for a project, or defaults if no config file exists.
    ///
    /// Looks for `<project>/.lintgate.toml` first, then the global
    /// `~/.lintgate/config.toml`.
    #[must_use]
    pub fn load(project_dir: &Path) -> Self {
        let candidates = [paths::project_config(project_dir), paths::global_config()];
        candidates.iter().find(|p| p.exists()).map_or_else(Self::default, |p| Self::load_file(p))
    }

    /// Load config from a specific file, falling back to defaults when the
    /// file is unreadable or not valid TOML.
    #[must_use]
    pub fn load_file(path: &Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|content| match toml::from_str(&content) {
                Ok(config) => Some(config),
                Err(err) => {
                    log::warn!("ignoring unparseable config {}: {err}", path.display());
                    None
                },
            })
            .unwrap_or_default()
    }

    /// Resolve the effective project directory against the invocation
    /// directory.
    #[must_use]
    pub fn project_dir(&self, invocation_dir: &Path) -> PathBuf {
        match &self.project.dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => invocation_dir.join(dir),
            None => invocation_dir.to_path_buf(),
        }
    }
}
