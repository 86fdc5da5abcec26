//! Centralized path definitions for lintgate
//!
//! This module provides a single source of truth for all filesystem paths used by lintgate.
//!
//! ## Layout
//!
//! ### Per-Project (Project Root)
//!
//! ```text
//! project/
//! ├── .lintgate.toml              # Committed gate config (optional)
//! └── .venv/                      # Isolated dependency environment
//!     ├── pyvenv.cfg
//!     └── bin/                    # Scripts/ on Windows
//!         ├── python
//!         └── flake8
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.lintgate/
//! └── config.toml                 # Fallback gate config
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Project-level paths (per-project)
// =============================================================================

/// Project configuration filename
pub const LINTGATE_TOML: &str = ".lintgate.toml";

/// Default virtual environment directory name
pub const DEFAULT_VENV_DIR: &str = ".venv";

/// Marker file every CPython-style venv carries at its root
const PYVENV_CFG: &str = "pyvenv.cfg";

/// Executable directory inside a venv
#[cfg(not(windows))]
const VENV_BIN_DIR: &str = "bin";
#[cfg(windows)]
const VENV_BIN_DIR: &str = "Scripts";

/// Interpreter name inside the venv bin directory
#[cfg(not(windows))]
const VENV_PYTHON: &str = "python";
#[cfg(windows)]
const VENV_PYTHON: &str = "python.exe";

/// Get path to a project's `.lintgate.toml` config file.
#[must_use]
pub fn project_config(project_dir: &Path) -> PathBuf {
    project_dir.join(LINTGATE_TOML)
}

/// Get path to a project's virtual environment directory.
#[must_use]
pub fn venv_dir(project_dir: &Path, dir_name: &str) -> PathBuf {
    project_dir.join(dir_name)
}

/// Get path to the `pyvenv.cfg` marker inside a venv.
#[must_use]
pub fn pyvenv_cfg(venv_root: &Path) -> PathBuf {
    venv_root.join(PYVENV_CFG)
}

/// Get path to the executable directory inside a venv.
///
/// `bin/` on Unix, `Scripts/` on Windows.
#[must_use]
pub fn venv_bin_dir(venv_root: &Path) -> PathBuf {
    venv_root.join(VENV_BIN_DIR)
}

/// Get path to the python interpreter inside a venv.
#[must_use]
pub fn venv_python(venv_root: &Path) -> PathBuf {
    venv_bin_dir(venv_root).join(VENV_PYTHON)
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".lintgate";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global lintgate directory.
///
/// Returns `~/.lintgate/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.lintgate/config.toml`.
/// Consulted only when the project carries no `.lintgate.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}
