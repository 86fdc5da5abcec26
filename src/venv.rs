//! Virtual environment discovery and activation
//!
//! A `Virtualenv` is the isolated dependency environment the linter must run
//! under. Discovery validates the on-disk layout; `activation()` computes the
//! environment-variable view that sourcing `bin/activate` would produce, so
//! it can be applied to the linter subprocess without mutating the gate's own
//! process environment.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::paths;

/// Errors that can occur while activating a virtual environment
#[derive(Debug, Error)]
pub enum ActivateError {
    /// The venv directory does not exist
    #[error("virtual environment not found: {}", .0.display())]
    Missing(PathBuf),

    /// The venv directory exists but is structurally broken
    #[error("virtual environment at {path} is corrupt: {msg}", path = .0.display(), msg = .1)]
    Corrupt(PathBuf, String),

    /// The inherited PATH could not be extended with the venv bin directory
    #[error("cannot build activated PATH: {0}")]
    Path(#[from] env::JoinPathsError),
}

/// A validated virtual environment rooted at a directory
#[derive(Debug, Clone)]
pub struct Virtualenv {
    /// Root directory of the venv
    root: PathBuf,
}

impl Virtualenv {
    /// Locate and validate the venv at `<project_dir>/<dir_name>`.
    ///
    /// The directory must exist and look like a real environment: a
    /// `pyvenv.cfg` marker, an executable directory, and a python
    /// interpreter inside it.
    pub fn discover(project_dir: &Path, dir_name: &str) -> Result<Self, ActivateError> {
        let root = paths::venv_dir(project_dir, dir_name);

        if !root.is_dir() {
            return Err(ActivateError::Missing(root));
        }
        if !paths::pyvenv_cfg(&root).is_file() {
            return Err(ActivateError::Corrupt(root, "missing pyvenv.cfg".to_string()));
        }
        if !paths::venv_bin_dir(&root).is_dir() {
            return Err(ActivateError::Corrupt(root, "missing executable directory".to_string()));
        }
        if !paths::venv_python(&root).is_file() {
            return Err(ActivateError::Corrupt(root, "missing python interpreter".to_string()));
        }

        Ok(Self { root })
    }

    /// Get the venv root directory
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Get the venv executable directory
    #[must_use]
    pub fn bin_dir(&self) -> PathBuf {
        paths::venv_bin_dir(&self.root)
    }

    /// Resolve a tool name to its venv-local executable path.
    ///
    /// The path is not checked for existence; callers fall back to PATH
    /// lookup under the activated environment when the tool is not
    /// installed in the venv.
    #[must_use]
    pub fn tool_path(&self, program: &str) -> PathBuf {
        self.bin_dir().join(program)
    }

    /// Compute the activation environment for this venv.
    ///
    /// Equivalent to what `source bin/activate` exports: `VIRTUAL_ENV` set
    /// to the root, the bin directory prepended to the inherited `PATH`,
    /// and `PYTHONHOME` dropped.
    pub fn activation(&self) -> Result<Activation, ActivateError> {
        let mut entries = vec![self.bin_dir()];
        if let Some(inherited) = env::var_os("PATH") {
            entries.extend(env::split_paths(&inherited));
        }
        let path = env::join_paths(entries)?;

        Ok(Activation {
            virtual_env: self.root.clone().into_os_string(),
            path,
        })
    }
}

/// Environment-variable view of an activated venv
#[derive(Debug, Clone)]
pub struct Activation {
    /// Value for `VIRTUAL_ENV`
    virtual_env: OsString,
    /// Value for `PATH`, venv bin first
    path: OsString,
}

impl Activation {
    /// Get the `VIRTUAL_ENV` value
    #[must_use]
    pub const fn virtual_env(&self) -> &OsString {
        &self.virtual_env
    }

    /// Get the activated `PATH` value
    #[must_use]
    pub const fn path(&self) -> &OsString {
        &self.path
    }

    /// Apply the activation to a subprocess.
    ///
    /// Only the child sees the activated environment; the gate's own
    /// process environment is left untouched.
    pub fn apply(&self, command: &mut Command) {
        command
            .env("VIRTUAL_ENV", &self.virtual_env)
            .env("PATH", &self.path)
            .env_remove("PYTHONHOME");
    }
}
