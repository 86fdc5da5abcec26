//! The lint gate runner
//!
//! Runs the configured linter inside the project's virtual environment and
//! folds its exit status into a binary verdict. The sequence is strictly
//! linear: validate the project directory, activate the venv, run the linter
//! to completion, normalize the status. Any failure before the linter starts
//! is fatal and guarantees the linter was never invoked.

use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

use crate::config::GateConfig;
use crate::venv::{ActivateError, Virtualenv};

/// Errors that can occur before the linter produces a verdict
#[derive(Debug, Error)]
pub enum GateError {
    /// Project directory does not exist
    #[error("project directory not found: {}", .0.display())]
    DirectoryNotFound(PathBuf),

    /// Project path exists but is not a directory
    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// Virtual environment could not be activated
    #[error(transparent)]
    Activate(#[from] ActivateError),

    /// Linter process could not be launched
    #[error("failed to launch linter `{program}`: {source}")]
    Spawn {
        /// The program that failed to launch
        program: String,
        /// The underlying launch error
        source: std::io::Error,
    },
}

/// Binary verdict of a gate run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateStatus {
    /// Linter exited 0
    Passed,
    /// Linter exited non-zero (or died to a signal)
    Failed,
}

impl GateStatus {
    /// Process exit code for this verdict.
    ///
    /// Every linter failure normalizes to 1, independent of the tool's
    /// specific non-zero status.
    #[must_use]
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Passed => 0,
            Self::Failed => 1,
        }
    }

    /// Whether the gate passed
    #[must_use]
    pub const fn is_passed(self) -> bool {
        matches!(self, Self::Passed)
    }
}

/// Outcome of a completed gate run
#[derive(Debug, Clone)]
pub struct GateOutcome {
    /// The normalized verdict
    pub status: GateStatus,
    /// Raw linter exit status; `None` when the linter died to a signal
    pub raw_status: Option<i32>,
    /// Program that was run
    pub program: String,
    /// Directory the linter ran in
    pub project_dir: PathBuf,
}

/// A configured, ready-to-run lint gate
#[derive(Debug)]
pub struct Gate {
    project_dir: PathBuf,
    venv_dir: String,
    program: String,
    args: Vec<String>,
}

impl Gate {
    /// Build a gate from config, resolving the project directory against
    /// the invocation directory.
    #[must_use]
    pub fn from_config(config: &GateConfig, invocation_dir: &Path) -> Self {
        Self {
            project_dir: config.project_dir(invocation_dir),
            venv_dir: config.venv.dir.clone(),
            program: config.linter.program.clone(),
            args: config.linter.args.clone(),
        }
    }

    /// Get the directory the gate will run in
    #[must_use]
    pub fn project_dir(&self) -> &Path {
        &self.project_dir
    }

    /// Run the gate to completion.
    ///
    /// Blocks until the linter terminates. The linter's stdout/stderr are
    /// inherited and pass through untouched; only the exit status is
    /// consulted.
    pub fn run(&self) -> Result<GateOutcome, GateError> {
        if !self.project_dir.exists() {
            return Err(GateError::DirectoryNotFound(self.project_dir.clone()));
        }
        if !self.project_dir.is_dir() {
            return Err(GateError::NotADirectory(self.project_dir.clone()));
        }

        let venv = Virtualenv::discover(&self.project_dir, &self.venv_dir)?;
        let activation = venv.activation()?;

        // Prefer the venv-local tool; fall back to PATH lookup under the
        // activated environment for linters installed elsewhere.
        let venv_tool = venv.tool_path(&self.program);
        let program: PathBuf = if venv_tool.is_file() {
            venv_tool
        } else {
            PathBuf::from(&self.program)
        };

        log::debug!(
            "running {} {:?} in {}",
            program.display(),
            self.args,
            self.project_dir.display()
        );

        let mut command = Command::new(&program);
        command.args(&self.args).current_dir(&self.project_dir);
        activation.apply(&mut command);

        let status = command.status().map_err(|source| GateError::Spawn {
            program: program.display().to_string(),
            source,
        })?;

        let outcome = GateOutcome {
            status: if status.success() { GateStatus::Passed } else { GateStatus::Failed },
            raw_status: status.code(),
            program: program.display().to_string(),
            project_dir: self.project_dir.clone(),
        };
        log::debug!("linter exited with {:?}", outcome.raw_status);

        Ok(outcome)
    }
}
