//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. The linter's own
//! diagnostics are never captured or reformatted; these structs only carry
//! the gate's verdict around them.

use colored::Colorize;
use serde::Serialize;

use crate::runner::GateOutcome;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a gate run
#[derive(Debug, Serialize)]
pub struct GateReport {
    /// Whether the gate passed
    pub passed: bool,
    /// Raw linter exit status; null when the linter died to a signal
    pub raw_status: Option<i32>,
    /// Linter program that was run
    pub program: String,
    /// Directory the linter ran in
    pub project_dir: String,
    /// When the run finished (RFC3339)
    pub finished_at: String,
}

/// Generic operation result for failures and simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl GateReport {
    /// Build a report from a completed gate run
    #[must_use]
    pub fn from_outcome(outcome: &GateOutcome) -> Self {
        Self {
            passed: outcome.status.is_passed(),
            raw_status: outcome.raw_status,
            program: outcome.program.clone(),
            project_dir: outcome.project_dir.to_string_lossy().to_string(),
            finished_at: chrono::Utc::now().to_rfc3339(),
        }
    }

    /// Render the report based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.passed {
            println!("{} {}", "PASS".green().bold(), self.program);
        } else {
            let status = self
                .raw_status
                .map_or_else(|| "killed by signal".to_string(), |code| format!("exit {code}"));
            println!("{} {} ({status})", "FAIL".red().bold(), self.program);
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode.
    ///
    /// Failures go to stderr in human mode so the exit-code consumer still
    /// gets clean stdout.
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => {
                if self.success {
                    println!("{}", self.message);
                } else {
                    eprintln!("{} {}", "error:".red().bold(), self.message);
                }
            },
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
