//! Run the lint gate and map its verdict to a process exit code

use std::process::ExitCode;

use lintgate::config::GateConfig;
use lintgate::output::{GateReport, OperationResult, OutputMode};
use lintgate::runner::Gate;

/// Setup-failure exit code, distinct from the normalized lint failure (1)
const SETUP_FAILURE: u8 = 2;

/// Run the lint gate in the invocation directory (or the configured
/// project directory) and return the process exit code.
pub fn gate(mode: OutputMode) -> anyhow::Result<ExitCode> {
    let invocation_dir = std::env::current_dir()?;
    let config = GateConfig::load(&invocation_dir);
    let gate = Gate::from_config(&config, &invocation_dir);

    log::debug!(
        "gating {} with {}",
        gate.project_dir().display(),
        config.linter.program
    );

    match gate.run() {
        Ok(outcome) => {
            GateReport::from_outcome(&outcome).render(mode);
            Ok(ExitCode::from(outcome.status.exit_code()))
        },
        Err(err) => {
            let result = OperationResult {
                success: false,
                message: err.to_string(),
            };
            result.render(mode);
            Ok(ExitCode::from(SETUP_FAILURE))
        },
    }
}
