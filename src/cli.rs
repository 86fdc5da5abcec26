//! CLI definitions and entry point

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use crate::commands;
use lintgate::output::OutputMode;

/// lintgate - run a project's linter inside its virtualenv, pass or fail
#[derive(Parser, Debug)]
#[command(
    name = "lintgate",
    version,
    about = "Lint gate for CI and pre-commit workflows",
    long_about = "Run a project's linter inside its virtual environment and gate on the result.\n\n\
                  Exit 0 when the linter passes, 1 when it reports issues (any non-zero\n\
                  linter status), and 2 when the gate itself cannot run."
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the lint gate (the default when no subcommand is given)
    Run,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::Run) | None => commands::gate(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("lintgate v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(ExitCode::SUCCESS)
        },
    }
}
