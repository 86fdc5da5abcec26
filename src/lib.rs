//! lintgate - a CLI gate that runs a project's linter inside its virtual
//! environment and normalizes the result
//!
//! This library provides the core functionality for locating a project's
//! isolated dependency environment, running a static-analysis tool under it,
//! and folding the tool's exit status into a binary pass/fail verdict.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod output;
pub mod paths;
pub mod runner;
pub mod venv;
