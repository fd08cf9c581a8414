//! CLI module for bakehouse
//!
//! Provides command-line interface for:
//! - serve: boot the store from config + seed and serve HTTP
//! - check-seed: one-shot seed file validation

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{check_seed, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
