//! CLI argument definitions using clap
//!
//! Commands:
//! - bakehouse serve --config <path>
//! - bakehouse check-seed --seed <path>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// bakehouse - A read-only bakery catalog HTTP API
#[derive(Parser, Debug)]
#[command(name = "bakehouse")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./bakehouse.json")]
        config: PathBuf,
    },

    /// Validate a seed file and exit
    CheckSeed {
        /// Path to the seed file
        #[arg(long)]
        seed: PathBuf,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
