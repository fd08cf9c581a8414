//! CLI command implementations
//!
//! The boot sequence for `serve` is strict: load configuration, load and
//! validate the seed file, build the store, then hand the listener to the
//! HTTP server. `main.rs` does none of this itself.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::http_server::{HttpServer, HttpServerConfig};
use crate::store::{MemoryStore, SeedFile};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings (host, port, CORS)
    #[serde(default)]
    pub http: HttpServerConfig,

    /// Seed file to load at boot. Absent means an empty catalog.
    #[serde(default)]
    pub seed_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from file.
    ///
    /// A missing file is not an error: every setting has a default, and a
    /// read-only catalog can serve empty.
    pub fn load(path: &Path) -> CliResult<Self> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        Ok(config)
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    init_tracing();
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
        Command::CheckSeed { seed } => check_seed(&seed),
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bakehouse=info,tower_http=info"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Start the HTTP server
///
/// Boot sequence:
/// 1. Configuration load
/// 2. Seed load + validation (when configured)
/// 3. Store construction
/// 4. HTTP activation
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = Config::load(config_path)?;

    let store = match &config.seed_path {
        Some(seed_path) => {
            let seed = SeedFile::load(seed_path)?;
            tracing::info!(
                bakeries = seed.bakeries.len(),
                baked_goods = seed.baked_goods.len(),
                "loaded seed file"
            );
            for bakery in &seed.bakeries {
                tracing::debug!("seeded {}", bakery);
            }
            for good in &seed.baked_goods {
                tracing::debug!("seeded {}", good);
            }
            MemoryStore::from_seed(seed)
        }
        None => {
            tracing::info!("no seed_path configured, serving an empty catalog");
            MemoryStore::new()
        }
    };

    let server = HttpServer::with_config(Arc::new(store), config.http);

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Validate a seed file and print a summary.
pub fn check_seed(seed_path: &Path) -> CliResult<()> {
    let seed = SeedFile::load(seed_path)?;

    println!(
        "seed ok: {} bakeries, {} baked goods",
        seed.bakeries.len(),
        seed.baked_goods.len()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_defaults_when_file_missing() {
        let config = Config::load(Path::new("/nonexistent/bakehouse.json")).unwrap();
        assert_eq!(config.http.port, 5555);
        assert!(config.seed_path.is_none());
    }

    #[test]
    fn test_config_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"http": {{"port": 9000}}, "seed_path": "seed.json"}}"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.http.port, 9000);
        assert_eq!(config.seed_path, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn test_config_rejects_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert_eq!(err.code_str(), "BAKEHOUSE_CLI_CONFIG_ERROR");
    }

    #[test]
    fn test_check_seed_accepts_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"bakeries": [{{"id": 1, "name": "Sweet Spot"}}], "baked_goods": []}}"#
        )
        .unwrap();

        assert!(check_seed(file.path()).is_ok());
    }

    #[test]
    fn test_check_seed_rejects_duplicate_ids() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"bakeries": [{{"id": 1}}, {{"id": 1}}]}}"#).unwrap();

        let err = check_seed(file.path()).unwrap_err();
        assert_eq!(err.code_str(), "BAKEHOUSE_CLI_SEED_ERROR");
    }
}
