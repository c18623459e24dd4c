//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If a required variable is missing, falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `SHAREHUB_DB_PATH`: Database file path (required)
//! - `SHAREHUB_AUTH_SECRET`: Secret used to verify auth tokens (required)
//! - `SHAREHUB_DB_POOL_SIZE`: Connection pool size
//! - `SHAREHUB_HOST` / `SHAREHUB_PORT`: Listener address
//! - `SHAREHUB_LOG_LEVEL`: Default log filter when `RUST_LOG` is unset
//! - `SHAREHUB_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./config.json` or `./config.toml` (current working directory)
//! 2. `./sharehub.json` or `./sharehub.toml` (current working directory)
//! 3. `../config.json` or `../config.toml` (parent directory)
//! 4. Relative to executable location

use std::path::{Path, PathBuf};
use std::str::FromStr;

use sharehub_domain::{
    AuthConfig, Config, DatabaseConfig, LoggingConfig, Result, ServerConfig, ShareHubError,
};

const CONFIG_FILE_NAMES: [&str; 4] = ["config.json", "config.toml", "sharehub.json", "sharehub.toml"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `ShareHubError::Config` if configuration cannot be loaded from
/// either source, the file format is invalid, or the auth secret is empty.
pub fn load() -> Result<Config> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)?
        }
    };

    ensure_secret(&config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// # Errors
/// Returns `ShareHubError::Config` if required variables are missing
/// or have invalid values.
pub fn load_from_env() -> Result<Config> {
    let path = env_var("SHAREHUB_DB_PATH")?;
    let token_secret = env_var("SHAREHUB_AUTH_SECRET")?;

    let defaults = Config::default();

    let pool_size = env_parse("SHAREHUB_DB_POOL_SIZE", "pool size")?
        .unwrap_or(defaults.database.pool_size);
    let host = std::env::var("SHAREHUB_HOST").unwrap_or(defaults.server.host);
    let port = env_parse("SHAREHUB_PORT", "port")?.unwrap_or(defaults.server.port);
    let level = std::env::var("SHAREHUB_LOG_LEVEL").unwrap_or(defaults.logging.level);
    let json = env_bool("SHAREHUB_LOG_JSON", defaults.logging.json);

    Ok(Config {
        server: ServerConfig { host, port },
        database: DatabaseConfig { path, pool_size },
        auth: AuthConfig { token_secret },
        logging: LoggingConfig { level, json },
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Format is detected by file extension.
///
/// # Errors
/// Returns `ShareHubError::Config` if the file is missing, no file is found
/// when probing, or the contents do not parse.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShareHubError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            ShareHubError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| ShareHubError::Config(format!("Failed to read config file: {}", e)))?;

    parse_config(&contents, &config_path)
}

fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShareHubError::Config(format!("Invalid TOML format: {}", e))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShareHubError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(ShareHubError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe the working directory, its parent, and the executable's directory
/// for a config file. Returns the first one that exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd.clone());
        roots.push(cwd.join(".."));
    }
    if let Some(exe_dir) = std::env::current_exe().ok().and_then(|p| p.parent().map(Path::to_path_buf))
    {
        roots.push(exe_dir);
    }

    roots
        .iter()
        .flat_map(|root| CONFIG_FILE_NAMES.iter().map(move |name| root.join(name)))
        .find(|path| path.exists())
}

fn ensure_secret(config: &Config) -> Result<()> {
    if config.auth.token_secret.trim().is_empty() {
        return Err(ShareHubError::Config("auth.token_secret must not be empty".to_string()));
    }
    Ok(())
}

fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        ShareHubError::Config(format!("Missing required environment variable: {}", key))
    })
}

fn env_parse<T>(key: &str, what: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| ShareHubError::Config(format!("Invalid {}: {}", what, e))),
        Err(_) => Ok(None),
    }
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
