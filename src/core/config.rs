//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.roamgenie/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RoamConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub datasets: DatasetConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub default_passport: Option<String>,
    pub offline: Option<bool>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DatasetConfig {
    pub primary_url: Option<String>,
    pub secondary_url: Option<String>,
    pub fetch_timeout_secs: Option<u64>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_PRIMARY_URL: &str =
    "https://raw.githubusercontent.com/ilyankou/passport-index-dataset/master/passport-index-tidy.csv";
pub const DEFAULT_SECONDARY_URL: &str =
    "https://raw.githubusercontent.com/datasets/passport-index/main/data/passport-index-tidy.csv";
pub const DEFAULT_FETCH_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub passport: Option<String>,
    pub offline: bool,
    pub primary_url: String,
    pub secondary_url: String,
    pub fetch_timeout_secs: u64,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            passport: None,
            offline: false,
            primary_url: DEFAULT_PRIMARY_URL.to_string(),
            secondary_url: DEFAULT_SECONDARY_URL.to_string(),
            fetch_timeout_secs: DEFAULT_FETCH_TIMEOUT_SECS,
        }
    }
}

/// Values given on the command line. `None`/`false` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub passport: Option<String>,
    pub offline: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.roamgenie/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roamgenie").join("config.toml"))
}

/// Load config from `~/.roamgenie/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RoamConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RoamConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RoamConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RoamConfig::default());
    }

    load_config_from(&path)
}

/// Load and parse a config file at an explicit path.
pub fn load_config_from(path: &Path) -> Result<RoamConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RoamConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# RoamGenie Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# default_passport = "India"         # Or set ROAMGENIE_PASSPORT env var
# offline = false                    # Skip remote datasets, use built-in lists

# [datasets]
# primary_url = "https://raw.githubusercontent.com/ilyankou/passport-index-dataset/master/passport-index-tidy.csv"
# secondary_url = "https://raw.githubusercontent.com/datasets/passport-index/main/data/passport-index-tidy.csv"
# fetch_timeout_secs = 10
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &RoamConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`], reading environment variables through `env`.
pub fn resolve_with_env<F>(config: &RoamConfig, cli: &CliOverrides, env: F) -> ResolvedConfig
where
    F: Fn(&str) -> Option<String>,
{
    // Passport: CLI → env → config
    let passport = cli
        .passport
        .clone()
        .or_else(|| env("ROAMGENIE_PASSPORT"))
        .or_else(|| config.general.default_passport.clone());

    // Offline: any layer can switch it on
    let offline = cli.offline
        || env("ROAMGENIE_OFFLINE").is_some_and(|v| matches!(v.trim(), "1" | "true" | "yes"))
        || config.general.offline.unwrap_or(false);

    // Dataset URLs: env → config → default
    let primary_url = env("ROAMGENIE_PRIMARY_URL")
        .or_else(|| config.datasets.primary_url.clone())
        .unwrap_or_else(|| DEFAULT_PRIMARY_URL.to_string());

    let secondary_url = env("ROAMGENIE_SECONDARY_URL")
        .or_else(|| config.datasets.secondary_url.clone())
        .unwrap_or_else(|| DEFAULT_SECONDARY_URL.to_string());

    let fetch_timeout_secs = match env("ROAMGENIE_FETCH_TIMEOUT_SECS") {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            warn!("Ignoring invalid ROAMGENIE_FETCH_TIMEOUT_SECS={:?}", raw);
            config
                .datasets
                .fetch_timeout_secs
                .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS)
        }),
        None => config
            .datasets
            .fetch_timeout_secs
            .unwrap_or(DEFAULT_FETCH_TIMEOUT_SECS),
    };

    ResolvedConfig {
        passport,
        offline,
        primary_url,
        secondary_url,
        fetch_timeout_secs,
    }
}
