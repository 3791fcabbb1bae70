//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.chamberdesk/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::StartPage;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_page: Option<StartPage>,
    pub seed_demo_data: Option<bool>,
    pub notification_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: Option<String>,
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_NOTIFICATION_SECS: u64 = 4;
pub const DEFAULT_LOG_FILE: &str = "chamberdesk.log";
pub const DEFAULT_LOG_LEVEL: &str = "debug";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub start_page: StartPage,
    pub seed_demo_data: bool,
    pub notification_secs: u64,
    pub log_file: PathBuf,
    pub log_level: log::LevelFilter,
}

/// Values given on the command line. `None` = flag not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub start_page: Option<StartPage>,
    pub empty: bool,
    pub log_file: Option<PathBuf>,
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

/// Returns the path to `~/.chamberdesk/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".chamberdesk").join("config.toml"))
}

/// Load config from `~/.chamberdesk/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `DeskConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<DeskConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(DeskConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<DeskConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(DeskConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DeskConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_CONTENT: &str = r#"# chamberdesk Configuration
# All settings are optional - defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_page = "catalog"             # "catalog" or "admin" (or CHAMBERDESK_PAGE)
# seed_demo_data = true              # start with the mock chambers and bookings
# notification_secs = 4              # how long a toast stays on screen

# [logging]
# file = "chamberdesk.log"
# level = "debug"                    # "error", "warn", "info", "debug", "trace" (or CHAMBERDESK_LOG)
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_CONTENT) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &DeskConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

/// Same as [`resolve`] with an injectable environment lookup.
pub fn resolve_with_env(
    config: &DeskConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start page: CLI → env → config → default
    let start_page = cli
        .start_page
        .or_else(|| env("CHAMBERDESK_PAGE").and_then(|s| parse_page(&s)))
        .or(config.general.start_page)
        .unwrap_or_default();

    // Seed data: --empty wins, otherwise config → default (on)
    let seed_demo_data = !cli.empty && config.general.seed_demo_data.unwrap_or(true);

    // Log file: CLI → config → default
    let log_file = cli
        .log_file
        .clone()
        .or_else(|| config.logging.file.as_ref().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    // Log level: env → config → default
    let log_level = env("CHAMBERDESK_LOG")
        .or_else(|| config.logging.level.clone())
        .and_then(|s| s.parse().ok())
        .unwrap_or(log::LevelFilter::Debug);

    ResolvedConfig {
        start_page,
        seed_demo_data,
        notification_secs: config
            .general
            .notification_secs
            .unwrap_or(DEFAULT_NOTIFICATION_SECS),
        log_file,
        log_level,
    }
}

fn parse_page(value: &str) -> Option<StartPage> {
    match value.trim().to_ascii_lowercase().as_str() {
        "catalog" => Some(StartPage::Catalog),
        "admin" => Some(StartPage::Admin),
        other => {
            warn!("Ignoring unknown CHAMBERDESK_PAGE value {other:?}");
            None
        }
    }
}
