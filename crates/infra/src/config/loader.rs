//! Configuration loader
//!
//! Loads application configuration from a file, then applies environment
//! overrides on top.
//!
//! ## Loading Strategy
//! 1. Use the explicit path if one is given, otherwise search the standard paths
//! 2. Fall back to built-in defaults when no file is found
//! 3. Apply environment overrides
//! 4. Validate value ranges
//!
//! ## Environment Variables
//! - `SHIFTPULSE_OUTLIER_THRESHOLD`: Efficiency outlier ceiling in percent
//! - `SHIFTPULSE_METRIC`: Default metric (`utilization` or `efficiency`)
//! - `SHIFTPULSE_CALENDAR_PATH`: Shift calendar file
//! - `SHIFTPULSE_MAPPING_PATH`: Process mapping file
//! - `SHIFTPULSE_LOG_LEVEL`: Log level or `EnvFilter` directive
//! - `SHIFTPULSE_LOG_JSON`: Emit JSON log lines (true/false)
//!
//! ## File Locations
//! The loader searches the following paths (in order):
//! 1. `./shiftpulse.toml` or `./shiftpulse.json` (current working directory)
//! 2. `./config.toml` or `./config.json` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. The same names next to the executable

use std::path::{Path, PathBuf};

use shiftpulse_domain::{Config, MetricType, Result, ShiftPulseError};

/// Overrides `report.outlier_threshold_pct`.
pub const ENV_OUTLIER_THRESHOLD: &str = "SHIFTPULSE_OUTLIER_THRESHOLD";
/// Overrides `report.metric`.
pub const ENV_METRIC: &str = "SHIFTPULSE_METRIC";
/// Overrides `catalogs.shift_calendar_path`.
pub const ENV_CALENDAR_PATH: &str = "SHIFTPULSE_CALENDAR_PATH";
/// Overrides `catalogs.process_mapping_path`.
pub const ENV_MAPPING_PATH: &str = "SHIFTPULSE_MAPPING_PATH";
/// Overrides `logging.level`.
pub const ENV_LOG_LEVEL: &str = "SHIFTPULSE_LOG_LEVEL";
/// Overrides `logging.json`.
pub const ENV_LOG_JSON: &str = "SHIFTPULSE_LOG_JSON";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["shiftpulse.toml", "shiftpulse.json", "config.toml", "config.json"];

/// Load configuration from the first config file found (or defaults) plus
/// environment overrides
///
/// # Errors
/// Returns `ShiftPulseError::Config` if a found file is invalid, an
/// override has an invalid value, or validation fails.
pub fn load() -> Result<Config> {
    load_from_file(None)
}

/// Load configuration from built-in defaults plus environment overrides
///
/// # Errors
/// Returns `ShiftPulseError::Config` if an override has an invalid value or
/// validation fails.
pub fn load_from_env() -> Result<Config> {
    let config = apply_env_overrides(Config::default())?;
    config.validate()?;
    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, searches the standard locations and falls back to
/// defaults when nothing is found. Format is detected by extension.
///
/// # Errors
/// Returns `ShiftPulseError::Config` if:
/// - File not found (when path is specified)
/// - File format is invalid
/// - An environment override is invalid
/// - Validation fails
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(ShiftPulseError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            Some(p)
        }
        None => find_config_file(),
    };

    let config = match config_path {
        Some(config_path) => {
            tracing::info!(path = %config_path.display(), "Loading configuration from file");
            let contents = std::fs::read_to_string(&config_path).map_err(|e| {
                ShiftPulseError::Config(format!("Failed to read config file: {e}"))
            })?;
            parse_config(&contents, &config_path)?
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let config = apply_env_overrides(config)?;
    config.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
///
/// # Errors
/// Returns `ShiftPulseError::Config` if format is invalid or parsing fails.
fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("toml");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| ShiftPulseError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| ShiftPulseError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(ShiftPulseError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Search the standard locations for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn find_config_file() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.clone());
        dirs.push(cwd.join(".."));
        dirs.push(cwd.join("../.."));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.is_file())
}

/// Apply `SHIFTPULSE_*` environment overrides to a configuration
///
/// Unset or empty variables leave the configured value in place.
///
/// # Errors
/// Returns `ShiftPulseError::Config` if a variable has an invalid value.
pub fn apply_env_overrides(mut config: Config) -> Result<Config> {
    if let Some(raw) = env_value(ENV_OUTLIER_THRESHOLD) {
        config.report.outlier_threshold_pct = raw.parse::<f64>().map_err(|e| {
            ShiftPulseError::Config(format!("Invalid {ENV_OUTLIER_THRESHOLD} '{raw}': {e}"))
        })?;
    }

    if let Some(raw) = env_value(ENV_METRIC) {
        config.report.metric = raw.parse::<MetricType>().map_err(ShiftPulseError::Config)?;
    }

    if let Some(raw) = env_value(ENV_CALENDAR_PATH) {
        config.catalogs.shift_calendar_path = Some(PathBuf::from(raw));
    }

    if let Some(raw) = env_value(ENV_MAPPING_PATH) {
        config.catalogs.process_mapping_path = Some(PathBuf::from(raw));
    }

    if let Some(raw) = env_value(ENV_LOG_LEVEL) {
        config.logging.level = raw;
    }

    if let Some(raw) = env_value(ENV_LOG_JSON) {
        config.logging.json = parse_bool(&raw).ok_or_else(|| {
            ShiftPulseError::Config(format!("Invalid {ENV_LOG_JSON} '{raw}': expected true/false"))
        })?;
    }

    Ok(config)
}

/// Non-empty, trimmed value of an environment variable
fn env_value(key: &str) -> Option<String> {
    std::env::var(key).ok().map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

/// Parse a boolean flag
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
