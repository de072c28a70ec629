//! Application settings loading from school.toml
//!
//! Every key is optional. A missing file is not an error: the defaults describe a
//! `data/` directory next to the working directory and the 2024-2025 academic year.

use crate::{
    entities::enrollment::DEFAULT_ACADEMIC_YEAR,
    errors::{Error, Result},
    store::{DEFAULT_LOCK_TIMEOUT, DEFAULT_STALE_LOCK},
};
use serde::Deserialize;
use std::{
    path::{Path, PathBuf},
    time::Duration,
};

/// Default config file name, looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "school.toml";

/// Configuration structure representing the entire school.toml file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Directory holding one JSON file per collection
    pub data_dir: PathBuf,
    /// Academic year stamped on new enrollments
    pub academic_year: String,
    /// How long a write waits for another writer's lock, in milliseconds
    pub lock_timeout_ms: u64,
    /// Age in seconds after which a leftover lock file is broken
    pub stale_lock_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(super::storage::DEFAULT_DATA_DIR),
            academic_year: DEFAULT_ACADEMIC_YEAR.to_string(),
            lock_timeout_ms: u64::try_from(DEFAULT_LOCK_TIMEOUT.as_millis()).unwrap_or(u64::MAX),
            stale_lock_secs: DEFAULT_STALE_LOCK.as_secs(),
        }
    }
}

impl AppConfig {
    #[must_use]
    pub const fn lock_timeout(&self) -> Duration {
        Duration::from_millis(self.lock_timeout_ms)
    }

    #[must_use]
    pub const fn stale_lock(&self) -> Duration {
        Duration::from_secs(self.stale_lock_secs)
    }
}

/// Loads settings from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid or contains unknown keys
/// - `academic_year` is blank
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    tracing::debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;
    parse_config(&contents)
}

/// Loads settings from `path` if the file exists, defaults otherwise.
pub fn load_config_or_default<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let path_ref = path.as_ref();
    if path_ref.exists() {
        load_config(path_ref)
    } else {
        tracing::info!(
            "No config file at {}, using defaults",
            path_ref.display()
        );
        Ok(AppConfig::default())
    }
}

fn parse_config(contents: &str) -> Result<AppConfig> {
    let config: AppConfig = toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse school.toml: {e}"),
    })?;
    if config.academic_year.trim().is_empty() {
        return Err(Error::Config {
            message: "academic_year must not be empty".to_string(),
        });
    }
    Ok(config)
}
