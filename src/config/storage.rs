//! Storage configuration - resolves the data directory and opens the record store.
//!
//! Precedence for the data directory, highest first: an explicit override (the
//! `--data-dir` flag), the `SCHOOL_DATA_DIR` environment variable, `data_dir` from
//! school.toml, and finally `data`.

use super::settings::AppConfig;
use crate::store::JsonFileStore;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable that overrides the configured data directory.
pub const DATA_DIR_ENV: &str = "SCHOOL_DATA_DIR";
/// Data directory used when nothing else is configured.
pub const DEFAULT_DATA_DIR: &str = "data";

/// Picks the data directory from the override, the environment, or the config.
#[must_use]
pub fn resolve_data_dir(config: &AppConfig, override_dir: Option<&Path>) -> PathBuf {
    override_dir.map_or_else(
        || {
            std::env::var(DATA_DIR_ENV)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map_or_else(|| config.data_dir.clone(), PathBuf::from)
        },
        Path::to_path_buf,
    )
}

/// Opens the JSON file store described by `config`.
///
/// The data directory is created by the first write, so `list` and `report` leave
/// the filesystem untouched.
#[must_use]
pub fn open_store(config: &AppConfig, override_dir: Option<&Path>) -> JsonFileStore {
    let data_dir = resolve_data_dir(config, override_dir);
    info!("Using data directory {}", data_dir.display());
    JsonFileStore::new(data_dir).with_lock_settings(config.lock_timeout(), config.stale_lock())
}
