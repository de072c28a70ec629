/// Settings loading from school.toml
pub mod settings;

/// Data directory resolution and store construction
pub mod storage;

pub use settings::AppConfig;

use crate::errors::Result;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "SCHOOL_CONFIG";

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Named by `--config` or `SCHOOL_CONFIG`; the file must exist.
    Named(PathBuf),
    /// The default `school.toml`; a missing file means defaults.
    Default(PathBuf),
}

/// Picks the config file: `explicit` if given, else `from_env`, else `school.toml`.
#[must_use]
pub fn config_source(explicit: Option<&Path>, from_env: Option<PathBuf>) -> ConfigSource {
    explicit
        .map(Path::to_path_buf)
        .or_else(|| from_env.filter(|p| !p.as_os_str().is_empty()))
        .map_or_else(
            || ConfigSource::Default(PathBuf::from(settings::DEFAULT_CONFIG_FILE)),
            ConfigSource::Named,
        )
}

/// Loads the configuration from `source`.
pub fn load_from(source: &ConfigSource) -> Result<AppConfig> {
    match source {
        ConfigSource::Named(path) => settings::load_config(path),
        ConfigSource::Default(path) => settings::load_config_or_default(path),
    }
}

/// Loads the application configuration.
///
/// The path is `explicit` if given, else `SCHOOL_CONFIG`, else `school.toml`.
pub fn load_app_configuration(explicit: Option<&Path>) -> Result<AppConfig> {
    let from_env = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
    load_from(&config_source(explicit, from_env))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;
    use tempfile::TempDir;

    #[test]
    fn test_flag_beats_env() {
        let source = config_source(Some(Path::new("a.toml")), Some(PathBuf::from("b.toml")));
        assert_eq!(source, ConfigSource::Named(PathBuf::from("a.toml")));
    }

    #[test]
    fn test_env_path_is_named() {
        let source = config_source(None, Some(PathBuf::from("b.toml")));
        assert_eq!(source, ConfigSource::Named(PathBuf::from("b.toml")));
        assert_eq!(
            config_source(None, None),
            ConfigSource::Default(PathBuf::from("school.toml"))
        );
    }

    #[test]
    fn test_missing_env_named_file_is_error() -> Result<()> {
        let dir = TempDir::new()?;
        let missing = dir.path().join("elsewhere.toml");

        let err = load_from(&config_source(None, Some(missing))).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));

        let defaults = load_from(&ConfigSource::Default(dir.path().join("school.toml")))?;
        assert_eq!(defaults, AppConfig::default());
        Ok(())
    }
}
