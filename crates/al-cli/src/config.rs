//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Work or study hours assumed when none are reported.
    pub default_work_hours: f64,

    /// Sleep threshold below which the report nudges the user.
    pub recommended_sleep_hours: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_work_hours: al_core::DEFAULT_WORK_HOURS,
            recommended_sleep_hours: 7.0,
        }
    }
}

impl Config {
    /// Loads configuration from default locations.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load() -> Result<Self, figment::Error> {
        Self::load_from(None)
    }

    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (AL_*)
        figment = figment.merge(Env::prefixed("AL_"));

        figment.extract()
    }
}

/// Returns the platform-specific config directory for al.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("al"))
}

#[cfg(test)]
#[expect(clippy::float_cmp, reason = "config values carry exact literals")]
mod tests {
    use super::*;

    #[test]
    fn test_dirs_config_path_ends_with_al() {
        let path = dirs_config_path().unwrap();
        assert_eq!(path.file_name().unwrap(), "al");
    }

    #[test]
    fn test_default_config_values() {
        let config = Config::default();
        assert_eq!(config.default_work_hours, 8.0);
        assert_eq!(config.recommended_sleep_hours, 7.0);
    }

    #[test]
    fn test_explicit_config_file_overrides_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config_file = temp.path().join("config.toml");
        std::fs::write(&config_file, "default_work_hours = 6.5\n").unwrap();

        let config = Config::load_from(Some(&config_file)).unwrap();
        assert_eq!(config.default_work_hours, 6.5);
        assert_eq!(config.recommended_sleep_hours, 7.0);
    }

    #[test]
    fn test_config_roundtrips_through_toml() {
        let temp = tempfile::tempdir().unwrap();
        let config_file = temp.path().join("config.toml");
        std::fs::write(
            &config_file,
            "default_work_hours = 4.0\nrecommended_sleep_hours = 8.0\n",
        )
        .unwrap();

        let config = Config::load_from(Some(&config_file)).unwrap();
        assert_eq!(config.default_work_hours, 4.0);
        assert_eq!(config.recommended_sleep_hours, 8.0);
    }
}
