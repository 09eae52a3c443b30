use danraku_engine::{DanrakuOptions, JisageOptions, YakumonoOptions};
use log::debug;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// The `config.toml` file: one table per rule.
///
/// ```toml
/// [jisage]
/// ignore_alphabet = false
/// ignore_dash = true
///
/// [yakumono]
/// spacing_enabled = true
/// byte_sensitive = true
/// ```
///
/// Missing keys take their defaults; unknown keys are an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub jisage: JisageOptions,
    pub yakumono: YakumonoOptions,
}

impl Config {
    /// The option snapshot handed to the engine.
    pub fn options(&self) -> DanrakuOptions {
        DanrakuOptions {
            jisage: self.jisage,
            yakumono: self.yakumono,
        }
    }

    /// Loads `config_path`, expanding `~` and environment variables first.
    /// A missing file is `Ok(None)`.
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = Self::expand_path(config_path.as_ref())
            .unwrap_or_else(|| config_path.as_ref().to_path_buf());
        if !config_path.exists() {
            debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let content = std::fs::read_to_string(&config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.clone(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.clone(),
                source,
            })?;

        debug!("loaded config from {}: {config:?}", config_path.display());
        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/danraku");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        // Should not contain tilde anymore
        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/danraku/config.toml"));
    }

    #[test]
    fn test_defaults_match_engine_defaults() {
        assert_eq!(Config::default().options(), DanrakuOptions::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config: Config = toml::from_str(
            r#"
[jisage]
ignore_alphabet = true
"#,
        )
        .unwrap();

        assert!(config.jisage.ignore_alphabet);
        assert!(config.jisage.ignore_dash);
        assert_eq!(config.yakumono, YakumonoOptions::default());
    }

    #[test]
    fn test_original_key_name_is_accepted() {
        let config: Config = toml::from_str(
            r#"
[yakumono]
spacing_yakumono = false
byte_sensitive = false
"#,
        )
        .unwrap();

        assert!(!config.yakumono.spacing_enabled);
        assert!(!config.yakumono.byte_sensitive);
    }

    #[test]
    fn test_unknown_key_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[jisage]\nignore_everything = true\n").unwrap();

        let result = Config::load_from_path(&config_file);

        assert!(matches!(result, Err(ConfigError::ConfigParseError { .. })));
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "[yakumono]\nbyte_sensitive = \"yes\"\n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();

        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let path = PathBuf::from("~/test/path");
        let expanded = Config::expand_path(&path);

        assert!(expanded.is_some());
        let expanded = expanded.unwrap();
        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_load_through_env_var_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        let test_config = Config {
            jisage: JisageOptions {
                ignore_alphabet: true,
                ignore_dash: false,
            },
            ..Config::default()
        };
        test_config.save_to_path(&config_file).unwrap();

        unsafe {
            env::set_var("DANRAKU_TEST_CONFIG_DIR", temp_dir.path());
        }

        let loaded = Config::load_from_path("$DANRAKU_TEST_CONFIG_DIR/config.toml")
            .unwrap()
            .unwrap();
        assert_eq!(loaded, test_config);

        unsafe {
            env::remove_var("DANRAKU_TEST_CONFIG_DIR");
        }
    }

    #[test]
    fn test_expand_path_with_absolute_path() {
        let path = PathBuf::from("/absolute/path");
        let expanded = Config::expand_path(&path).unwrap();

        assert_eq!(expanded, path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let non_existent_config = temp_dir.path().join("nonexistent.toml");

        let result = Config::load_from_path(&non_existent_config).unwrap();

        assert!(result.is_none());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let test_config = Config {
            yakumono: YakumonoOptions {
                spacing_enabled: true,
                byte_sensitive: false,
            },
            ..Config::default()
        };

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
        let written = std::fs::read_to_string(&config_file).unwrap();
        assert!(written.contains("[jisage]"));
        assert!(written.contains("spacing_enabled = true"));
    }
}
