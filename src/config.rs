//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (`e`, `d`, `s`)
//! 2. Settings file: `--config FILE`, else `$XDG_CONFIG_HOME/detective-quest/quest.toml`
//! 3. Environment variables: `DQUEST_*` prefix (`DQUEST_KEYS__LEFT`, ...)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::KeyBindings;

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "DQUEST";

/// Raw key bindings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawKeyBindings {
    pub left: Option<char>,
    pub right: Option<char>,
    pub quit: Option<char>,
}

/// Raw settings for intermediate parsing.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub keys: RawKeyBindings,
}

/// Unified configuration for detective-quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Settings {
    /// Keys for left, right and quit
    pub keys: KeyBindings,
}

/// Get the XDG config directory for detective-quest.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "detective-quest").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global settings file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("quest.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

/// Turn an environment value into a single key.
fn single_char(name: &str, value: &str) -> Result<char, ApplicationError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ApplicationError::Config {
            message: format!("{name} must be a single character, got {value:?}"),
        }),
    }
}

/// Read one key override; only a missing value means "not set".
fn env_key(config: &Config, key: &str, var: &str) -> Result<Option<char>, ApplicationError> {
    match config.get_string(key) {
        Ok(val) => single_char(var, &val).map(Some),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

impl Settings {
    /// Overlay values win where specified, otherwise keep self.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            keys: KeyBindings {
                left: overlay.keys.left.unwrap_or(self.keys.left),
                right: overlay.keys.right.unwrap_or(self.keys.right),
                quit: overlay.keys.quit.unwrap_or(self.keys.quit),
            },
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit settings file; must exist. When `None`, the
    ///   global file is used if present.
    ///
    /// # Errors
    /// Unreadable or malformed settings files, malformed `DQUEST_*` values, and
    /// key bindings that are blank or not distinct.
    #[instrument(level = "debug")]
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        Self::load_with_env(
            config_file,
            global_config_path(),
            Environment::with_prefix(ENV_PREFIX),
        )
    }

    /// Same as [`Settings::load`] with the global path and environment source
    /// supplied by the caller.
    pub fn load_with_env(
        config_file: Option<&Path>,
        global_path: Option<PathBuf>,
        env: Environment,
    ) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let mut current = Self::default();

        // 2. Settings file (explicit one is required, global one is optional)
        match config_file {
            Some(path) => {
                debug!(path = %path.display(), "loading settings file");
                current = current.merge_with(&load_raw_settings(path)?);
            }
            None => {
                if let Some(global_path) = global_path.filter(|p| p.exists()) {
                    debug!(path = %global_path.display(), "loading global settings");
                    current = current.merge_with(&load_raw_settings(&global_path)?);
                }
            }
        }

        // 3. Environment variables (explicit override)
        current = Self::apply_env_overrides(current, env)?;

        current.keys = current.keys.normalized()?;
        Ok(current)
    }

    /// Apply `DQUEST_*` environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self, env: Environment) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(env.prefix_separator("_").separator("__"))
            .build()
            .map_err(config_err)?;

        if let Some(key) = env_key(&config, "keys.left", "DQUEST_KEYS__LEFT")? {
            settings.keys.left = key;
        }
        if let Some(key) = env_key(&config, "keys.right", "DQUEST_KEYS__RIGHT")? {
            settings.keys.right = key;
        }
        if let Some(key) = env_key(&config, "keys.quit", "DQUEST_KEYS__QUIT")? {
            settings.keys.quit = key;
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_with_keeps_unspecified_keys() {
        let overlay = RawSettings {
            keys: RawKeyBindings {
                left: Some('a'),
                right: None,
                quit: None,
            },
        };
        let merged = Settings::default().merge_with(&overlay);
        assert_eq!(merged.keys.left, 'a');
        assert_eq!(merged.keys.right, 'd');
        assert_eq!(merged.keys.quit, 's');
    }

    #[test]
    fn single_char_rejects_words() {
        assert_eq!(single_char("X", "q").unwrap(), 'q');
        assert!(single_char("X", "").is_err());
        assert!(single_char("X", "quit").is_err());
    }

    #[test]
    fn env_key_only_treats_missing_value_as_unset() {
        let config = Config::builder()
            .set_override("keys.left.inner", "x")
            .unwrap()
            .set_override("keys.quit", "q")
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(env_key(&config, "keys.quit", "Q").unwrap(), Some('q'));
        assert_eq!(env_key(&config, "keys.right", "R").unwrap(), None);
        // a table where a value is expected is an error, not "unset"
        assert!(matches!(
            env_key(&config, "keys.left", "L"),
            Err(ApplicationError::Config { .. })
        ));
    }
}
