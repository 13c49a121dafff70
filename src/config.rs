//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/zoodesk/zoodesk.toml`
//! 3. Explicit config file passed via `--config`
//! 4. Environment variables: `ZOODESK_*` prefix

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};

/// Unified configuration for zoodesk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Header printed when an interactive session starts
    pub title: String,
    /// Prompt shown for menu commands
    pub prompt: String,
    /// Print "Animal added successfully!" after each registration
    pub confirm_additions: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Zoo Management".into(),
            prompt: "zoo>".into(),
            confirm_additions: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub title: Option<String>,
    pub prompt: Option<String>,
    pub confirm_additions: Option<bool>,
}

/// Get the XDG config directory for zoodesk.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "zoodesk").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("zoodesk.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            title: overlay.title.clone().unwrap_or_else(|| self.title.clone()),
            prompt: overlay.prompt.clone().unwrap_or_else(|| self.prompt.clone()),
            confirm_additions: overlay.confirm_additions.unwrap_or(self.confirm_additions),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local` - Optional explicit config file; it must exist if given
    pub fn load(local: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(path) = local {
            let raw = load_raw_settings(path)?;
            current = current.merge_with(&raw);
        }

        Self::apply_env_overrides(current)
    }

    /// Apply ZOODESK_* environment variables as explicit overrides.
    ///
    /// Unset variables are skipped; a set but malformed value is an error.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ZOODESK")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = env_value(config.get_string("title"))? {
            settings.title = val;
        }
        if let Some(val) = env_value(config.get_string("prompt"))? {
            settings.prompt = val;
        }
        if let Some(val) = env_value(config.get_bool("confirm_additions"))? {
            settings.confirm_additions = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# zoodesk configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/zoodesk/zoodesk.toml
#   Local:  file passed with --config
#   Env:    ZOODESK_* environment variables (explicit overrides)

# Header printed when a session starts
# title = "Zoo Management"

# Prompt for menu commands
# prompt = "zoo>"

# Confirm each successful registration
# confirm_additions = true
"#
        .to_string()
    }
}

fn env_value<T>(result: Result<T, ConfigError>) -> ApplicationResult<Option<T>> {
    match result {
        Ok(val) => Ok(Some(val)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
