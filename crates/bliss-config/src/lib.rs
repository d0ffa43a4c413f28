//! Configuration for the Bliss core bridge
//!
//! Handles the known-carts path handed to the core, controller port count,
//! keyboard capability and bindings, and the core option tree.
//! Config files are TOML.

mod keyboard;
mod options;

pub use keyboard::{KeyBinding, KeyboardConfig};
pub use options::{CoreOption, CoreOptions};

use bliss_input::INTELLIVISION_PLAYERS;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

/// System-wide configuration directory
pub const CONFIG_DIR: &str = "/etc/bliss-bridge";

/// Per-user configuration directory, relative to `$HOME`
pub const USER_CONFIG_DIR: &str = ".config/bliss-bridge";

/// Config file name inside a config directory
pub const CONFIG_FILE: &str = "config.toml";

/// Environment variable naming an explicit config file
pub const CONFIG_ENV: &str = "BLISS_BRIDGE_CONFIG";

/// File name of the cartridge database shipped with the core
pub const KNOWN_CARTS_FILE: &str = "knowncarts.cfg";

/// Largest controller port count a config may ask for
pub const MAX_SUPPORTED_PLAYERS: usize = 4;

/// Controller port settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputConfig {
    #[serde(default = "default_max_players")]
    pub max_players: usize,
}

fn default_max_players() -> usize {
    INTELLIVISION_PLAYERS
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            max_players: default_max_players(),
        }
    }
}

/// Main bridge configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Passed to the core untouched
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub known_carts_path: Option<PathBuf>,

    #[serde(default)]
    pub input: InputConfig,

    #[serde(default)]
    pub keyboard: KeyboardConfig,
}

impl BridgeConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from default locations.
    ///
    /// A file named by `$BLISS_BRIDGE_CONFIG` is used on its own; otherwise
    /// the user config is layered over the system config.
    pub fn load_default() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os(CONFIG_ENV).map(PathBuf::from);
        let user_dir = std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join(USER_CONFIG_DIR));
        Self::load_layered(explicit.as_deref(), user_dir.as_deref(), Path::new(CONFIG_DIR))
    }

    /// Load from an explicit file, or merge `config.toml` from `system_dir`
    /// and then `user_dir`. Defaults when no file exists at all.
    pub fn load_layered(
        explicit: Option<&Path>,
        user_dir: Option<&Path>,
        system_dir: &Path,
    ) -> Result<Self, ConfigError> {
        // An explicit path must exist
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let mut merged: Option<toml::Value> = None;
        for path in [Some(system_dir), user_dir]
            .into_iter()
            .flatten()
            .map(|dir| dir.join(CONFIG_FILE))
            .filter(|path| path.exists())
        {
            let layer: toml::Value = toml::from_str(&std::fs::read_to_string(&path)?)?;
            tracing::info!("Loaded configuration layer {}", path.display());
            merged = Some(match merged.take() {
                Some(mut base) => {
                    merge_toml(&mut base, layer);
                    base
                }
                None => layer,
            });
        }

        let Some(merged) = merged else {
            tracing::warn!("No configuration file found, using defaults");
            return Ok(Self::default());
        };

        let config: Self = merged.try_into()?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let contents = toml::to_string_pretty(self)?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        std::fs::write(path, contents)?;
        tracing::info!("Configuration saved to {}", path.display());
        Ok(())
    }

    /// Check settings the adapter would otherwise reject at runtime
    pub fn validate(&self) -> Result<(), ConfigError> {
        let max_players = self.input.max_players;
        if !(1..=MAX_SUPPORTED_PLAYERS).contains(&max_players) {
            return Err(ConfigError::Invalid(format!(
                "max_players must be between 1 and {}, got {}",
                MAX_SUPPORTED_PLAYERS, max_players
            )));
        }

        if self.keyboard.enabled && self.keyboard.player >= max_players {
            return Err(ConfigError::Invalid(format!(
                "keyboard player {} exceeds {} controller ports",
                self.keyboard.player, max_players
            )));
        }

        Ok(())
    }

    /// Path the core should read its cartridge database from.
    ///
    /// An explicit `known_carts_path` wins as-is; otherwise the bundled
    /// database in `resource_dir` is used if present.
    pub fn resolve_known_carts(&self, resource_dir: &Path) -> Option<PathBuf> {
        if let Some(path) = &self.known_carts_path {
            return Some(path.clone());
        }

        let bundled = resource_dir.join(KNOWN_CARTS_FILE);
        if bundled.is_file() {
            Some(bundled)
        } else {
            tracing::debug!("No {} in {}", KNOWN_CARTS_FILE, resource_dir.display());
            None
        }
    }
}

/// Overlay `overlay` onto `base`. Tables merge key by key; any other value,
/// arrays included, replaces what was there.
pub fn merge_toml(base: &mut toml::Value, overlay: toml::Value) {
    let overlay_table = match overlay {
        toml::Value::Table(table) => table,
        other => {
            *base = other;
            return;
        }
    };

    match &mut *base {
        toml::Value::Table(base_table) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        _ => *base = toml::Value::Table(overlay_table),
    }
}
