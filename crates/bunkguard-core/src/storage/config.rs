//! TOML-based application configuration.
//!
//! Stores user preferences: the default target percentage applied to
//! new subjects and how many days ahead the daily plan looks.
//!
//! Configuration is stored at `~/.config/bunkguard/config.toml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use super::data_dir;
use crate::error::ConfigError;

/// Defaults applied when creating subjects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Target percentage for new subjects, 1..=100.
    #[serde(default = "default_target")]
    pub target: u8,
}

/// Daily-plan behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanConfig {
    /// How many days ahead the default agenda looks (1 = tomorrow).
    #[serde(default = "default_ahead_days")]
    pub ahead_days: u32,
}

/// Application configuration.
///
/// Serialized to/from TOML at `~/.config/bunkguard/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: DefaultsConfig,
    #[serde(default)]
    pub plan: PlanConfig,
}

fn default_target() -> u8 {
    75
}
fn default_ahead_days() -> u32 {
    1
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            target: default_target(),
        }
    }
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            ahead_days: default_ahead_days(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            defaults: DefaultsConfig::default(),
            plan: PlanConfig::default(),
        }
    }
}

impl Config {
    fn path() -> Result<PathBuf, ConfigError> {
        let dir = data_dir().map_err(|e| ConfigError::LoadFailed {
            path: PathBuf::from("~/.config"),
            message: e.to_string(),
        })?;
        Ok(dir.join("config.toml"))
    }

    /// Load from disk, writing the default file on first run.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if the default config cannot be written to disk.
    pub fn load() -> Result<Self, ConfigError> {
        let path = Self::path()?;
        match std::fs::read_to_string(&path) {
            Ok(content) => toml::from_str(&content).map_err(|e| ConfigError::LoadFailed {
                path,
                message: e.to_string(),
            }),
            Err(_) => {
                let cfg = Self::default();
                cfg.save()?;
                Ok(cfg)
            }
        }
    }

    /// Load from disk, returning the default on any error.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_default()
    }

    /// Persist to disk.
    ///
    /// # Errors
    /// Returns an error if the config cannot be serialized or written.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::path()?;
        let content = toml::to_string_pretty(self).map_err(|e| ConfigError::SaveFailed {
            path: path.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(&path, content).map_err(|e| ConfigError::SaveFailed {
            path,
            message: e.to_string(),
        })
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let mut current = &json;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        match current {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Set a config value by dot-separated key and persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown, the value does not parse
    /// as the field's type, or the config cannot be saved.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let mut json =
            serde_json::to_value(&*self).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;

        let mut parts = key.split('.').peekable();
        let mut current = &mut json;
        while let Some(part) = parts.next() {
            if parts.peek().is_none() {
                let obj = current
                    .as_object_mut()
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let existing = obj
                    .get(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
                let new_value = match existing {
                    serde_json::Value::Number(_) => {
                        let n: u64 = value.parse().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: format!("cannot parse '{value}' as number"),
                        })?;
                        serde_json::Value::Number(n.into())
                    }
                    serde_json::Value::Bool(_) => {
                        let b: bool = value.parse().map_err(|_| ConfigError::InvalidValue {
                            key: key.to_string(),
                            message: format!("cannot parse '{value}' as bool"),
                        })?;
                        serde_json::Value::Bool(b)
                    }
                    _ => serde_json::Value::String(value.to_string()),
                };
                obj.insert(part.to_string(), new_value);
            } else {
                current = current
                    .get_mut(part)
                    .ok_or_else(|| ConfigError::UnknownKey(key.to_string()))?;
            }
        }

        let updated: Config =
            serde_json::from_value(json).map_err(|e| ConfigError::InvalidValue {
                key: key.to_string(),
                message: e.to_string(),
            })?;
        if updated.defaults.target < 1 || updated.defaults.target > 100 {
            return Err(ConfigError::InvalidValue {
                key: key.to_string(),
                message: format!("target {}% outside 1..=100", updated.defaults.target),
            });
        }
        *self = updated;
        self.save()
    }
}
