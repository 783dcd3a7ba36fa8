//! TOML-based application configuration.
//!
//! Stores the starting values for each panel:
//! - Momentum form (streak, habit strength, weekly misses)
//! - Routine forge (available minutes, energy profile, capacity anchor)
//! - Focus map (selected focus area)
//!
//! Configuration is read from `~/.config/discipline/config.toml`. The file is
//! optional and never written; missing keys fall back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::config_dir;
use crate::error::ConfigError;
use crate::focus::FocusArea;
use crate::momentum::MomentumInput;
use crate::routine::{CapacityAnchor, EnergyProfile, RoutineInput};

/// Momentum form defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MomentumConfig {
    #[serde(default = "default_streak_days")]
    pub streak_days: u32,
    #[serde(default = "default_habit_strength")]
    pub habit_strength: u32,
    #[serde(default = "default_misses")]
    pub misses: u32,
}

/// Routine forge defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutineConfig {
    #[serde(default = "default_available_minutes")]
    pub available_minutes: u32,
    #[serde(default)]
    pub profile: EnergyProfile,
    #[serde(default)]
    pub capacity: CapacityAnchor,
}

/// Focus map defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusConfig {
    #[serde(default)]
    pub area: FocusArea,
}

/// Application configuration.
///
/// Deserialized from TOML at `~/.config/discipline/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub momentum: MomentumConfig,
    #[serde(default)]
    pub routine: RoutineConfig,
    #[serde(default)]
    pub focus: FocusConfig,
}

// Default functions
fn default_streak_days() -> u32 {
    6
}
fn default_habit_strength() -> u32 {
    55
}
fn default_misses() -> u32 {
    1
}
fn default_available_minutes() -> u32 {
    75
}

impl Default for MomentumConfig {
    fn default() -> Self {
        Self {
            streak_days: default_streak_days(),
            habit_strength: default_habit_strength(),
            misses: default_misses(),
        }
    }
}

impl Default for RoutineConfig {
    fn default() -> Self {
        Self {
            available_minutes: default_available_minutes(),
            profile: EnergyProfile::default(),
            capacity: CapacityAnchor::default(),
        }
    }
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            area: FocusArea::default(),
        }
    }
}

impl Config {
    fn get_json_value_by_path<'a>(
        root: &'a serde_json::Value,
        key: &str,
    ) -> Option<&'a serde_json::Value> {
        if key.is_empty() {
            return None;
        }

        let mut current = root;
        for part in key.split('.') {
            current = current.get(part)?;
        }
        Some(current)
    }

    /// Default location of the config file.
    pub fn path() -> Result<PathBuf, ConfigError> {
        Ok(config_dir()?.join("config.toml"))
    }

    /// Load from the default location, or return defaults if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be resolved, or if the
    /// config file exists but cannot be read or parsed.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::path()?)
    }

    /// Load from `path`, or return defaults if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let cfg = Self::from_toml_str(&content)?;
                tracing::debug!("loaded config from {}", path.display());
                Ok(cfg)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("no config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::LoadFailed {
                path: path.to_path_buf(),
                message: e.to_string(),
            }),
        }
    }

    /// Parse a TOML document. Missing sections and keys take their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Get a config value as string by dot-separated key.
    pub fn get(&self, key: &str) -> Option<String> {
        let json = serde_json::to_value(self).ok()?;
        let val = Self::get_json_value_by_path(&json, key)?;
        match val {
            serde_json::Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }

    /// Momentum form defaults as an engine input.
    pub fn momentum_input(&self) -> MomentumInput {
        MomentumInput::new(
            self.momentum.streak_days,
            self.momentum.habit_strength,
            self.momentum.misses,
        )
    }

    /// Routine forge defaults as an engine input.
    pub fn routine_input(&self) -> RoutineInput {
        RoutineInput::new(self.routine.available_minutes, self.routine.profile)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let cfg = Config::default();
        assert_eq!(cfg.momentum.streak_days, 6);
        assert_eq!(cfg.momentum.habit_strength, 55);
        assert_eq!(cfg.momentum.misses, 1);
        assert_eq!(cfg.routine.available_minutes, 75);
        assert_eq!(cfg.routine.profile, EnergyProfile::Centered);
        assert_eq!(cfg.routine.capacity, CapacityAnchor::MorningPeak);
        assert_eq!(cfg.focus.area, FocusArea::Craft);
    }

    #[test]
    fn config_get_supports_dot_path_keys() {
        let cfg = Config::default();
        assert_eq!(cfg.get("momentum.habit_strength").as_deref(), Some("55"));
        assert_eq!(cfg.get("routine.profile").as_deref(), Some("centered"));
        assert_eq!(cfg.get("routine.capacity").as_deref(), Some("morning_peak"));
        assert!(cfg.get("momentum.missing_key").is_none());
        assert!(cfg.get("").is_none());
    }

    #[test]
    fn config_get_section_returns_json() {
        let cfg = Config::default();
        let section = cfg.get("focus").unwrap();
        assert_eq!(section, r#"{"area":"craft"}"#);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let cfg = Config::from_toml_str(
            r#"
            [momentum]
            streak_days = 21

            [routine]
            profile = "primed"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.momentum.streak_days, 21);
        assert_eq!(cfg.momentum.habit_strength, 55);
        assert_eq!(cfg.routine.profile, EnergyProfile::Primed);
        assert_eq!(cfg.routine.available_minutes, 75);
        assert_eq!(cfg.focus.area, FocusArea::Craft);
    }

    #[test]
    fn empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn unknown_profile_is_parse_error() {
        let result = Config::from_toml_str("[routine]\nprofile = \"sleepy\"\n");
        assert!(matches!(result, Err(ConfigError::ParseFailed(_))));
    }

    #[test]
    fn load_from_missing_file_returns_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(cfg, Config::default());
        assert!(!dir.path().join("config.toml").exists());
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[focus]\narea = \"health\"\n").unwrap();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.focus.area, FocusArea::Health);
    }

    #[test]
    fn engine_inputs_follow_config() {
        let cfg = Config::from_toml_str(
            "[momentum]\nstreak_days = 10\nhabit_strength = 50\nmisses = 2\n\n[routine]\navailable_minutes = 30\nprofile = \"grounded\"\n",
        )
        .unwrap();
        assert_eq!(cfg.momentum_input(), MomentumInput::new(10, 50, 2));
        assert_eq!(cfg.routine_input(), RoutineInput::new(30, EnergyProfile::Grounded));
    }
}
