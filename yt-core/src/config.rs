//! Game configuration.
//!
//! One YAML file configures the rules, the settle timeout and the simulated physics
//! used by the runtime and the CLI. Every field has a default, so an empty document
//! is a valid config.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::category::NUM_CATS;

/// Configuration loading errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid config: {0}")]
    Invalid(&'static str),
}

/// Root configuration structure.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameConfig {
    /// Turn and scoring rules.
    #[serde(default)]
    pub rules: Rules,

    /// Ticks a roll may stay in flight before moving dice are force-resolved.
    ///
    /// `None` waits forever.
    #[serde(default = "default_settle_timeout_ticks")]
    pub settle_timeout_ticks: Option<u32>,

    /// Simulated physics settings (used when no real physics engine is attached).
    #[serde(default)]
    pub sim: SimConfig,
}

fn default_settle_timeout_ticks() -> Option<u32> {
    Some(600)
}

/// Turn caps and the upper bonus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rules {
    /// Rolls allowed per turn.
    #[serde(default = "default_max_rolls")]
    pub max_rolls: u8,
    /// Turns per game.
    #[serde(default = "default_max_turns")]
    pub max_turns: u8,
    /// Upper-section total that earns the bonus.
    #[serde(default = "default_bonus_threshold")]
    pub bonus_threshold: u32,
    #[serde(default = "default_bonus_points")]
    pub bonus_points: u32,
}

fn default_max_rolls() -> u8 {
    3
}

fn default_max_turns() -> u8 {
    12
}

fn default_bonus_threshold() -> u32 {
    63
}

fn default_bonus_points() -> u32 {
    35
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_rolls: default_max_rolls(),
            max_turns: default_max_turns(),
            bonus_threshold: default_bonus_threshold(),
            bonus_points: default_bonus_points(),
        }
    }
}

/// How the simulated physics picks faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChanceKind {
    /// Seeded ChaCha stream; depends on the order of throws.
    #[default]
    Rng,
    /// Faces keyed by (seed, die, throw index); same key, same face.
    Deterministic,
}

/// Simulated physics configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SimConfig {
    /// Fewest ticks a thrown die tumbles before coming to rest.
    #[serde(default = "default_min_settle_ticks")]
    pub min_settle_ticks: u32,
    /// Most ticks a thrown die tumbles before coming to rest.
    #[serde(default = "default_max_settle_ticks")]
    pub max_settle_ticks: u32,
    #[serde(default)]
    pub chance: ChanceKind,
    #[serde(default)]
    pub seed: u64,
}

fn default_min_settle_ticks() -> u32 {
    20
}

fn default_max_settle_ticks() -> u32 {
    90
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            min_settle_ticks: default_min_settle_ticks(),
            max_settle_ticks: default_max_settle_ticks(),
            chance: ChanceKind::default(),
            seed: 0,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rules: Rules::default(),
            settle_timeout_ticks: default_settle_timeout_ticks(),
            sim: SimConfig::default(),
        }
    }
}

impl GameConfig {
    /// Load configuration from a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml(&contents)
    }

    /// Load configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.max_rolls == 0 {
            return Err(ConfigError::Invalid("rules.max_rolls must be at least 1"));
        }
        if self.rules.max_turns == 0 || self.rules.max_turns as usize > NUM_CATS {
            return Err(ConfigError::Invalid(
                "rules.max_turns must be in 1..=12 (one category per turn)",
            ));
        }
        if self.sim.min_settle_ticks > self.sim.max_settle_ticks {
            return Err(ConfigError::Invalid(
                "sim.min_settle_ticks must not exceed sim.max_settle_ticks",
            ));
        }
        if self.settle_timeout_ticks == Some(0) {
            return Err(ConfigError::Invalid("settle_timeout_ticks must be positive"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = GameConfig::from_yaml("{}").expect("Failed to parse YAML");
        assert_eq!(config.rules, Rules::default());
        assert_eq!(config.rules.max_rolls, 3);
        assert_eq!(config.rules.max_turns, 12);
        assert_eq!(config.rules.bonus_threshold, 63);
        assert_eq!(config.rules.bonus_points, 35);
        assert_eq!(config.settle_timeout_ticks, Some(600));
        assert_eq!(config.sim.chance, ChanceKind::Rng);
    }

    #[test]
    fn test_parse_yaml_string() {
        let yaml = r#"
rules:
  max_rolls: 2
  bonus_points: 50

settle_timeout_ticks: null

sim:
  min_settle_ticks: 5
  max_settle_ticks: 10
  chance: deterministic
  seed: 42
"#;

        let config = GameConfig::from_yaml(yaml).expect("Failed to parse YAML");
        assert_eq!(config.rules.max_rolls, 2);
        assert_eq!(config.rules.bonus_points, 50);
        // Check defaults are applied
        assert_eq!(config.rules.max_turns, 12);
        assert_eq!(config.rules.bonus_threshold, 63);
        assert_eq!(config.settle_timeout_ticks, None);
        assert_eq!(config.sim.chance, ChanceKind::Deterministic);
        assert_eq!(config.sim.seed, 42);
    }

    #[test]
    fn test_invalid_yaml_fails() {
        let invalid_yaml = "this is not: valid: yaml: {{{}}}";
        let result = GameConfig::from_yaml(invalid_yaml);
        assert!(matches!(result, Err(ConfigError::Yaml(_))));
    }

    #[test]
    fn test_rejects_more_turns_than_categories() {
        let result = GameConfig::from_yaml("rules:\n  max_turns: 13\n");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_rejects_inverted_settle_window() {
        let yaml = "sim:\n  min_settle_ticks: 30\n  max_settle_ticks: 10\n";
        assert!(matches!(
            GameConfig::from_yaml(yaml),
            Err(ConfigError::Invalid(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = GameConfig::load("/nonexistent/yacht.yaml");
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
