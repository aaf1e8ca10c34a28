//! Configuration loading and typed config structures.
//!
//! The canonical configuration lives in `underworld-config.yaml`. Every field
//! has a default, so an empty document (or no file at all) yields a playable
//! game.

use std::path::Path;

use serde::Deserialize;
use underworld_types::{Action, Resources};

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level game configuration.
///
/// Mirrors the structure of `underworld-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GameConfig {
    /// Which variant to run and how fast.
    #[serde(default)]
    pub session: SessionConfig,

    /// Starting resources.
    #[serde(default)]
    pub economy: EconomyConfig,

    /// Activity log caps per variant.
    #[serde(default)]
    pub activity_log: ActivityLogConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Actions applied, in order, before the first tick.
    #[serde(default)]
    pub autoplay: Vec<Action>,
}

impl GameConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yml::from_str(yaml)?)
    }
}

/// Game variant selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    /// Raid loop: territories, troops, villains.
    Raid,
    /// Geopolitical RPG: crimes, market, recruitment, takeover.
    #[default]
    Rpg,
}

/// Session settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SessionConfig {
    /// Variant to run.
    #[serde(default)]
    pub variant: VariantKind,

    /// Real-time milliseconds between ticks.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Stop after this many ticks (0 = unlimited).
    #[serde(default)]
    pub max_ticks: u64,

    /// Seed for the roll source. Absent means OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Neighborhood key the RPG takeover target starts on. Absent means the
    /// first neighborhood on the map.
    #[serde(default)]
    pub starting_neighborhood: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            variant: VariantKind::default(),
            tick_interval_ms: default_tick_interval_ms(),
            max_ticks: 0,
            seed: None,
            starting_neighborhood: None,
        }
    }
}

/// Starting resources for a new game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct EconomyConfig {
    /// Starting cash.
    #[serde(default = "default_starting_cash")]
    pub starting_cash: i64,

    /// Starting influence.
    #[serde(default = "default_starting_influence")]
    pub starting_influence: i64,

    /// Starting respect.
    #[serde(default = "default_starting_respect")]
    pub starting_respect: i64,
}

impl EconomyConfig {
    /// The configured starting resources.
    pub const fn starting_resources(&self) -> Resources {
        Resources::new(
            self.starting_cash,
            self.starting_influence,
            self.starting_respect,
        )
    }
}

impl Default for EconomyConfig {
    fn default() -> Self {
        Self {
            starting_cash: default_starting_cash(),
            starting_influence: default_starting_influence(),
            starting_respect: default_starting_respect(),
        }
    }
}

/// Activity log caps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ActivityLogConfig {
    /// Entries kept by the raid variant.
    #[serde(default = "default_raid_cap")]
    pub raid_cap: usize,

    /// Entries kept by the RPG variant.
    #[serde(default = "default_rpg_cap")]
    pub rpg_cap: usize,
}

impl Default for ActivityLogConfig {
    fn default() -> Self {
        Self {
            raid_cap: default_raid_cap(),
            rpg_cap: default_rpg_cap(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ---------------------------------------------------------------------------
// Default value functions
// ---------------------------------------------------------------------------

const fn default_tick_interval_ms() -> u64 {
    4000
}

const fn default_starting_cash() -> i64 {
    2500
}

const fn default_starting_influence() -> i64 {
    35
}

const fn default_starting_respect() -> i64 {
    20
}

const fn default_raid_cap() -> usize {
    8
}

const fn default_rpg_cap() -> usize {
    12
}

fn default_log_level() -> String {
    "info".to_owned()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use underworld_types::ItemId;

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.session.variant, VariantKind::Rpg);
        assert_eq!(config.session.tick_interval_ms, 4000);
        assert_eq!(config.session.max_ticks, 0);
        assert_eq!(config.session.seed, None);
        assert_eq!(config.session.starting_neighborhood, None);
        assert_eq!(
            config.economy.starting_resources(),
            Resources::new(2500, 35, 20)
        );
        assert_eq!(config.activity_log.raid_cap, 8);
        assert_eq!(config.activity_log.rpg_cap, 12);
        assert_eq!(config.logging.level, "info");
        assert!(config.autoplay.is_empty());
    }

    #[test]
    fn empty_document_uses_defaults() {
        assert_eq!(GameConfig::parse("").unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_sections_fill_in_defaults() {
        let yaml = r"
session:
  variant: raid
  seed: 42
economy:
  starting_cash: 100
";
        let config = GameConfig::parse(yaml).unwrap();
        assert_eq!(config.session.variant, VariantKind::Raid);
        assert_eq!(config.session.seed, Some(42));
        assert_eq!(config.session.tick_interval_ms, 4000);
        assert_eq!(config.economy.starting_cash, 100);
        assert_eq!(config.economy.starting_respect, 20);
    }

    #[test]
    fn autoplay_actions_are_tagged_by_type() {
        let yaml = r"
autoplay:
  - type: ACTION_BUY_ITEM
    item_id: arma-fogo
  - type: ACTION_TAKEOVER
  - type: TICK
";
        let config = GameConfig::parse(yaml).unwrap();
        assert_eq!(
            config.autoplay,
            vec![
                Action::BuyItem {
                    item_id: ItemId::from("arma-fogo")
                },
                Action::Takeover,
                Action::Tick,
            ]
        );
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let err = GameConfig::parse("session: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GameConfig::from_file(Path::new("/nonexistent/underworld.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
