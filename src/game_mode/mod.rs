//! Game-mode configuration and validation.
//!
//! A [`GameMode`] is the named aggregation of validated configuration
//! sections governing one simulation: rewards, observation space, game
//! rules, and per-episode reset behavior. Raw documents only become a
//! `GameMode` through [`GameMode::create`], which validates every section
//! to completion before anything is constructed.

pub mod game_rules;
pub mod legacy;
pub mod loader;
pub mod observation;
pub mod reset;
pub mod rewards;
pub mod section;

use serde::Serialize;
use serde_yaml::Mapping;

pub use game_rules::GameRulesConfig;
pub use loader::load_game_mode;
pub use observation::ObservationSpaceConfig;
pub use reset::ResetConfig;
pub use rewards::RewardsConfig;
pub use section::{ConfigError, ConfigGroup};

/// One full, validated simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameMode {
    pub rewards: RewardsConfig,
    pub observation_space: ObservationSpaceConfig,
    pub game_rules: GameRulesConfig,
    pub on_reset: ResetConfig,
}

impl GameMode {
    /// Validate a nested document (section name -> flat alias mapping) into
    /// a game mode. Fails on the first malformed section.
    pub fn create(doc: &Mapping) -> Result<Self, ConfigError> {
        Ok(Self {
            rewards: RewardsConfig::create(section::as_section(
                doc,
                RewardsConfig::SECTION,
            )?)?,
            observation_space: ObservationSpaceConfig::create(section::as_section(
                doc,
                ObservationSpaceConfig::SECTION,
            )?)?,
            game_rules: GameRulesConfig::create(section::as_section(
                doc,
                GameRulesConfig::SECTION,
            )?)?,
            on_reset: ResetConfig::create(section::as_section(
                doc,
                ResetConfig::SECTION,
            )?)?,
        })
    }
}
