//! Rewards section of a game mode.

use serde::Serialize;
use serde_yaml::Mapping;

use crate::game_mode::section::{
    self, ConfigError, ConfigGroup, FieldSpec, BOOL, INT_OR_FLOAT, STR,
};
use crate::rewards::RewardFunction;

/// Validated reward parameters for one simulation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardsConfig {
    /// Reward for the blue agent losing.
    pub reward_loss: f64,
    /// Reward for the blue agent winning.
    pub reward_success: f64,
    /// True if end rewards are multiplied by the percentage of nodes not
    /// compromised.
    pub reward_end_multiplier: bool,
    /// True if red agent rewards shrink the closer to the end timestep the
    /// game ends at.
    pub reward_reduce_negative_rewards: bool,
    /// The registered strategy used for giving rewards.
    pub reward_function: RewardFunction,
}

impl ConfigGroup for RewardsConfig {
    const SECTION: &'static str = "rewards";

    fn fields() -> &'static [FieldSpec] {
        &[
            FieldSpec {
                alias: "rewards_for_loss",
                accepts: INT_OR_FLOAT,
                description: "Reward for the blue agent losing",
            },
            FieldSpec {
                alias: "rewards_for_reaching_max_steps",
                accepts: INT_OR_FLOAT,
                description: "Reward for the blue agent winning",
            },
            FieldSpec {
                alias: "end_rewards_are_multiplied_by_end_state",
                accepts: BOOL,
                description: "Multiply end rewards by percentage of nodes not compromised",
            },
            FieldSpec {
                alias: "reduce_negative_rewards_for_closer_fails",
                accepts: BOOL,
                description: "Reduce red rewards for games that end closer to the final timestep",
            },
            FieldSpec {
                alias: "reward_function",
                accepts: STR,
                description: "Name of the registered reward strategy to use",
            },
        ]
    }

    fn build(settings: &Mapping) -> Result<Self, ConfigError> {
        let name = section::as_str(settings, "reward_function")?;
        let reward_function =
            RewardFunction::from_name(name).ok_or_else(|| ConfigError::UnknownReference {
                key: "reward_function".to_string(),
                value: name.to_string(),
                allowed: RewardFunction::names().collect::<Vec<_>>().join(", "),
            })?;

        Ok(Self {
            reward_loss: section::as_f64(settings, "rewards_for_loss")?,
            reward_success: section::as_f64(settings, "rewards_for_reaching_max_steps")?,
            reward_end_multiplier: section::as_bool(
                settings,
                "end_rewards_are_multiplied_by_end_state",
            )?,
            reward_reduce_negative_rewards: section::as_bool(
                settings,
                "reduce_negative_rewards_for_closer_fails",
            )?,
            reward_function,
        })
    }
}
