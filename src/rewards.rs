//! Closed registry of reward strategies.
//!
//! The reward function named in a game mode must be one of these. Keeping
//! the registry as an enum means the valid-name set is enumerable for error
//! messages and tests, rather than discovered by probing a module at
//! runtime.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Every reward strategy the simulation implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewardFunction {
    /// Score from node safety, deceptions, and action cost.
    StandardRewards,
    /// Variant scoring under evaluation for future defaults.
    ExperimentalRewards,
    /// Flat positive reward for every timestep survived.
    OnePerTimestep,
    /// Always zero, for baseline comparisons.
    ZeroReward,
    /// Reward proportional to the number of uncompromised nodes.
    SafeNodesGiveRewards,
    /// Penalize blue actions taken on already-safe nodes.
    PunishBadActions,
    /// Count of nodes currently safe.
    NumNodesSafe,
    /// Cost function used by the DCBO integration.
    DcboCostFunc,
}

impl RewardFunction {
    pub const ALL: [RewardFunction; 8] = [
        RewardFunction::StandardRewards,
        RewardFunction::ExperimentalRewards,
        RewardFunction::OnePerTimestep,
        RewardFunction::ZeroReward,
        RewardFunction::SafeNodesGiveRewards,
        RewardFunction::PunishBadActions,
        RewardFunction::NumNodesSafe,
        RewardFunction::DcboCostFunc,
    ];

    /// The external name used in configuration documents.
    pub fn name(self) -> &'static str {
        match self {
            RewardFunction::StandardRewards => "standard_rewards",
            RewardFunction::ExperimentalRewards => "experimental_rewards",
            RewardFunction::OnePerTimestep => "one_per_timestep",
            RewardFunction::ZeroReward => "zero_reward",
            RewardFunction::SafeNodesGiveRewards => "safe_nodes_give_rewards",
            RewardFunction::PunishBadActions => "punish_bad_actions",
            RewardFunction::NumNodesSafe => "num_nodes_safe",
            RewardFunction::DcboCostFunc => "dcbo_cost_func",
        }
    }

    /// Look a strategy up by its external name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// All registered names, for error messages.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::ALL.iter().map(|f| f.name())
    }
}

impl fmt::Display for RewardFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_registered_name_resolves() {
        for function in RewardFunction::ALL {
            assert_eq!(RewardFunction::from_name(function.name()), Some(function));
        }
    }

    #[test]
    fn test_unregistered_name_is_rejected() {
        assert_eq!(RewardFunction::from_name("not_a_real_function"), None);
    }

    #[test]
    fn test_serde_uses_external_names() {
        let json = serde_json::to_string(&RewardFunction::StandardRewards).unwrap();
        assert_eq!(json, "\"standard_rewards\"");
        let parsed: RewardFunction = serde_json::from_str("\"zero_reward\"").unwrap();
        assert_eq!(parsed, RewardFunction::ZeroReward);
    }
}
