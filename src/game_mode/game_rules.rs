//! Game rules section of a game mode: episode length, grace period, and
//! the conditions under which the blue agent loses.

use serde::Serialize;
use serde_yaml::Mapping;

use crate::game_mode::section::{
    self, ConfigError, ConfigGroup, FieldSpec, BOOL, INT, INT_OR_FLOAT,
};

const MAX_STEPS_CEILING: usize = 10_000_000;
const GRACE_PERIOD_CEILING: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GameRulesConfig {
    /// Smallest network the game mode is willing to run on.
    pub min_number_of_network_nodes: usize,
    /// Steps in one episode.
    pub max_steps: usize,
    /// Steps at the start of an episode during which the red agent may not
    /// act.
    pub grace_period_length: usize,
    pub lose_when_all_nodes_lost: bool,
    pub lose_when_n_percent_of_nodes_lost: bool,
    /// Fraction of compromised nodes that counts as a loss, in [0, 1].
    pub percentage_of_nodes_compromised_equals_loss: f64,
    pub lose_when_high_value_node_lost: bool,
}

impl ConfigGroup for GameRulesConfig {
    const SECTION: &'static str = "game_rules";

    fn fields() -> &'static [FieldSpec] {
        &[
            FieldSpec {
                alias: "min_number_of_network_nodes",
                accepts: INT,
                description: "Smallest network node count this game mode supports",
            },
            FieldSpec {
                alias: "max_steps",
                accepts: INT,
                description: "Number of timesteps in one episode",
            },
            FieldSpec {
                alias: "grace_period_length",
                accepts: INT,
                description: "Timesteps before the red agent may act",
            },
            FieldSpec {
                alias: "lose_when_all_nodes_lost",
                accepts: BOOL,
                description: "Blue loses when every node is compromised",
            },
            FieldSpec {
                alias: "lose_when_n_percent_of_nodes_lost",
                accepts: BOOL,
                description: "Blue loses when a fraction of nodes is compromised",
            },
            FieldSpec {
                alias: "percentage_of_nodes_compromised_equals_loss",
                accepts: INT_OR_FLOAT,
                description: "Compromised-node fraction counting as a loss",
            },
            FieldSpec {
                alias: "lose_when_high_value_node_lost",
                accepts: BOOL,
                description: "Blue loses when a high-value node is compromised",
            },
        ]
    }

    fn build(settings: &Mapping) -> Result<Self, ConfigError> {
        let max_steps = section::as_usize(settings, "max_steps")?;
        if max_steps == 0 || max_steps > MAX_STEPS_CEILING {
            return Err(ConfigError::invalid_value(
                "max_steps",
                format!("must be between 1 and {MAX_STEPS_CEILING}, got {max_steps}"),
            ));
        }

        let grace_period_length = section::as_usize(settings, "grace_period_length")?;
        if grace_period_length > GRACE_PERIOD_CEILING {
            return Err(ConfigError::invalid_value(
                "grace_period_length",
                format!("must be at most {GRACE_PERIOD_CEILING}, got {grace_period_length}"),
            ));
        }
        if grace_period_length > max_steps {
            return Err(ConfigError::invalid_value(
                "grace_period_length",
                format!(
                    "grace period ({grace_period_length}) cannot exceed max_steps ({max_steps})"
                ),
            ));
        }

        let loss_percentage =
            section::as_f64(settings, "percentage_of_nodes_compromised_equals_loss")?;
        if !(0.0..=1.0).contains(&loss_percentage) {
            return Err(ConfigError::invalid_value(
                "percentage_of_nodes_compromised_equals_loss",
                format!("must be between 0 and 1, got {loss_percentage}"),
            ));
        }

        Ok(Self {
            min_number_of_network_nodes: section::as_usize(
                settings,
                "min_number_of_network_nodes",
            )?,
            max_steps,
            grace_period_length,
            lose_when_all_nodes_lost: section::as_bool(settings, "lose_when_all_nodes_lost")?,
            lose_when_n_percent_of_nodes_lost: section::as_bool(
                settings,
                "lose_when_n_percent_of_nodes_lost",
            )?,
            percentage_of_nodes_compromised_equals_loss: loss_percentage,
            lose_when_high_value_node_lost: section::as_bool(
                settings,
                "lose_when_high_value_node_lost",
            )?,
        })
    }
}
