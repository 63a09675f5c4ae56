//! Observation space section of a game mode.
//!
//! Each toggle controls whether one slice of environment state is exposed
//! to the blue agent's observation vector.

use serde::Serialize;
use serde_yaml::Mapping;

use crate::game_mode::section::{self, ConfigError, ConfigGroup, FieldSpec, BOOL};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObservationSpaceConfig {
    pub compromised_status: bool,
    pub vulnerabilities: bool,
    pub node_connections: bool,
    pub average_vulnerability: bool,
    pub graph_connectivity: bool,
    pub attacking_nodes: bool,
    pub attacked_nodes: bool,
    pub special_nodes: bool,
    pub red_agent_skill: bool,
}

impl ConfigGroup for ObservationSpaceConfig {
    const SECTION: &'static str = "observation_space";

    fn fields() -> &'static [FieldSpec] {
        &[
            FieldSpec {
                alias: "compromised_status",
                accepts: BOOL,
                description: "Observe the compromised status of every node",
            },
            FieldSpec {
                alias: "vulnerabilities",
                accepts: BOOL,
                description: "Observe per-node vulnerability values",
            },
            FieldSpec {
                alias: "node_connections",
                accepts: BOOL,
                description: "Observe the adjacency of every node",
            },
            FieldSpec {
                alias: "average_vulnerability",
                accepts: BOOL,
                description: "Observe the mean vulnerability across the network",
            },
            FieldSpec {
                alias: "graph_connectivity",
                accepts: BOOL,
                description: "Observe the overall connectivity score of the graph",
            },
            FieldSpec {
                alias: "attacking_nodes",
                accepts: BOOL,
                description: "Observe which nodes attacks originated from",
            },
            FieldSpec {
                alias: "attacked_nodes",
                accepts: BOOL,
                description: "Observe which nodes were attacked this step",
            },
            FieldSpec {
                alias: "special_nodes",
                accepts: BOOL,
                description: "Observe entry and high-value node locations",
            },
            FieldSpec {
                alias: "red_agent_skill",
                accepts: BOOL,
                description: "Observe the red agent's skill level",
            },
        ]
    }

    fn build(settings: &Mapping) -> Result<Self, ConfigError> {
        Ok(Self {
            compromised_status: section::as_bool(settings, "compromised_status")?,
            vulnerabilities: section::as_bool(settings, "vulnerabilities")?,
            node_connections: section::as_bool(settings, "node_connections")?,
            average_vulnerability: section::as_bool(settings, "average_vulnerability")?,
            graph_connectivity: section::as_bool(settings, "graph_connectivity")?,
            attacking_nodes: section::as_bool(settings, "attacking_nodes")?,
            attacked_nodes: section::as_bool(settings, "attacked_nodes")?,
            special_nodes: section::as_bool(settings, "special_nodes")?,
            red_agent_skill: section::as_bool(settings, "red_agent_skill")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_toggles_parsed() {
        let settings: Mapping = serde_yaml::from_str(
            r#"
compromised_status: true
vulnerabilities: true
node_connections: false
average_vulnerability: false
graph_connectivity: true
attacking_nodes: false
attacked_nodes: false
special_nodes: true
red_agent_skill: false
"#,
        )
        .unwrap();
        let observation = ObservationSpaceConfig::create(&settings).unwrap();
        assert!(observation.compromised_status);
        assert!(!observation.node_connections);
        assert!(observation.special_nodes);
    }

    #[test]
    fn test_numeric_value_for_toggle_fails() {
        let settings: Mapping =
            serde_yaml::from_str("compromised_status: 1").unwrap();
        let err = ObservationSpaceConfig::create(&settings).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidType { .. }));
    }
}
