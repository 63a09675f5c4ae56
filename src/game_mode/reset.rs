//! Reset section of a game mode: what gets re-randomized at the start of
//! each training episode.

use serde::Serialize;
use serde_yaml::Mapping;

use crate::game_mode::section::{self, ConfigError, ConfigGroup, FieldSpec, BOOL};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResetConfig {
    pub randomise_vulnerabilities: bool,
    pub choose_new_high_value_nodes: bool,
    pub choose_new_entry_nodes: bool,
}

impl ConfigGroup for ResetConfig {
    const SECTION: &'static str = "on_reset";

    fn fields() -> &'static [FieldSpec] {
        &[
            FieldSpec {
                alias: "randomise_vulnerabilities_on_reset",
                accepts: BOOL,
                description: "Re-roll node vulnerabilities every episode",
            },
            FieldSpec {
                alias: "choose_new_high_value_nodes_on_reset",
                accepts: BOOL,
                description: "Re-select high-value nodes every episode",
            },
            FieldSpec {
                alias: "choose_new_entry_nodes_on_reset",
                accepts: BOOL,
                description: "Re-select entry nodes every episode",
            },
        ]
    }

    fn build(settings: &Mapping) -> Result<Self, ConfigError> {
        Ok(Self {
            randomise_vulnerabilities: section::as_bool(
                settings,
                "randomise_vulnerabilities_on_reset",
            )?,
            choose_new_high_value_nodes: section::as_bool(
                settings,
                "choose_new_high_value_nodes_on_reset",
            )?,
            choose_new_entry_nodes: section::as_bool(
                settings,
                "choose_new_entry_nodes_on_reset",
            )?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_section_parses() {
        let settings: Mapping = serde_yaml::from_str(
            r#"
randomise_vulnerabilities_on_reset: true
choose_new_high_value_nodes_on_reset: false
choose_new_entry_nodes_on_reset: true
"#,
        )
        .unwrap();
        let reset = ResetConfig::create(&settings).unwrap();
        assert!(reset.randomise_vulnerabilities);
        assert!(!reset.choose_new_high_value_nodes);
        assert!(reset.choose_new_entry_nodes);
    }
}
