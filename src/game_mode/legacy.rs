//! Compatibility shim for the legacy flattened game-mode format.
//!
//! Older tooling wrote every field alias at the top level of the document
//! instead of grouping them under section names. This shim detects that
//! shape and nests each key into its owning section, using the same field
//! tables the validator consumes, so legacy files reach validation in the
//! current format. Nested documents pass through untouched.

use log::warn;
use serde_yaml::{Mapping, Value};

use crate::game_mode::game_rules::GameRulesConfig;
use crate::game_mode::observation::ObservationSpaceConfig;
use crate::game_mode::reset::ResetConfig;
use crate::game_mode::rewards::RewardsConfig;
use crate::game_mode::section::{ConfigGroup, FieldSpec};

fn section_tables() -> [(&'static str, &'static [FieldSpec]); 4] {
    [
        (RewardsConfig::SECTION, RewardsConfig::fields()),
        (
            ObservationSpaceConfig::SECTION,
            ObservationSpaceConfig::fields(),
        ),
        (GameRulesConfig::SECTION, GameRulesConfig::fields()),
        (ResetConfig::SECTION, ResetConfig::fields()),
    ]
}

/// Returns true for documents in the legacy flattened shape, where no
/// top-level value is itself a mapping.
pub fn is_legacy_flat(doc: &Mapping) -> bool {
    !doc.is_empty() && doc.values().all(|value| !value.is_mapping())
}

/// Translate a document into the current nested shape.
///
/// Legacy flat keys are grouped into their owning sections; keys no section
/// declares are dropped with a warning. Already-nested documents are
/// returned unchanged.
pub fn normalize(doc: Mapping) -> Mapping {
    if !is_legacy_flat(&doc) {
        return doc;
    }
    warn!("Game mode document uses the legacy flattened format; translating");

    let tables = section_tables();
    let mut nested = Mapping::new();
    for (name, _) in &tables {
        nested.insert(Value::from(*name), Value::Mapping(Mapping::new()));
    }

    for (key, value) in doc {
        let alias = match key.as_str() {
            Some(alias) => alias.to_string(),
            None => {
                warn!("Ignoring non-string key {key:?} in legacy game mode");
                continue;
            }
        };
        let owner = tables
            .iter()
            .find(|(_, fields)| fields.iter().any(|f| f.alias == alias))
            .map(|(name, _)| *name);
        match owner {
            Some(section) => {
                if let Some(target) =
                    nested.get_mut(section).and_then(Value::as_mapping_mut)
                {
                    target.insert(Value::from(alias), value);
                }
            }
            None => warn!("Ignoring unknown legacy game mode key '{alias}'"),
        }
    }

    nested
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_mode::test_fixtures::NESTED_GAME_MODE_YAML;
    use crate::game_mode::GameMode;

    const LEGACY_FLAT_YAML: &str = r#"
rewards_for_loss: -100
rewards_for_reaching_max_steps: 100
end_rewards_are_multiplied_by_end_state: true
reduce_negative_rewards_for_closer_fails: false
reward_function: "standard_rewards"
compromised_status: true
vulnerabilities: true
node_connections: true
average_vulnerability: false
graph_connectivity: false
attacking_nodes: true
attacked_nodes: true
special_nodes: true
red_agent_skill: true
min_number_of_network_nodes: 5
max_steps: 1000
grace_period_length: 5
lose_when_all_nodes_lost: false
lose_when_n_percent_of_nodes_lost: true
percentage_of_nodes_compromised_equals_loss: 0.8
lose_when_high_value_node_lost: true
randomise_vulnerabilities_on_reset: true
choose_new_high_value_nodes_on_reset: true
choose_new_entry_nodes_on_reset: true
"#;

    #[test]
    fn test_legacy_flat_is_detected() {
        let flat: Mapping = serde_yaml::from_str(LEGACY_FLAT_YAML).unwrap();
        let nested: Mapping = serde_yaml::from_str(NESTED_GAME_MODE_YAML).unwrap();
        assert!(is_legacy_flat(&flat));
        assert!(!is_legacy_flat(&nested));
    }

    #[test]
    fn test_legacy_and_nested_validate_to_equal_game_modes() {
        let flat: Mapping = serde_yaml::from_str(LEGACY_FLAT_YAML).unwrap();
        let nested: Mapping = serde_yaml::from_str(NESTED_GAME_MODE_YAML).unwrap();
        let from_flat = GameMode::create(&normalize(flat)).unwrap();
        let from_nested = GameMode::create(&normalize(nested)).unwrap();
        assert_eq!(from_flat, from_nested);
    }

    #[test]
    fn test_unknown_flat_keys_are_dropped() {
        let mut flat: Mapping = serde_yaml::from_str(LEGACY_FLAT_YAML).unwrap();
        flat.insert("some_removed_setting".into(), 42.into());
        let nested = normalize(flat);
        assert!(GameMode::create(&nested).is_ok());
        for (_, section) in &nested {
            if let Some(section) = section.as_mapping() {
                assert!(section.get("some_removed_setting").is_none());
            }
        }
    }

    #[test]
    fn test_nested_document_passes_through_unchanged() {
        let nested: Mapping = serde_yaml::from_str(NESTED_GAME_MODE_YAML).unwrap();
        assert_eq!(normalize(nested.clone()), nested);
    }
}
