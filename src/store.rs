//! Name-keyed lookup of stored networks and game modes.
//!
//! The simulation core never queries persistence itself; it is handed
//! already-resolved objects. These small stores provide the one access
//! pattern the core requires of that collaborator: exact-match search by
//! name over a document of named records.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use log::info;
use serde_yaml::Value;

use crate::game_mode::{legacy, GameMode};
use crate::network::NetworkRecord;

/// Named network records loaded from a store document.
#[derive(Debug, Default)]
pub struct NetworkDb {
    records: BTreeMap<String, NetworkRecord>,
}

impl NetworkDb {
    /// Load a YAML document mapping network names to network records.
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .wrap_err_with(|| format!("Failed to open network store '{}'", path.display()))?;
        let records: BTreeMap<String, NetworkRecord> = serde_yaml::from_reader(file)
            .wrap_err_with(|| format!("Failed to parse network store '{}'", path.display()))?;
        info!("Loaded {} network record(s) from {path:?}", records.len());
        Ok(Self { records })
    }

    /// Exact-match lookup by name.
    pub fn search(&self, name: &str) -> Option<&NetworkRecord> {
        self.records.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }
}

/// Named, validated game modes loaded from a store document.
///
/// Validation happens at load time, fail-fast: one malformed game mode
/// fails the whole load rather than surfacing later mid-setup.
#[derive(Debug, Default)]
pub struct GameModeDb {
    game_modes: BTreeMap<String, GameMode>,
}

impl GameModeDb {
    /// Load a YAML document mapping game-mode names to game-mode documents
    /// (nested or legacy flattened shape).
    pub fn load(path: &Path) -> Result<Self> {
        let file = File::open(path)
            .wrap_err_with(|| format!("Failed to open game mode store '{}'", path.display()))?;
        let docs: BTreeMap<String, Value> = serde_yaml::from_reader(file)
            .wrap_err_with(|| format!("Failed to parse game mode store '{}'", path.display()))?;

        let mut game_modes = BTreeMap::new();
        for (name, doc) in docs {
            let doc = doc
                .as_mapping()
                .cloned()
                .ok_or_else(|| color_eyre::eyre::eyre!(
                    "Game mode '{name}' must be a mapping"
                ))?;
            let game_mode = GameMode::create(&legacy::normalize(doc))
                .wrap_err_with(|| format!("Invalid game mode '{name}'"))?;
            game_modes.insert(name, game_mode);
        }
        info!("Loaded {} game mode(s) from {path:?}", game_modes.len());
        Ok(Self { game_modes })
    }

    /// Exact-match lookup by name.
    pub fn search(&self, name: &str) -> Option<&GameMode> {
        self.game_modes.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.game_modes.keys().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const NETWORK_STORE_YAML: &str = r#"
"Two-node lab":
  nodes:
    - id: "a"
    - id: "b"
  edges:
    - ["a", "b"]
  set_random_entry_nodes: true
  num_of_random_entry_nodes: 1
"Empty net":
  nodes: []
"#;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{content}").unwrap();
        file
    }

    #[test]
    fn test_network_search_is_exact_match_only() {
        let file = write_temp(NETWORK_STORE_YAML);
        let db = NetworkDb::load(file.path()).unwrap();
        assert!(db.search("Two-node lab").is_some());
        assert!(db.search("two-node lab").is_none());
        assert!(db.search("Two-node").is_none());
        assert_eq!(db.names().count(), 2);
    }

    #[test]
    fn test_network_record_from_store_instantiates() {
        let file = write_temp(NETWORK_STORE_YAML);
        let db = NetworkDb::load(file.path()).unwrap();
        let network = db
            .search("Two-node lab")
            .cloned()
            .unwrap()
            .into_network()
            .unwrap();
        assert_eq!(network.node_count(), 2);
    }

    #[test]
    fn test_game_mode_store_validates_at_load() {
        let store = format!(
            "\"Default Game Mode\":\n{}",
            indent(crate::game_mode::test_fixtures::NESTED_GAME_MODE_YAML, 2)
        );
        let file = write_temp(&store);
        let db = GameModeDb::load(file.path()).unwrap();
        assert!(db.search("Default Game Mode").is_some());
        assert!(db.search("Missing Mode").is_none());

        let broken = store.replace("standard_rewards", "definitely_not_registered");
        let file = write_temp(&broken);
        assert!(GameModeDb::load(file.path()).is_err());
    }

    fn indent(text: &str, spaces: usize) -> String {
        let pad = " ".repeat(spaces);
        text.lines()
            .map(|line| {
                if line.is_empty() {
                    line.to_string()
                } else {
                    format!("{pad}{line}")
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
