//! Game-mode file loading.

use std::fs::File;
use std::path::Path;

use color_eyre::eyre::{eyre, WrapErr};
use color_eyre::Result;
use log::info;

use crate::game_mode::{legacy, GameMode};

/// Load, normalize, and validate a game-mode YAML file.
///
/// Accepts both the current nested format and the legacy flattened-key
/// format; legacy documents are translated before validation.
pub fn load_game_mode(path: &Path) -> Result<GameMode> {
    info!("Loading game mode from: {path:?}");

    let file = File::open(path)
        .wrap_err_with(|| format!("Failed to open game mode file '{}'", path.display()))?;
    let doc: serde_yaml::Value = serde_yaml::from_reader(file)
        .wrap_err_with(|| format!("Failed to parse game mode file '{}'", path.display()))?;
    let doc = doc
        .as_mapping()
        .cloned()
        .ok_or_else(|| eyre!("Game mode document must be a mapping"))?;

    let game_mode = GameMode::create(&legacy::normalize(doc))
        .wrap_err_with(|| format!("Invalid game mode in '{}'", path.display()))?;

    info!(
        "Validated game mode (reward function: {})",
        game_mode.rewards.reward_function
    );
    Ok(game_mode)
}
