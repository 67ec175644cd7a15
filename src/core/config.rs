//! Game configuration.
//!
//! The rule parameters are fixed when the engine is built: how many pencils
//! a player may take per turn, the two display names, and the marker used
//! to draw the pile. `Default` gives the standard game (John vs. Jack,
//! `|`, take 1 to 3).

use serde::{Deserialize, Serialize};

use super::player::{Player, PlayerMap};
use crate::error::ConfigError;

/// Largest number of pencils that may be taken in one turn.
pub const DEFAULT_MAX_REMOVE: u32 = 3;

/// Symbol printed once per remaining pencil.
pub const DEFAULT_MARKER: char = '|';

/// Rule and display parameters for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Upper bound of a single removal (lower bound is always 1).
    pub max_remove_per_turn: u32,

    /// Display names, also what the player types to choose who starts.
    pub player_names: PlayerMap<String>,

    /// Pile marker.
    pub marker: char,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_remove_per_turn: DEFAULT_MAX_REMOVE,
            player_names: PlayerMap::from_pair("John".to_string(), "Jack".to_string()),
            marker: DEFAULT_MARKER,
        }
    }
}

impl GameConfig {
    #[must_use]
    pub fn with_names(mut self, human: impl Into<String>, bot: impl Into<String>) -> Self {
        self.player_names = PlayerMap::from_pair(human.into(), bot.into());
        self
    }

    #[must_use]
    pub fn with_marker(mut self, marker: char) -> Self {
        self.marker = marker;
        self
    }

    #[must_use]
    pub fn with_max_remove(mut self, max: u32) -> Self {
        self.max_remove_per_turn = max;
        self
    }

    /// Display name of a player.
    #[must_use]
    pub fn name(&self, player: Player) -> &str {
        &self.player_names[player]
    }

    /// Player whose name equals `input` exactly.
    #[must_use]
    pub fn player_named(&self, input: &str) -> Option<Player> {
        self.player_names.find(|name| name == input)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_remove_per_turn == 0 {
            return Err(ConfigError::ZeroMaxRemove);
        }
        if self.player_names.iter().any(|(_, name)| name.is_empty()) {
            return Err(ConfigError::EmptyName);
        }
        let human = self.name(Player::Human);
        if human == self.name(Player::Bot) {
            return Err(ConfigError::DuplicateName(human.to_string()));
        }
        Ok(())
    }
}
