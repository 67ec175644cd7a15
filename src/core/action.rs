//! A single move: who removed how many pencils.

use serde::{Deserialize, Serialize};

use super::player::Player;

/// A validated removal by one player.
///
/// Construct through `rules::validate_removal` so the count is known to be
/// legal for the state it is applied to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Who moved.
    pub player: Player,
    /// Pencils taken (at least 1).
    pub count: u32,
}

impl Move {
    #[must_use]
    pub const fn new(player: Player, count: u32) -> Self {
        Self { player, count }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} takes {}", self.player, self.count)
    }
}
