//! Rules engine for the pencil game.
//!
//! Encodes:
//! - Which removal counts are legal
//! - The forced finish when the bot faces a single pencil
//! - The misère winner rule

use std::ops::RangeInclusive;

use crate::core::{GameConfig, GameState, Move, Player};
use crate::error::InputError;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Player,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner == player
    }
}

/// Rules engine trait.
///
/// The session calls these methods to validate moves and detect the end
/// of the game; it never checks bounds itself.
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Removal counts allowed by the per-turn bound, ignoring pile size.
    fn allowed_removals(&self) -> RangeInclusive<u32> {
        1..=self.config().max_remove_per_turn
    }

    /// Check a proposed removal for the player on move.
    ///
    /// The per-turn bound is checked before the pile size, so taking 4
    /// from a pile of 2 reports `RemovalNotAllowed`.
    fn validate_removal(&self, state: &GameState, count: i64) -> Result<Move, InputError> {
        let max = self.config().max_remove_per_turn;
        let count = u32::try_from(count)
            .ok()
            .filter(|c| self.allowed_removals().contains(c))
            .ok_or(InputError::RemovalNotAllowed { max })?;
        if count > state.pencils {
            return Err(InputError::TooManyTaken);
        }
        Ok(Move::new(state.on_move, count))
    }

    /// The bot facing a single pencil takes it without consulting its
    /// strategy.
    fn is_forced_finish(&self, state: &GameState) -> bool {
        state.on_move == Player::Bot && state.pencils == 1
    }

    /// Check if the game is over.
    ///
    /// Returns `Some(result)` once the pile is empty. The winner is the
    /// player on move, i.e. the one who did not take the last pencil.
    fn is_terminal(&self, state: &GameState) -> Option<GameResult> {
        state.is_over().then_some(GameResult {
            winner: state.on_move,
        })
    }
}

/// Standard take-1-to-k rules.
#[derive(Clone, Debug, Default)]
pub struct LastPencilRules {
    config: GameConfig,
}

impl LastPencilRules {
    #[must_use]
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }
}

impl RulesEngine for LastPencilRules {
    fn config(&self) -> &GameConfig {
        &self.config
    }
}
