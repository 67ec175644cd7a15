//! Game state: the pile and whose turn it is.
//!
//! `GameState` is a small `Copy` value. Turn processing takes a state and
//! returns the next one instead of mutating engine fields.

use serde::{Deserialize, Serialize};

use super::action::Move;
use super::player::Player;

/// Pencils left on the table and the player on move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// Remaining pencils. The game is over at 0.
    pub pencils: u32,

    /// Player whose turn it is. After the last pencil is taken this is
    /// the player announced as winner.
    pub on_move: Player,
}

impl GameState {
    #[must_use]
    pub const fn new(pencils: u32, on_move: Player) -> Self {
        Self { pencils, on_move }
    }

    /// No pencils left.
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.pencils == 0
    }

    /// Remove `mv.count` pencils and pass the turn.
    ///
    /// Saturates at 0; callers validate the count first.
    #[must_use]
    pub fn apply(self, mv: Move) -> Self {
        debug_assert_eq!(mv.player, self.on_move, "move by player not on move");
        debug_assert!(mv.count <= self.pencils, "move takes more than the pile");
        Self {
            pencils: self.pencils.saturating_sub(mv.count),
            on_move: self.on_move.other(),
        }
    }

    /// The pile as a row of markers, one per pencil.
    #[must_use]
    pub fn render(&self, marker: char) -> String {
        std::iter::repeat(marker).take(self.pencils as usize).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_removes_and_toggles() {
        let state = GameState::new(5, Player::Human);
        let next = state.apply(Move::new(Player::Human, 2));
        assert_eq!(next, GameState::new(3, Player::Bot));
        assert!(!next.is_over());
    }

    #[test]
    fn test_emptying_move_passes_turn() {
        let state = GameState::new(2, Player::Bot);
        let next = state.apply(Move::new(Player::Bot, 2));
        assert!(next.is_over());
        // The player who emptied the pile is no longer on move
        assert_eq!(next.on_move, Player::Human);
    }

    #[test]
    fn test_render() {
        assert_eq!(GameState::new(5, Player::Human).render('|'), "|||||");
        assert_eq!(GameState::new(2, Player::Bot).render('*'), "**");
        assert_eq!(GameState::new(0, Player::Bot).render('|'), "");
    }
}
