//! Parsing of console answers into game values.

use crate::core::{GameConfig, Player};
use crate::error::InputError;

/// Parse the initial pile size.
///
/// Anything that is not a non-negative integer is "not numeric"; zero is
/// "not positive".
pub fn parse_pencil_count(input: &str) -> Result<u32, InputError> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| InputError::PencilsNotNumeric)?;
    match u32::try_from(value) {
        Ok(0) => Err(InputError::PencilsNotPositive),
        Ok(count) => Ok(count),
        Err(_) => Err(InputError::PencilsNotNumeric),
    }
}

/// Match the answer to "who will be the first" against the player names.
/// Must be an exact, case-sensitive match.
pub fn parse_first_player(config: &GameConfig, input: &str) -> Result<Player, InputError> {
    config
        .player_named(input)
        .ok_or_else(|| InputError::UnknownPlayer {
            first: config.name(Player::Human).to_string(),
            second: config.name(Player::Bot).to_string(),
        })
}

/// Parse a removal count typed by the human. Range checks happen in the
/// rules engine.
pub fn parse_removal(config: &GameConfig, input: &str) -> Result<i64, InputError> {
    input
        .trim()
        .parse()
        .map_err(|_| InputError::RemovalNotNumeric {
            max: config.max_remove_per_turn,
        })
}
