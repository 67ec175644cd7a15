//! Rules for the pencil game.
//!
//! `RulesEngine` decides which moves are legal and when the game ends.
//! `input` turns raw console answers into values the engine can check.

pub mod engine;
pub mod input;

pub use engine::{GameResult, LastPencilRules, RulesEngine};
pub use input::{parse_first_player, parse_pencil_count, parse_removal};
