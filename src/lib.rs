//! # last-pencil
//!
//! A console pencil-removal game. Players alternately take 1 to 3 pencils
//! from a shared pile; whoever takes the last pencil loses. One side is the
//! human at the console, the other a bot that plays the winning strategy
//! and falls back to a random move when it has none.
//!
//! ## Modules
//!
//! - `core`: Players, configuration, state, moves, RNG
//! - `rules`: Move validation, end-of-game detection, input parsing
//! - `strategy`: Bot move policies
//! - `console`: Line-based I/O boundary
//! - `session`: Prompts and the turn loop
//! - `error`: Recoverable input errors and fatal session errors

pub mod core;
pub mod rules;
pub mod strategy;
pub mod console;
pub mod session;
pub mod error;

// Re-export commonly used types
pub use crate::core::{GameConfig, GameRng, GameState, Move, Player, PlayerMap};
pub use crate::rules::{GameResult, LastPencilRules, RulesEngine};
pub use crate::strategy::{GreedyPolicy, MovePolicy, WinningStrategy};
pub use crate::console::{Console, IoConsole};
pub use crate::session::{Session, SessionBuilder};
pub use crate::error::{ConfigError, GameError, InputError};
