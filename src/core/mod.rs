//! Core types: players, configuration, state, moves, RNG.

pub mod player;
pub mod rng;
pub mod config;
pub mod action;
pub mod state;

pub use player::{Player, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_MARKER, DEFAULT_MAX_REMOVE};
pub use action::Move;
pub use state::GameState;
