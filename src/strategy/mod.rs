//! Bot strategies.
//!
//! - `WinningStrategy`: optimal play with a random fallback (the default bot)
//! - `GreedyPolicy`: takes the maximum every turn

pub mod policy;

pub use policy::{GreedyPolicy, MovePolicy, WinningStrategy};
