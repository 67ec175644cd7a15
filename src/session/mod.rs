//! Interactive game session.
//!
//! Drives one game over a `Console`:
//! - Asks for the pile size and who starts, re-asking on bad input
//! - Alternates turns, the bot choosing via a `MovePolicy`
//! - Announces the winner under the misère rule: whoever takes the last
//!   pencil loses

mod game;

pub use game::{Session, SessionBuilder};
