//! Player identification and per-player data storage.
//!
//! ## Player
//!
//! The two seats at the table: the human at the console and the bot.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `Player`, used for display names.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two players.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Human,
    Bot,
}

impl Player {
    /// Both players, human first.
    pub const ALL: [Player; 2] = [Player::Human, Player::Bot];

    /// Get the other player.
    #[must_use]
    pub const fn other(self) -> Player {
        match self {
            Player::Human => Player::Bot,
            Player::Bot => Player::Human,
        }
    }

    /// Slot index (human = 0, bot = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Player::Human => 0,
            Player::Bot => 1,
        }
    }
}

/// Per-player data with O(1) access.
///
/// ## Example
///
/// ```
/// use last_pencil::core::{Player, PlayerMap};
///
/// let mut names = PlayerMap::new(|p| format!("{p:?}"));
/// assert_eq!(names[Player::Bot], "Bot");
///
/// names[Player::Human] = "John".to_string();
/// assert_eq!(names.find(|n| n == "John"), Some(Player::Human));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a new PlayerMap with values from a factory function.
    pub fn new(factory: impl Fn(Player) -> T) -> Self {
        Self {
            data: [factory(Player::Human), factory(Player::Bot)],
        }
    }

    /// Create from explicit values.
    pub fn from_pair(human: T, bot: T) -> Self {
        Self { data: [human, bot] }
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: Player) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: Player) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Iterate over (Player, &T) pairs, human first.
    pub fn iter(&self) -> impl Iterator<Item = (Player, &T)> {
        Player::ALL.into_iter().zip(self.data.iter())
    }

    /// First player whose entry matches the predicate.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<Player> {
        self.iter().find(|(_, v)| predicate(v)).map(|(p, _)| p)
    }
}

impl<T> Index<Player> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: Player) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<Player> for PlayerMap<T> {
    fn index_mut(&mut self, player: Player) -> &mut Self::Output {
        self.get_mut(player)
    }
}
