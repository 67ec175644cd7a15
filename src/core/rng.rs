//! Random number generation for the bot's fallback move.
//!
//! The binary seeds from OS entropy, so play is not reproducible. Tests
//! seed explicitly to get a fixed sequence.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Process-lifetime RNG.
///
/// ```
/// use last_pencil::core::GameRng;
///
/// let mut a = GameRng::new(42);
/// let mut b = GameRng::new(42);
/// assert_eq!(a.gen_range(1..4), b.gen_range(1..4));
/// ```
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Uniform integer in `range` (inclusive start, exclusive end).
    ///
    /// Panics if the range is empty.
    pub fn gen_range(&mut self, range: std::ops::Range<u32>) -> u32 {
        self.inner.gen_range(range)
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
