//! Bot move selection.
//!
//! Policies are trait-based so the session can be driven by something other
//! than the optimal player (tests use scripted policies).

use crate::core::GameRng;

/// Policy for choosing how many pencils the bot takes.
pub trait MovePolicy {
    /// Choose a removal count for a pile of `pencils` (> 0) when at most
    /// `max_remove` may be taken.
    fn choose(&mut self, pencils: u32, max_remove: u32, rng: &mut GameRng) -> u32;
}

/// Optimal play for take-1-to-k with the misère rule.
///
/// Leaves the opponent a pile of `1 (mod k + 1)`. When the bot already faces
/// such a pile there is no winning move and it takes a random legal count.
/// For `k = 3`:
///
/// | pencils mod 4 | take |
/// |---|---|
/// | 0 | 3 |
/// | 3 | 2 |
/// | 2 | 1 |
/// | 1 | random in `[1, min(pencils, 4))` |
#[derive(Clone, Copy, Debug, Default)]
pub struct WinningStrategy;

impl WinningStrategy {
    /// The deterministic winning move, if one exists.
    #[must_use]
    pub fn winning_move(pencils: u32, max_remove: u32) -> Option<u32> {
        if pencils == 0 || max_remove == 0 {
            return None;
        }
        let take = (pencils - 1) % (max_remove + 1);
        (take > 0).then_some(take)
    }
}

impl MovePolicy for WinningStrategy {
    fn choose(&mut self, pencils: u32, max_remove: u32, rng: &mut GameRng) -> u32 {
        if let Some(take) = Self::winning_move(pencils, max_remove) {
            return take;
        }
        // Exclusive upper bound; at least 2 so a single pencil yields 1
        let upper = pencils.min(max_remove.saturating_add(1)).max(2);
        rng.gen_range(1..upper)
    }
}

/// Always takes as many as allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyPolicy;

impl MovePolicy for GreedyPolicy {
    fn choose(&mut self, pencils: u32, max_remove: u32, _rng: &mut GameRng) -> u32 {
        pencils.min(max_remove).max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn choose(pencils: u32) -> u32 {
        WinningStrategy.choose(pencils, 3, &mut GameRng::new(42))
    }

    #[test]
    fn test_multiple_of_four_takes_three() {
        assert_eq!(choose(4), 3);
        assert_eq!(choose(8), 3);
        assert_eq!(choose(100), 3);
    }

    #[test]
    fn test_residue_three_takes_two() {
        assert_eq!(choose(3), 2);
        assert_eq!(choose(7), 2);
    }

    #[test]
    fn test_residue_two_takes_one() {
        assert_eq!(choose(2), 1);
        assert_eq!(choose(6), 1);
    }

    #[test]
    fn test_residue_one_is_random_in_range() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let take = WinningStrategy.choose(5, 3, &mut rng);
            assert!((1..=3).contains(&take));
            seen[(take - 1) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_single_pencil() {
        assert_eq!(choose(1), 1);
    }

    #[test]
    fn test_winning_move_leaves_one_mod_k_plus_one() {
        for max in 1..=6 {
            for pencils in 1..50 {
                if let Some(take) = WinningStrategy::winning_move(pencils, max) {
                    assert!(take >= 1 && take <= max);
                    assert_eq!((pencils - take) % (max + 1), 1);
                }
            }
        }
    }

    #[test]
    fn test_greedy() {
        let mut rng = GameRng::new(0);
        assert_eq!(GreedyPolicy.choose(10, 3, &mut rng), 3);
        assert_eq!(GreedyPolicy.choose(2, 3, &mut rng), 2);
    }
}
