//! Deterministic die rolls.
//!
//! ## Key Features
//!
//! - **Deterministic**: same seed produces the identical face sequence
//! - **Serializable**: O(1) state capture and restore
//!
//! Uses ChaCha8 for speed while keeping high-quality randomness. The engine
//! consumes this through the [`DieSource`] seam, so a scripted source can
//! stand in during tests.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::dice::DieSource;

/// Seeded RNG producing die faces.
///
/// ```
/// use mexico_engine::{DieSource, GameRng};
///
/// let mut a = GameRng::new(42);
/// let mut b = GameRng::new(42);
/// assert_eq!(a.roll_die(), b.roll_die());
/// ```
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Get the current state for serialization.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
        }
    }
}

impl DieSource for GameRng {
    fn roll_die(&mut self) -> u8 {
        self.inner.gen_range(1..=6)
    }
}

/// Serializable RNG state for checkpointing.
///
/// Uses the ChaCha8 word position for O(1) serialization regardless of how
/// many faces have been rolled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.roll_die(), rng2.roll_die());
        }
    }

    #[test]
    fn test_faces_in_range() {
        let mut rng = GameRng::new(7);

        for _ in 0..1000 {
            let face = rng.roll_die();
            assert!((1..=6).contains(&face));
        }
    }

    #[test]
    fn test_all_faces_appear() {
        let mut rng = GameRng::new(1);
        let mut seen = [false; 6];

        for _ in 0..1000 {
            seen[(rng.roll_die() - 1) as usize] = true;
        }

        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..20).map(|_| rng1.roll_die()).collect();
        let seq2: Vec<_> = (0..20).map(|_| rng2.roll_die()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);

        for _ in 0..100 {
            rng.roll_die();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.roll_die()).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.roll_die()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let back: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, back);
    }
}
