//! Deterministic random number generation.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical deals and shuffles
//! - **Serializable**: O(1) state capture and restore
//!
//! ```
//! use rust_uno::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.random_in_range(1, 6), b.random_in_range(1, 6));
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Deterministic game RNG.
///
/// Uses ChaCha8 for speed while keeping good statistical quality.
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

    /// Create an RNG from an OS-random seed. The seed is still recorded so the
    /// game can be replayed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform integer in `[min, max]`, both ends inclusive.
    ///
    /// Panics if `min > max`.
    pub fn random_in_range(&mut self, min: usize, max: usize) -> usize {
        assert!(min <= max, "empty range [{min}, {max}]");
        self.inner.gen_range(min..=max)
    }

    /// Fisher-Yates shuffle in place.
    ///
    /// Walks from the last index down, swapping each slot with a uniformly
    /// chosen slot at or below it, so every permutation is equally likely.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.random_in_range(0, i);
            slice.swap(i, j);
        }
    }

    /// Choose a random element from a slice.
    #[must_use]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        if slice.is_empty() {
            return None;
        }
        let idx = self.random_in_range(0, slice.len() - 1);
        slice.get(idx)
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

/// Serializable RNG state.
///
/// Uses the ChaCha8 word position, so capture is O(1) regardless of how many
/// numbers have been drawn.
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
            assert_eq!(rng1.random_in_range(0, 1000), rng2.random_in_range(0, 1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.random_in_range(0, 1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.random_in_range(0, 1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_range_is_inclusive() {
        let mut rng = GameRng::new(7);
        let mut seen_min = false;
        let mut seen_max = false;

        for _ in 0..500 {
            let n = rng.random_in_range(3, 6);
            assert!((3..=6).contains(&n));
            seen_min |= n == 3;
            seen_max |= n == 6;
        }

        assert!(seen_min && seen_max);
        assert_eq!(rng.random_in_range(5, 5), 5);
    }

    #[test]
    fn test_shuffle() {
        let mut rng = GameRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_is_roughly_uniform() {
        // Each of the 6 permutations of three items should turn up
        // about 1/6 of the time.
        let mut rng = GameRng::new(99);
        let mut counts = rustc_hash::FxHashMap::default();
        let trials = 6000;

        for _ in 0..trials {
            let mut items = [0u8, 1, 2];
            rng.shuffle(&mut items);
            *counts.entry(items).or_insert(0usize) += 1;
        }

        assert_eq!(counts.len(), 6);
        for (perm, n) in counts {
            assert!((800..1200).contains(&n), "{perm:?} seen {n} times");
        }
    }

    #[test]
    fn test_shuffle_trivial_slices() {
        let mut rng = GameRng::new(1);
        let mut empty: [u8; 0] = [];
        rng.shuffle(&mut empty);
        let mut one = [9];
        rng.shuffle(&mut one);
        assert_eq!(one, [9]);
    }

    #[test]
    fn test_choose() {
        let mut rng = GameRng::new(42);
        let items = vec![1, 2, 3, 4, 5];

        let chosen = rng.choose(&items);
        assert!(items.contains(chosen.unwrap()));

        let empty: Vec<i32> = vec![];
        assert!(rng.choose(&empty).is_none());
    }

    #[test]
    fn test_state_serialization() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.random_in_range(0, 1000);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.random_in_range(0, 1000)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.random_in_range(0, 1000)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
