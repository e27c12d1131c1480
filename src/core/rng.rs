//! Random index sources for deck draws.
//!
//! Drawing needs exactly one capability: a uniform index in `[0, n)`.
//! `RandomSource` captures that, so players can be driven by a seeded
//! `GameRng` in play and by a `ScriptedRng` in tests.
//!
//! ## Usage
//!
//! ```
//! use rust_tcg::core::{GameRng, RandomSource};
//!
//! let mut rng = GameRng::new(42);
//! let index = rng.next_index(20);
//! assert!(index < 20);
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.next_index(20), index);
//! ```

use std::collections::VecDeque;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// A provider of uniformly distributed indices.
pub trait RandomSource {
    /// Return an index in `[0, bound)`.
    ///
    /// Callers never pass `bound == 0`.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

/// Deterministic ChaCha8-backed RNG.
///
/// Supports forking so each player of a match can own an independent,
/// reproducible stream derived from one match seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create an RNG seeded from the operating system.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::thread_rng().gen())
    }

    /// The seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG into an independent branch.
    ///
    /// Forks are deterministic: the n-th fork of a given seed always
    /// produces the same sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E37_79B9_7F4A_7C15));
        Self::new(fork_seed)
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
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
            fork_counter: state.fork_counter,
        }
    }
}

impl RandomSource for GameRng {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index requires a non-empty range");
        self.inner.gen_range(0..bound)
    }
}

/// Serializable RNG state.
///
/// ChaCha8 exposes its word position, so restoring is O(1) no matter how
/// many draws happened.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position (128-bit counter)
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays a fixed sequence of indices.
///
/// Each scripted value is reduced modulo the requested bound. Once the
/// script runs out every draw picks index 0.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRng {
    script: VecDeque<usize>,
}

impl ScriptedRng {
    /// Create a source that replays `indices` in order.
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: indices.into_iter().collect(),
        }
    }

    /// Number of scripted indices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRng {
    fn next_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "next_index requires a non-empty range");
        self.script.pop_front().map_or(0, |i| i % bound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_index(1000), rng2.next_index(1000));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = GameRng::new(1);
        let mut rng2 = GameRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_index_within_bound() {
        let mut rng = GameRng::new(7);
        for bound in 1..50 {
            assert!(rng.next_index(bound) < bound);
        }
        assert_eq!(rng.next_index(1), 0);
    }

    #[test]
    fn test_index_covers_range() {
        let mut rng = GameRng::new(3);
        let mut seen = [false; 5];
        for _ in 0..500 {
            seen[rng.next_index(5)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_fork_produces_different_sequence() {
        let mut rng = GameRng::new(42);
        let mut forked = rng.fork();

        let seq1: Vec<_> = (0..10).map(|_| rng.next_index(1000)).collect();
        let seq2: Vec<_> = (0..10).map(|_| forked.next_index(1000)).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        let forked1 = rng1.fork();
        let forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
    }

    #[test]
    fn test_state_restore() {
        let mut rng = GameRng::new(42);
        for _ in 0..100 {
            rng.next_index(20);
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_index(20)).collect();

        let mut restored = GameRng::from_state(&state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_index(20)).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_state_serde() {
        let state = GameRngState {
            seed: 42,
            word_pos: 12345,
            fork_counter: 5,
        };

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: GameRngState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }

    #[test]
    fn test_scripted_replays_and_wraps() {
        let mut rng = ScriptedRng::new([2, 7, 1]);

        assert_eq!(rng.next_index(5), 2);
        assert_eq!(rng.next_index(5), 2); // 7 % 5
        assert_eq!(rng.remaining(), 1);
        assert_eq!(rng.next_index(5), 1);

        // Exhausted script falls back to the first index
        assert_eq!(rng.next_index(5), 0);
    }

    #[test]
    fn test_boxed_source() {
        let mut boxed: Box<dyn RandomSource> = Box::new(ScriptedRng::new([3]));
        assert_eq!(boxed.next_index(10), 3);
    }
}
