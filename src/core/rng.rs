//! Deterministic random number generation for dealing and drawing.
//!
//! ## Key Features
//!
//! - **Deterministic**: the same seed produces the identical tatami and
//!   reading order, which is what makes round tests reliable.
//! - **Forkable**: each round gets an independent branch of the session
//!   RNG, so replaying never re-deals the previous round's cards.
//! - **Entropy-seeded by default**: live play uses `from_entropy`; tests
//!   pass fixed seeds.
//!
//! ## Usage
//!
//! ```
//! use karuta_engine::core::GameRng;
//!
//! let mut rng = GameRng::new(42);
//! let mut replayed = GameRng::new(42);
//! assert_eq!(rng.gen_range_usize(0..100), replayed.gen_range_usize(0..100));
//!
//! // Forks produce different but deterministic sequences.
//! let mut fork = rng.fork();
//! assert_ne!(rng.gen_range_usize(0..1000), fork.gen_range_usize(0..1000));
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking for per-round branches.
///
/// Uses ChaCha8 for speed while keeping high-quality randomness.
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

    /// Create an RNG seeded from OS entropy.
    ///
    /// Live rounds use this; deterministic tests use [`GameRng::new`].
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence. The
    /// controller forks once per round, so a session seeded with `new`
    /// yields a reproducible sequence of rounds.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Sample `count` distinct elements from `pool`, uniformly at random.
    ///
    /// The order of the returned elements is itself random. If `count`
    /// exceeds the pool size the whole pool is returned shuffled; callers
    /// that need an exact size validate it beforehand.
    #[must_use]
    pub fn sample_distinct<T: Copy>(&mut self, pool: &[T], count: usize) -> Vec<T> {
        let mut scratch: Vec<T> = pool.to_vec();
        let (picked, _) = scratch.partial_shuffle(&mut self.inner, count);
        picked.to_vec()
    }
}
