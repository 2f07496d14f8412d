//! Deterministic random number generation.
//!
//! The engine's only source of randomness is deck shuffling. `GameRng`
//! wraps `ChaCha8Rng` so matches can be seeded for reproducible tests
//! and replays, or entropy-seeded for real play.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seedable RNG used for deck shuffling.
///
/// Same seed, same shuffle:
///
/// ```
/// use cryptids_engine::GameRng;
///
/// let mut a = GameRng::new(42);
/// let mut b = GameRng::new(42);
///
/// let mut deck_a = vec![1, 2, 3, 4, 5];
/// let mut deck_b = deck_a.clone();
///
/// a.shuffle(&mut deck_a);
/// b.shuffle(&mut deck_b);
/// assert_eq!(deck_a, deck_b);
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

    /// Create an RNG seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        let seed: u64 = rand::thread_rng().gen();
        Self::new(seed)
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }

    /// Shuffle a slice in place.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}
