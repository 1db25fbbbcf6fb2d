//! Deterministic random selection.
//!
//! Every random choice the engine makes (which interior edges start missing,
//! which edge erodes after a move, which row an agent starts on) goes through
//! the `IndexPicker` trait. Production games use `GameRng`; tests can pass a
//! closure to script the choices exactly.
//!
//! ```
//! use grid_pursuit::core::{GameRng, IndexPicker};
//!
//! let mut rng = GameRng::new(42);
//! let i = rng.pick_index(10);
//! assert!(i < 10);
//!
//! // Same seed, same sequence
//! let mut again = GameRng::new(42);
//! assert_eq!(again.pick_index(10), i);
//!
//! // Always take the first candidate
//! let mut first = |_len: usize| 0;
//! assert_eq!(first.pick_index(7), 0);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform index choices.
pub trait IndexPicker {
    /// Pick an index in `0..len`.
    ///
    /// Callers never pass `len == 0`. Implementations returning an index
    /// outside the range are clamped by the caller.
    fn pick_index(&mut self, len: usize) -> usize;
}

impl<F> IndexPicker for F
where
    F: FnMut(usize) -> usize,
{
    fn pick_index(&mut self, len: usize) -> usize {
        self(len)
    }
}

/// Deterministic RNG for board setup and edge erosion.
///
/// Uses ChaCha8 so a seed reproduces the same game on every platform.
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

    /// Generate a random usize in the given range.
    pub fn gen_range_usize(&mut self, range: std::ops::Range<usize>) -> usize {
        self.inner.gen_range(range)
    }
}

impl IndexPicker for GameRng {
    fn pick_index(&mut self, len: usize) -> usize {
        self.gen_range_usize(0..len)
    }
}
