//! Live randomness using the thread-local RNG.

use rand::Rng;

use crate::ports::random::RandomSource;

/// Live random source backed by `rand`'s thread-local generator.
///
/// The underlying `ThreadRng` is neither `Send` nor `Sync`, so this type
/// stores nothing and reaches for the thread-local generator on each call.
pub struct LiveRandom;

impl RandomSource for LiveRandom {
    fn below(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        rand::rng().random_range(0..bound)
    }
}
