//! Random source backed by the thread-local generator of `rand`

use application::ports::RandomSource;
use rand::Rng;

/// Draws uniform integers from `rand::rng()`
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    pub const fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandomSource {
    /// Uniform integer in `[low, high)`; an empty range yields `low`
    fn next_int(&self, low: i32, high: i32) -> i32 {
        if low >= high {
            return low;
        }
        rand::rng().random_range(low..high)
    }
}
