//! Random number port
//!
//! Chaos rolls go through this port so tests can script the sequence.

#[cfg(test)]
use mockall::automock;

/// Source of uniformly distributed integers
///
/// Implementations must be usable from many in-flight requests at once.
#[cfg_attr(test, automock)]
pub trait RandomSource: Send + Sync {
    /// Draw an integer in the half-open range `[low, high)`
    fn next_int(&self, low: i32, high: i32) -> i32;
}
