//! Chaos evaluation - Decides whether a request fails and how long it waits

use std::sync::Arc;

use domain::{ChaosConfig, ChaosDecision};
use tracing::debug;

use crate::ports::RandomSource;

/// Status code used when the configured error type is not numeric
const FALLBACK_STATUS: u16 = 500;

/// Exclusive upper bound of a chaos roll
const ROLL_RANGE_END: i32 = 100;

/// Evaluates a chaos configuration snapshot for a single request
#[derive(Clone)]
pub struct ChaosService {
    random: Arc<dyn RandomSource>,
}

impl std::fmt::Debug for ChaosService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChaosService").finish_non_exhaustive()
    }
}

impl ChaosService {
    /// Create a service drawing rolls from `random`
    pub fn new(random: Arc<dyn RandomSource>) -> Self {
        Self { random }
    }

    /// Produce the fault-injection decision for one request
    ///
    /// The random source is only consulted when chaos is enabled. A roll in
    /// `[0, 100)` fails the request when it is strictly below the configured
    /// rate, so a rate of 25 fails on rolls 0 through 24.
    pub fn evaluate(&self, config: &ChaosConfig) -> ChaosDecision {
        let delay_ms = config.effective_delay_ms();

        if !config.enabled {
            return ChaosDecision::pass(delay_ms);
        }

        let roll = self.random.next_int(0, ROLL_RANGE_END);
        let should_fail = roll < config.failure_rate_percent;
        debug!(roll, rate = config.failure_rate_percent, should_fail, "Chaos roll");

        if should_fail {
            ChaosDecision::fail(parse_status_code(&config.default_error_type), delay_ms)
        } else {
            ChaosDecision::pass(delay_ms)
        }
    }
}

/// Parse the configured error type, falling back to 500
fn parse_status_code(error_type: &str) -> u16 {
    error_type.trim().parse().unwrap_or(FALLBACK_STATUS)
}
