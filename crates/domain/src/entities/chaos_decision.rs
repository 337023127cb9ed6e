//! Fault-injection decision for a single request

use serde::{Deserialize, Serialize};

/// Status code reported for requests that are not failed
const SUCCESS_STATUS: u16 = 200;

/// Outcome of evaluating the chaos configuration for one request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChaosDecision {
    /// Whether the request must be failed
    pub should_fail: bool,
    /// Status code to answer with (200 when passing)
    pub status_code: u16,
    /// Delay to apply before answering
    pub delay_ms: u64,
}

impl ChaosDecision {
    /// Let the request through after the given delay
    pub const fn pass(delay_ms: u64) -> Self {
        Self {
            should_fail: false,
            status_code: SUCCESS_STATUS,
            delay_ms,
        }
    }

    /// Fail the request with `status_code` after the given delay
    pub const fn fail(status_code: u16, delay_ms: u64) -> Self {
        Self {
            should_fail: true,
            status_code,
            delay_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pass_uses_success_status() {
        let decision = ChaosDecision::pass(15);
        assert!(!decision.should_fail);
        assert_eq!(decision.status_code, 200);
        assert_eq!(decision.delay_ms, 15);
    }

    #[test]
    fn fail_keeps_status_and_delay() {
        let decision = ChaosDecision::fail(503, 0);
        assert!(decision.should_fail);
        assert_eq!(decision.status_code, 503);
        assert_eq!(decision.delay_ms, 0);
    }
}
