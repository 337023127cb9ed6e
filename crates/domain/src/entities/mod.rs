//! Domain entities - Configuration and per-request records

mod chaos_config;
mod chaos_decision;
mod parse_outcome;
mod request_log_entry;

pub use chaos_config::{
    ChaosConfig, LatencyConfig, MAX_DELAY_MS, MAX_FAILURE_RATE_PERCENT, validation_messages,
};
pub use chaos_decision::ChaosDecision;
pub use parse_outcome::ParseOutcome;
pub use request_log_entry::{CHAOS_ACK_CODE, RequestLogEntry, UNKNOWN_CONTROL_ID};
