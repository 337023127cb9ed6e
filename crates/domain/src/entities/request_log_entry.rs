//! Request log entry - One structured record per processed message

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::MessageId;

/// Control id recorded when the message could not be parsed
pub const UNKNOWN_CONTROL_ID: &str = "UNKNOWN";

/// Acknowledgment code recorded for chaos-injected failures
pub const CHAOS_ACK_CODE: &str = "CHAOS";

/// Outcome record for a single inbound message
///
/// Carries identifiers and outcome facts only. The message body is never
/// part of an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestLogEntry {
    /// Correlation id of the HTTP request
    pub message_id: MessageId,
    /// MSH-10 of the message, or `UNKNOWN`
    pub message_control_id: String,
    /// HTTP status returned to the caller
    pub status_code: u16,
    /// Wall time spent handling the request
    pub processing_time_ms: u64,
    /// Whether a chaos failure was injected
    pub chaos_applied: bool,
    /// Configured error type when chaos was applied
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chaos_type: Option<String>,
    /// `AA`, `AR`, ... or `CHAOS`
    pub ack_code: String,
    /// Deployment environment name
    pub environment: String,
    /// When the entry was produced
    pub timestamp: DateTime<Utc>,
}

impl RequestLogEntry {
    /// Create an entry for a request that was answered without chaos
    pub fn new(
        message_id: MessageId,
        message_control_id: impl Into<String>,
        status_code: u16,
        ack_code: impl Into<String>,
    ) -> Self {
        Self {
            message_id,
            message_control_id: message_control_id.into(),
            status_code,
            processing_time_ms: 0,
            chaos_applied: false,
            chaos_type: None,
            ack_code: ack_code.into(),
            environment: String::new(),
            timestamp: Utc::now(),
        }
    }

    /// Create an entry for a chaos-injected failure
    pub fn chaos(
        message_id: MessageId,
        message_control_id: impl Into<String>,
        status_code: u16,
        chaos_type: impl Into<String>,
    ) -> Self {
        Self {
            chaos_applied: true,
            chaos_type: Some(chaos_type.into()),
            ..Self::new(message_id, message_control_id, status_code, CHAOS_ACK_CODE)
        }
    }

    /// Set the processing time
    #[must_use]
    pub const fn with_processing_time(mut self, ms: u64) -> Self {
        self.processing_time_ms = ms;
        self
    }

    /// Set the environment name
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }
}
