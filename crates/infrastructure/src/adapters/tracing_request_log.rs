//! Request log adapter writing structured tracing events
//!
//! Each entry becomes one `info` event under the `request_log` target so it
//! can be routed or filtered separately from diagnostic logging.

use application::{error::ApplicationError, ports::RequestLogPort};
use async_trait::async_trait;
use domain::RequestLogEntry;
use tracing::info;

/// Tracing target used for request log events
pub const REQUEST_LOG_TARGET: &str = "request_log";

/// Emits request log entries through `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingRequestLog;

impl TracingRequestLog {
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl RequestLogPort for TracingRequestLog {
    async fn record(&self, entry: &RequestLogEntry) -> Result<(), ApplicationError> {
        info!(
            target: REQUEST_LOG_TARGET,
            message_id = %entry.message_id,
            message_control_id = %entry.message_control_id,
            status_code = entry.status_code,
            processing_time_ms = entry.processing_time_ms,
            chaos_applied = entry.chaos_applied,
            chaos_type = entry.chaos_type.as_deref().unwrap_or("none"),
            ack_code = %entry.ack_code,
            environment = %entry.environment,
            timestamp = %entry.timestamp.to_rfc3339(),
            "HL7 request processed"
        );
        Ok(())
    }
}
