//! Port for request log output
//!
//! One entry is written per processed message. Entries never contain the
//! message body.

use async_trait::async_trait;
use domain::RequestLogEntry;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Sink for request log entries
#[cfg_attr(test, automock)]
#[async_trait]
pub trait RequestLogPort: Send + Sync {
    /// Record a single entry
    async fn record(&self, entry: &RequestLogEntry) -> Result<(), ApplicationError>;
}
