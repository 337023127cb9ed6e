//! Bounded graceful shutdown
//!
//! Graceful shutdown waits for in-flight requests, which may include chaos
//! latency of up to 30 s. The drain is cut off once the configured timeout
//! has elapsed after the shutdown signal.

use std::{future::IntoFuture, sync::Arc, time::Duration};

use tokio::sync::Notify;
use tracing::warn;

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// Every connection closed before the deadline
    Drained,
    /// The deadline passed with connections still open
    TimedOut,
}

/// Drive `server` to completion, giving up `timeout` after `shutdown_started`
/// is notified
///
/// The deadline does not run until the notification arrives, so a server
/// that is never asked to stop keeps running.
pub async fn drain_within<S, E>(
    server: S,
    shutdown_started: Arc<Notify>,
    timeout: Duration,
) -> Result<ShutdownOutcome, E>
where
    S: IntoFuture<Output = Result<(), E>>,
{
    let deadline = async {
        shutdown_started.notified().await;
        tokio::time::sleep(timeout).await;
    };

    tokio::select! {
        result = server.into_future() => result.map(|()| ShutdownOutcome::Drained),
        () = deadline => {
            warn!(?timeout, "Connections still open after shutdown timeout, exiting");
            Ok(ShutdownOutcome::TimedOut)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[tokio::test(start_paused = true)]
    async fn stuck_connections_are_cut_off_after_timeout() {
        let notify = Arc::new(Notify::new());
        notify.notify_one();

        let started = tokio::time::Instant::now();
        let outcome = drain_within(
            std::future::pending::<io::Result<()>>(),
            notify,
            Duration::from_secs(30),
        )
        .await
        .unwrap();

        assert_eq!(outcome, ShutdownOutcome::TimedOut);
        assert_eq!(started.elapsed(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    async fn quick_drain_finishes_before_deadline() {
        let notify = Arc::new(Notify::new());
        notify.notify_one();

        let server = async {
            tokio::time::sleep(Duration::from_secs(2)).await;
            Ok::<(), io::Error>(())
        };
        let outcome = drain_within(server, notify, Duration::from_secs(30))
            .await
            .unwrap();

        assert_eq!(outcome, ShutdownOutcome::Drained);
    }

    #[tokio::test(start_paused = true)]
    async fn deadline_waits_for_signal() {
        let server = async {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok::<(), io::Error>(())
        };
        let outcome = drain_within(server, Arc::new(Notify::new()), Duration::from_secs(1))
            .await
            .unwrap();

        assert_eq!(outcome, ShutdownOutcome::Drained);
    }

    #[tokio::test]
    async fn server_error_is_returned() {
        let server = async { Err::<(), _>(io::Error::other("bind lost")) };
        let result = drain_within(server, Arc::new(Notify::new()), Duration::from_secs(1)).await;

        assert!(result.is_err());
    }
}
