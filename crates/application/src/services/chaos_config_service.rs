//! Chaos configuration use cases - Read and replace the runtime settings

use std::sync::Arc;

use domain::ChaosConfig;
use tracing::{info, instrument};

use crate::{error::ApplicationError, ports::ChaosConfigStore};

/// Reads and replaces the process-wide chaos configuration
#[derive(Clone)]
pub struct ChaosConfigService {
    store: Arc<dyn ChaosConfigStore>,
}

impl std::fmt::Debug for ChaosConfigService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChaosConfigService").finish_non_exhaustive()
    }
}

impl ChaosConfigService {
    pub fn new(store: Arc<dyn ChaosConfigStore>) -> Self {
        Self { store }
    }

    /// Current configuration snapshot
    pub fn current(&self) -> Arc<ChaosConfig> {
        self.store.get()
    }

    /// Validate and store a new configuration
    ///
    /// Returns the submitted configuration, not a fresh read of the store.
    /// On any violation the stored configuration is left untouched.
    #[instrument(skip(self, config))]
    pub fn update(&self, config: ChaosConfig) -> Result<Arc<ChaosConfig>, ApplicationError> {
        config.ensure_valid()?;

        info!(
            enabled = config.enabled,
            failure_rate_percent = config.failure_rate_percent,
            error_type = %config.default_error_type,
            latency_enabled = config.latency.enabled,
            delay_ms = config.latency.delay_ms,
            "Chaos config updated"
        );

        let stored = Arc::new(config);
        self.store.replace(Arc::clone(&stored));
        Ok(stored)
    }
}
