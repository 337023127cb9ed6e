//! In-memory chaos configuration store
//!
//! Holds the single process-wide chaos configuration behind an `ArcSwap`.
//! Readers get a consistent snapshot without locking; writers replace the
//! whole value at once, so no reader ever observes a half-applied update.

use std::sync::Arc;

use application::ports::ChaosConfigStore;
use arc_swap::ArcSwap;
use domain::ChaosConfig;

/// Lock-free store for the runtime chaos configuration
#[derive(Debug, Clone)]
pub struct InMemoryChaosConfigStore {
    inner: Arc<ArcSwap<ChaosConfig>>,
}

impl InMemoryChaosConfigStore {
    /// Create a store seeded with `initial`
    #[must_use]
    pub fn new(initial: ChaosConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(initial)),
        }
    }
}

impl Default for InMemoryChaosConfigStore {
    fn default() -> Self {
        Self::new(ChaosConfig::default())
    }
}

impl ChaosConfigStore for InMemoryChaosConfigStore {
    fn get(&self) -> Arc<ChaosConfig> {
        self.inner.load_full()
    }

    fn replace(&self, config: Arc<ChaosConfig>) {
        self.inner.store(config);
    }
}
