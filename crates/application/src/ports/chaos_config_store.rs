//! Port for the current chaos configuration

use std::sync::Arc;

use domain::ChaosConfig;
#[cfg(test)]
use mockall::automock;

/// Holder of the single process-wide chaos configuration
///
/// `replace` swaps the whole snapshot atomically. A reader that obtained a
/// snapshot before a replace keeps seeing the old value in full. The store
/// does not validate; callers must check the configuration first.
#[cfg_attr(test, automock)]
pub trait ChaosConfigStore: Send + Sync {
    /// Current configuration snapshot
    fn get(&self) -> Arc<ChaosConfig>;

    /// Replace the configuration with `config`
    fn replace(&self, config: Arc<ChaosConfig>);
}
