//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod chaos_config_store;
mod random_source;
mod request_log;

pub use chaos_config_store::ChaosConfigStore;
#[cfg(test)]
pub use chaos_config_store::MockChaosConfigStore;
pub use random_source::RandomSource;
#[cfg(test)]
pub use random_source::MockRandomSource;
pub use request_log::RequestLogPort;
#[cfg(test)]
pub use request_log::MockRequestLogPort;
