//! Infrastructure adapters
//!
//! Adapters connect application ports to concrete implementations.

mod in_memory_chaos_config_store;
mod thread_random_source;
mod tracing_request_log;

pub use in_memory_chaos_config_store::InMemoryChaosConfigStore;
pub use thread_random_source::ThreadRandomSource;
pub use tracing_request_log::{REQUEST_LOG_TARGET, TracingRequestLog};
