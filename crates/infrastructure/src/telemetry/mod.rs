//! Logging initialisation
//!
//! Installs the global `tracing` subscriber in text or JSON format.

mod logging;

pub use logging::{env_filter, init_logging};
