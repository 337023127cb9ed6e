//! HL7 Mirror HTTP presentation layer
//!
//! This crate provides the HTTP API and the server binary.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod routes;
pub mod shutdown;
pub mod state;

pub use error::ApiError;
pub use middleware::{MESSAGE_ID_HEADER, MessageIdLayer, ValidatedJson, ValidationError};
pub use routes::create_router;
pub use shutdown::{ShutdownOutcome, drain_within};
pub use state::AppState;
