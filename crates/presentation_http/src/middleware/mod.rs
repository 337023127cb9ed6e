//! HTTP middleware components
//!
//! Message id correlation and validated JSON extraction.

pub mod message_id;
pub mod validation;

pub use message_id::{MESSAGE_ID_HEADER, MessageIdLayer, MessageIdService};
pub use validation::{ValidatedJson, ValidationError};
