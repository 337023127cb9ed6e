//! Application layer - Use cases and orchestration
//!
//! Contains the HL7 intake pipeline, chaos evaluation and the port
//! definitions implemented by the infrastructure layer.

pub mod error;
pub mod hl7_parser;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use hl7_parser::parse_message;
pub use ports::*;
pub use services::*;
