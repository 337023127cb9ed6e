//! Domain layer for the HL7 endpoint mirror
//!
//! Contains the chaos configuration model, per-request value objects and
//! domain errors. This layer performs no I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
