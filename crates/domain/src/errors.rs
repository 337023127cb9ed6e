//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A chaos configuration violated one or more constraints
    #[error("Invalid chaos configuration: {}", .0.join("; "))]
    InvalidChaosConfig(Vec<String>),
}
