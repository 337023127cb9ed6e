//! Application services - Use case implementations

mod ack_generator;
mod chaos_config_service;
mod chaos_service;
mod message_intake_service;

pub use ack_generator::{AckGenerator, AckIdentity};
pub use chaos_config_service::ChaosConfigService;
pub use chaos_service::ChaosService;
pub use message_intake_service::{
    HL7_CONTENT_TYPE, InboundMessage, IntakeOutcome, MessageIntakeService,
};
