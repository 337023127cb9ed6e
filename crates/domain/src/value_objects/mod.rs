//! Value objects - Immutable domain primitives

mod ack_code;
mod message_id;

pub use ack_code::AckCode;
pub use message_id::MessageId;
