//! HL7 acknowledgment synthesis

use chrono::{DateTime, Utc};
use domain::AckCode;
use serde::{Deserialize, Serialize};

use crate::error::ApplicationError;

/// HL7 segment separator
const SEGMENT_SEPARATOR: &str = "\r";

/// Timestamp layout used in MSH-7 and the ACK control id
const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";

/// Identifiers placed in the MSH segment of generated acknowledgments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AckIdentity {
    /// MSH-3
    pub sending_application: String,
    /// MSH-4
    pub sending_facility: String,
    /// MSH-5
    pub receiving_application: String,
    /// MSH-6
    pub receiving_facility: String,
    /// MSH-11
    pub processing_id: String,
    /// MSH-12
    pub version: String,
}

impl Default for AckIdentity {
    fn default() -> Self {
        Self {
            sending_application: "MIRROR".to_string(),
            sending_facility: "TEST".to_string(),
            receiving_application: "GLS".to_string(),
            receiving_facility: "LAB".to_string(),
            processing_id: "P".to_string(),
            version: "2.4".to_string(),
        }
    }
}

/// Builds `MSH` + `MSA` acknowledgment messages
#[derive(Debug, Clone, Default)]
pub struct AckGenerator {
    identity: AckIdentity,
}

impl AckGenerator {
    /// Create a generator with the given header identifiers
    pub const fn new(identity: AckIdentity) -> Self {
        Self { identity }
    }

    /// Generate an acknowledgment stamped with the current UTC time
    pub fn generate(
        &self,
        message_control_id: &str,
        ack_code: &str,
    ) -> Result<String, ApplicationError> {
        self.generate_at(message_control_id, ack_code, Utc::now())
    }

    /// Generate an acknowledgment stamped with `timestamp`
    ///
    /// `message_control_id` is echoed into MSA-2 exactly as given.
    pub fn generate_at(
        &self,
        message_control_id: &str,
        ack_code: &str,
        timestamp: DateTime<Utc>,
    ) -> Result<String, ApplicationError> {
        if message_control_id.trim().is_empty() {
            return Err(ApplicationError::InvalidArgument(
                "message control id must not be blank".to_string(),
            ));
        }
        if ack_code.trim().is_empty() {
            return Err(ApplicationError::InvalidArgument(
                "ack code must not be blank".to_string(),
            ));
        }

        let code = AckCode::from(ack_code);
        let stamp = timestamp.format(TIMESTAMP_FORMAT).to_string();
        let id = &self.identity;

        let header = format!(
            "MSH|^~\\&|{}|{}|{}|{}|{stamp}||ACK|ACK{stamp}|{}|{}",
            id.sending_application,
            id.sending_facility,
            id.receiving_application,
            id.receiving_facility,
            id.processing_id,
            id.version,
        );
        let status = format!("MSA|{code}|{message_control_id}|{}", code.text());

        Ok([header, status].join(SEGMENT_SEPARATOR))
    }
}
