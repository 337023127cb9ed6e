//! Correlation identifier attached to every inbound request

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Caller-supplied or generated correlation identifier for one request
///
/// Distinct from the HL7 message control id (MSH-10): the message id is
/// transport-level bookkeeping and exists even for unparseable messages.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(String);

impl MessageId {
    /// Generate a new random message ID
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Use the supplied value when it is non-blank, otherwise generate one
    pub fn from_header(value: Option<&str>) -> Self {
        value
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map_or_else(Self::generate, |v| Self(v.to_string()))
    }

    /// Get the message ID as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for MessageId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_are_unique() {
        assert_ne!(MessageId::generate(), MessageId::generate());
    }

    #[test]
    fn generated_id_is_a_uuid() {
        let id = MessageId::generate();
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn header_value_is_trimmed_and_kept() {
        let id = MessageId::from_header(Some("  lab-7781  "));
        assert_eq!(id.as_str(), "lab-7781");
    }

    #[test]
    fn blank_header_generates_new_id() {
        let id = MessageId::from_header(Some("   "));
        assert!(Uuid::parse_str(id.as_str()).is_ok());
    }

    #[test]
    fn missing_header_generates_new_id() {
        let id = MessageId::from_header(None);
        assert!(!id.as_str().is_empty());
    }

    #[test]
    fn display_matches_inner_value() {
        let id = MessageId::from_header(Some("550e8400-e29b-41d4-a716-446655440000"));
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = MessageId::from_header(Some("abc"));
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"abc\"");
    }
}
