//! Result of extracting the message control id from a raw HL7 message

/// Outcome of parsing the MSH segment of an inbound message
///
/// Failure reasons describe structure only (field counts, prefixes) and
/// never quote message content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// MSH-10 was present and non-blank
    Valid {
        /// Trimmed message control id
        control_id: String,
    },
    /// The message could not be used
    Invalid {
        /// Structural description of the problem
        reason: String,
    },
}

impl ParseOutcome {
    /// Successful parse with the given control id
    pub fn valid(control_id: impl Into<String>) -> Self {
        Self::Valid {
            control_id: control_id.into(),
        }
    }

    /// Failed parse with the given reason
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }

    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid { .. })
    }

    pub fn control_id(&self) -> Option<&str> {
        match self {
            Self::Valid { control_id } => Some(control_id),
            Self::Invalid { .. } => None,
        }
    }

    pub fn failure_reason(&self) -> Option<&str> {
        match self {
            Self::Valid { .. } => None,
            Self::Invalid { reason } => Some(reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_outcome_exposes_control_id_only() {
        let outcome = ParseOutcome::valid("ALPHA123");
        assert!(outcome.is_valid());
        assert_eq!(outcome.control_id(), Some("ALPHA123"));
        assert!(outcome.failure_reason().is_none());
    }

    #[test]
    fn invalid_outcome_exposes_reason_only() {
        let outcome = ParseOutcome::invalid("message body is empty");
        assert!(!outcome.is_valid());
        assert!(outcome.control_id().is_none());
        assert_eq!(outcome.failure_reason(), Some("message body is empty"));
    }
}
