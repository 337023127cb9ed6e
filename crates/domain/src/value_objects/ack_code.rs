//! HL7 acknowledgment codes (MSA-1)

use std::fmt;

use serde::{Deserialize, Serialize};

/// Acknowledgment code carried in the MSA segment of a reply
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum AckCode {
    /// Application accept
    Accept,
    /// Application error
    Error,
    /// Application reject
    Reject,
    /// Any code outside the standard three
    Other(String),
}

impl AckCode {
    /// The wire representation of the code
    pub fn as_str(&self) -> &str {
        match self {
            Self::Accept => "AA",
            Self::Error => "AE",
            Self::Reject => "AR",
            Self::Other(code) => code,
        }
    }

    /// Human-readable text placed in MSA-3
    pub const fn text(&self) -> &'static str {
        match self {
            Self::Accept => "Message accepted",
            Self::Error => "Application error",
            Self::Reject => "Application reject",
            Self::Other(_) => "Unknown",
        }
    }
}

impl From<&str> for AckCode {
    fn from(code: &str) -> Self {
        match code {
            "AA" => Self::Accept,
            "AE" => Self::Error,
            "AR" => Self::Reject,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for AckCode {
    fn from(code: String) -> Self {
        Self::from(code.as_str())
    }
}

impl From<AckCode> for String {
    fn from(code: AckCode) -> Self {
        code.as_str().to_string()
    }
}

impl fmt::Display for AckCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
