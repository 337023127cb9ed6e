//! Chaos configuration - Runtime switches for fault and latency injection

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::errors::DomainError;

/// Upper bound for `failureRatePercent`
pub const MAX_FAILURE_RATE_PERCENT: i32 = 100;

/// Upper bound for `latency.delayMs`
pub const MAX_DELAY_MS: i32 = 30_000;

/// Latency simulation settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct LatencyConfig {
    /// Whether every request is delayed
    pub enabled: bool,

    /// Delay applied to each request in milliseconds
    #[validate(range(
        min = 0,
        max = MAX_DELAY_MS,
        message = "latency.delayMs must be between 0 and 30000."
    ))]
    pub delay_ms: i32,
}

/// Process-wide chaos configuration
///
/// Instances are immutable once stored: updates replace the whole value.
/// Out-of-range values are rejected by [`ChaosConfig::ensure_valid`], never
/// clamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ChaosConfig {
    /// Master switch for failure injection
    pub enabled: bool,

    /// Probability (percent) that a request fails while enabled
    #[validate(range(
        min = 0,
        max = MAX_FAILURE_RATE_PERCENT,
        message = "failureRatePercent must be between 0 and 100."
    ))]
    pub failure_rate_percent: i32,

    /// HTTP status code returned on injected failure, as a numeric string
    #[validate(custom(function = "validate_not_blank"))]
    pub default_error_type: String,

    /// Latency simulation, independent of the failure switch
    #[validate(nested)]
    pub latency: LatencyConfig,
}

impl Default for ChaosConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            failure_rate_percent: 10,
            default_error_type: "500".to_string(),
            latency: LatencyConfig::default(),
        }
    }
}

impl ChaosConfig {
    /// List every violated constraint, sorted for stable output
    pub fn violations(&self) -> Vec<String> {
        self.validate()
            .map_or_else(|errors| validation_messages(&errors), |()| Vec::new())
    }

    /// Reject the configuration if any constraint is violated
    pub fn ensure_valid(&self) -> Result<(), DomainError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(DomainError::InvalidChaosConfig(violations))
        }
    }

    /// Delay to apply to a request under this configuration
    pub fn effective_delay_ms(&self) -> u64 {
        if self.latency.enabled {
            u64::try_from(self.latency.delay_ms).unwrap_or(0)
        } else {
            0
        }
    }
}

fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required")
            .with_message(Cow::Borrowed("defaultErrorType is required.")));
    }
    Ok(())
}

/// Flatten validator errors (including nested structs) into messages
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages.sort();
    messages
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|error| {
                    error.message.as_ref().map_or_else(
                        || format!("{field}: {}", error.code),
                        ToString::to_string,
                    )
                }));
            },
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, out);
                }
            },
        }
    }
}
