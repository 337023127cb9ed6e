//! Message intake - Orchestrates parsing, chaos and acknowledgment per request
//!
//! Each request moves through content-type check, body check, MSH parsing,
//! chaos evaluation, optional delay and finally an acknowledgment or an
//! injected failure. Every outcome except a content-type rejection produces
//! exactly one request log entry.

use std::{sync::Arc, time::Duration};

use domain::{MessageId, ParseOutcome, RequestLogEntry, UNKNOWN_CONTROL_ID};
use tokio::time::Instant;
use tracing::{info, instrument, warn};

use crate::{
    error::ApplicationError,
    hl7_parser::parse_message,
    ports::{ChaosConfigStore, RandomSource, RequestLogPort},
    services::{AckGenerator, ChaosService},
};

/// Media type accepted for inbound messages (prefix match, any case)
pub const HL7_CONTENT_TYPE: &str = "application/hl7-v2";

const ACCEPT: &str = "AA";
const REJECT: &str = "AR";

/// One inbound message as seen by the intake pipeline
#[derive(Debug, Clone)]
pub struct InboundMessage<'a> {
    /// Correlation id of the request
    pub message_id: MessageId,
    /// Declared media type, if any
    pub content_type: Option<&'a str>,
    /// Raw message text
    pub body: &'a str,
}

/// Terminal state of a processed request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntakeOutcome {
    /// Declared media type was not HL7
    RejectedBadContentType,
    /// Body was empty or whitespace
    RejectedEmptyBody {
        /// AR acknowledgment against `UNKNOWN`
        ack: String,
    },
    /// MSH segment could not be used
    RejectedParseFailure {
        /// AR acknowledgment against `UNKNOWN`
        ack: String,
    },
    /// Chaos mode failed the request on purpose
    ChaosFailureInjected {
        /// Status code chosen by the chaos decision
        status_code: u16,
    },
    /// Message accepted
    Accepted {
        /// AA acknowledgment against the message control id
        ack: String,
    },
}

impl IntakeOutcome {
    /// HTTP status code for this outcome
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::RejectedBadContentType => 415,
            Self::RejectedEmptyBody { .. } | Self::RejectedParseFailure { .. } => 400,
            Self::ChaosFailureInjected { status_code } => *status_code,
            Self::Accepted { .. } => 200,
        }
    }

    /// Acknowledgment body, if the outcome carries one
    pub fn ack(&self) -> Option<&str> {
        match self {
            Self::RejectedEmptyBody { ack }
            | Self::RejectedParseFailure { ack }
            | Self::Accepted { ack } => Some(ack),
            Self::RejectedBadContentType | Self::ChaosFailureInjected { .. } => None,
        }
    }
}

/// Processes inbound HL7 messages
#[derive(Clone)]
pub struct MessageIntakeService {
    config_store: Arc<dyn ChaosConfigStore>,
    chaos: ChaosService,
    acks: AckGenerator,
    request_log: Arc<dyn RequestLogPort>,
    environment: String,
}

impl std::fmt::Debug for MessageIntakeService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageIntakeService")
            .field("acks", &self.acks)
            .field("environment", &self.environment)
            .finish_non_exhaustive()
    }
}

impl MessageIntakeService {
    /// Create a new intake service
    pub fn new(
        config_store: Arc<dyn ChaosConfigStore>,
        random: Arc<dyn RandomSource>,
        request_log: Arc<dyn RequestLogPort>,
    ) -> Self {
        Self {
            config_store,
            chaos: ChaosService::new(random),
            acks: AckGenerator::default(),
            request_log,
            environment: String::new(),
        }
    }

    /// Use a custom acknowledgment generator
    #[must_use]
    pub fn with_ack_generator(mut self, acks: AckGenerator) -> Self {
        self.acks = acks;
        self
    }

    /// Set the environment name stamped on request log entries
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    /// Run one message through the intake pipeline
    ///
    /// Returns an error only when acknowledgment synthesis fails, which means
    /// the pipeline itself is broken.
    #[instrument(skip(self, message), fields(message_id = %message.message_id))]
    pub async fn process(
        &self,
        message: InboundMessage<'_>,
    ) -> Result<IntakeOutcome, ApplicationError> {
        let started = Instant::now();
        let message_id = message.message_id;

        if !is_hl7_content_type(message.content_type) {
            warn!("Invalid Content-Type, expected {HL7_CONTENT_TYPE}");
            return Ok(IntakeOutcome::RejectedBadContentType);
        }

        if message.body.trim().is_empty() {
            warn!("Empty request body");
            let ack = self.reject(message_id, started).await?;
            return Ok(IntakeOutcome::RejectedEmptyBody { ack });
        }

        let control_id = match parse_message(message.body) {
            ParseOutcome::Valid { control_id } => control_id,
            ParseOutcome::Invalid { reason } => {
                warn!(reason = %reason, "HL7 parse failure");
                let ack = self.reject(message_id, started).await?;
                return Ok(IntakeOutcome::RejectedParseFailure { ack });
            },
        };

        let config = self.config_store.get();
        let decision = self.chaos.evaluate(&config);

        if decision.delay_ms > 0 {
            info!(delay_ms = decision.delay_ms, "Latency simulation");
            tokio::time::sleep(Duration::from_millis(decision.delay_ms)).await;
        }

        if decision.should_fail {
            info!(status_code = decision.status_code, "Chaos failure applied");
            let entry = RequestLogEntry::chaos(
                message_id,
                &control_id,
                decision.status_code,
                config.default_error_type.as_str(),
            );
            self.record(entry, started).await;
            return Ok(IntakeOutcome::ChaosFailureInjected {
                status_code: decision.status_code,
            });
        }

        let ack = self.acks.generate(&control_id, ACCEPT)?;
        let entry = RequestLogEntry::new(message_id, &control_id, 200, ACCEPT);
        let processing_time_ms = self.record(entry, started).await;

        info!(
            message_control_id = %control_id,
            processing_time_ms,
            "Message accepted"
        );

        Ok(IntakeOutcome::Accepted { ack })
    }

    async fn reject(
        &self,
        message_id: MessageId,
        started: Instant,
    ) -> Result<String, ApplicationError> {
        let ack = self.acks.generate(UNKNOWN_CONTROL_ID, REJECT)?;
        let entry = RequestLogEntry::new(message_id, UNKNOWN_CONTROL_ID, 400, REJECT);
        self.record(entry, started).await;
        Ok(ack)
    }

    /// Stamp and write a request log entry, returning the elapsed time
    async fn record(&self, entry: RequestLogEntry, started: Instant) -> u64 {
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let entry = entry
            .with_processing_time(elapsed)
            .with_environment(self.environment.as_str());

        if let Err(e) = self.request_log.record(&entry).await {
            warn!(error = %e, "Failed to write request log entry");
        }
        elapsed
    }
}

fn is_hl7_content_type(content_type: Option<&str>) -> bool {
    content_type
        .and_then(|value| value.get(..HL7_CONTENT_TYPE.len()))
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(HL7_CONTENT_TYPE))
}
