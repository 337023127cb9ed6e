//! HL7 message intake handler

use application::{HL7_CONTENT_TYPE, InboundMessage, IntakeOutcome};
use axum::{
    Extension,
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use domain::MessageId;
use tracing::instrument;

use crate::{error::ApiError, state::AppState};

/// Receive one HL7v2 message and answer with an acknowledgment
///
/// Bodies that are not valid UTF-8 are decoded lossily; only MSH-10 is read.
#[utoipa::path(
    post,
    path = "/api/v1/hl7/messages",
    tag = "hl7",
    params(
        ("X-Message-Id" = Option<String>, Header, description = "Correlation id, generated when absent")
    ),
    request_body(content = String, content_type = "application/hl7-v2", description = "Raw HL7v2 message"),
    responses(
        (status = 200, description = "Message accepted, AA acknowledgment", body = String, content_type = "application/hl7-v2"),
        (status = 400, description = "Empty or unparseable message, AR acknowledgment", body = String, content_type = "application/hl7-v2"),
        (status = 415, description = "Content-Type is not application/hl7-v2", body = crate::error::ErrorResponse),
        (status = 500, description = "Injected failure; the status follows the configured error type")
    )
)]
#[instrument(skip(state, message_id, headers, body), fields(body_len = body.len()))]
pub async fn receive_message(
    State(state): State<AppState>,
    Extension(message_id): Extension<MessageId>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, ApiError> {
    let text = String::from_utf8_lossy(&body);
    let content_type = headers.get(CONTENT_TYPE).and_then(|v| v.to_str().ok());

    let outcome = state
        .intake
        .process(InboundMessage {
            message_id,
            content_type,
            body: &text,
        })
        .await?;

    outcome_response(&outcome)
}

fn outcome_response(outcome: &IntakeOutcome) -> Result<Response, ApiError> {
    if matches!(outcome, IntakeOutcome::RejectedBadContentType) {
        return Err(ApiError::UnsupportedMediaType(format!(
            "Content-Type must be {HL7_CONTENT_TYPE}"
        )));
    }

    let status =
        StatusCode::from_u16(outcome.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    Ok(match outcome.ack() {
        Some(ack) => (status, [(CONTENT_TYPE, HL7_CONTENT_TYPE)], ack.to_string()).into_response(),
        None => status.into_response(),
    })
}
