//! Request validation
//!
//! Provides a `ValidatedJson` extractor that validates request bodies using the validator crate.

use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use domain::validation_messages;
use serde::de::DeserializeOwned;
use thiserror::Error;
use validator::Validate;

use crate::error::ErrorResponse;

/// Validation error type
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] JsonRejection),
    #[error("Validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),
}

impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let body = match self {
            Self::JsonError(e) => ErrorResponse::new(e.body_text(), "invalid_json"),
            Self::ValidationFailed(violations) => {
                ErrorResponse::new("Validation failed", "validation_error").with_details(violations)
            },
        };

        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}

/// A JSON extractor that also validates the request body
///
/// Malformed, empty or non-JSON bodies and constraint violations are all
/// answered with 400. Violations are listed one per entry in `details`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidationError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;

        value
            .validate()
            .map_err(|e| ValidationError::ValidationFailed(validation_messages(&e)))?;

        Ok(Self(value))
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, body::Body, routing::put};
    use domain::ChaosConfig;
    use tower::ServiceExt;

    use super::*;

    async fn echo(ValidatedJson(config): ValidatedJson<ChaosConfig>) -> Json<ChaosConfig> {
        Json(config)
    }

    fn create_test_app() -> Router {
        Router::new().route("/test", put(echo))
    }

    async fn send(content_type: Option<&str>, body: &'static str) -> (StatusCode, ErrorResponse) {
        let mut request = axum::http::Request::builder().method("PUT").uri("/test");
        if let Some(content_type) = content_type {
            request = request.header("content-type", content_type);
        }
        let response = create_test_app()
            .oneshot(request.body(Body::from(body)).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let parsed = serde_json::from_slice(&bytes).unwrap_or_else(|_| ErrorResponse::new("", ""));
        (status, parsed)
    }

    #[tokio::test]
    async fn valid_request_passes() {
        let (status, _) = send(Some("application/json"), r#"{"enabled":true}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn out_of_range_values_are_itemized() {
        let (status, body) = send(
            Some("application/json"),
            r#"{"failureRatePercent":150,"latency":{"enabled":true,"delayMs":30001}}"#,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "validation_error");
        let details = body.details.unwrap();
        assert_eq!(details.len(), 2);
        assert!(
            details
                .iter()
                .any(|d| d == "failureRatePercent must be between 0 and 100.")
        );
        assert!(
            details
                .iter()
                .any(|d| d == "latency.delayMs must be between 0 and 30000.")
        );
    }

    #[tokio::test]
    async fn blank_error_type_is_rejected() {
        let (status, body) = send(Some("application/json"), r#"{"defaultErrorType":"  "}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.details.unwrap(), vec!["defaultErrorType is required."]);
    }

    #[tokio::test]
    async fn invalid_json_rejected() {
        let (status, body) = send(Some("application/json"), r#"{"enabled": nope}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.code, "invalid_json");
    }

    #[tokio::test]
    async fn empty_body_rejected() {
        let (status, _) = send(Some("application/json"), "").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn missing_content_type_rejected_as_bad_request() {
        let (status, _) = send(None, r#"{"enabled":true}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn validation_error_debug() {
        let error = ValidationError::ValidationFailed(vec!["test".to_string()]);
        assert!(format!("{error:?}").contains("ValidationFailed"));
    }
}
