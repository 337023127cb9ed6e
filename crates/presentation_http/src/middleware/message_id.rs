//! Message id middleware for request correlation
//!
//! Takes the caller's `X-Message-Id` (trimmed) or generates one, stores it in
//! the request extensions for handlers and echoes it on the response.

use axum::{body::Body, extract::Request, http::header::HeaderValue, response::Response};
use domain::MessageId;
use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};
use tower::{Layer, Service};
use tracing::Instrument;

/// The header carrying the message id
pub const MESSAGE_ID_HEADER: &str = "X-Message-Id";

/// Layer that adds message id handling to HTTP services
#[derive(Debug, Clone, Default)]
pub struct MessageIdLayer;

impl MessageIdLayer {
    /// Create a new message id layer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl<S> Layer<S> for MessageIdLayer {
    type Service = MessageIdService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MessageIdService { inner }
    }
}

/// Service that resolves the message id for each request
#[derive(Debug, Clone)]
pub struct MessageIdService<S> {
    inner: S,
}

impl<S> Service<Request<Body>> for MessageIdService<S>
where
    S: Service<Request<Body>, Response = Response<Body>> + Clone + Send + 'static,
    S::Future: Send,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: Request<Body>) -> Self::Future {
        let message_id = MessageId::from_header(
            request
                .headers()
                .get(MESSAGE_ID_HEADER)
                .and_then(|v| v.to_str().ok()),
        );

        request.extensions_mut().insert(message_id.clone());

        let span = tracing::info_span!(
            "http_request",
            message_id = %message_id,
            method = %request.method(),
            uri = %request.uri().path(),
        );

        let mut inner = self.inner.clone();

        Box::pin(
            async move {
                let mut response = inner.call(request).await?;

                if let Ok(value) = HeaderValue::from_str(message_id.as_str()) {
                    response.headers_mut().insert(MESSAGE_ID_HEADER, value);
                }

                Ok(response)
            }
            .instrument(span),
        )
    }
}
