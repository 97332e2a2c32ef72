//! Shared-secret check for the profile endpoint.
//!
//! Runs as a route layer, so it rejects before the query string is extracted
//! and before any tag parsing or generation happens.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use super::error::ApiError;
use crate::config::{AUTH_HEADER, AuthSecret};

pub async fn require_auth(
    State(secret): State<Arc<AuthSecret>>,
    req: Request,
    next: Next,
) -> Response {
    let presented = req
        .headers()
        .get(AUTH_HEADER)
        .and_then(|value| value.to_str().ok());

    if !secret.matches(presented) {
        tracing::warn!(
            uri = %req.uri().path(),
            header_present = presented.is_some(),
            "Rejecting request with missing or invalid auth header"
        );
        return ApiError::Unauthorized.into_response();
    }

    next.run(req).await
}
