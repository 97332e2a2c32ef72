use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::domain::error::DomainError;

/// Handler result type.
pub type ApiResult<T> = Result<T, ApiError>;

/// Failures surfaced by the REST layer.
///
/// Bodies are fixed plain-text messages; existing clients match on the
/// status code and these exact strings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Missing/invalid auth header")]
    Unauthorized,

    #[error("User not found")]
    NotFound,

    #[error("Missing email parameter")]
    MissingEmail,
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::FORBIDDEN,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::MissingEmail => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (
            self.status(),
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            self.to_string(),
        )
            .into_response()
    }
}

/// Implement From<DomainError> for ApiError so `?` works in handlers
impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => Self::NotFound,
            DomainError::Validation { field, message } => {
                tracing::debug!(%field, %message, "Rejecting request");
                Self::MissingEmail
            }
        }
    }
}
