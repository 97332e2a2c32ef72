//! Error types for the fake migration SDK.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MigrationError {
    #[error("User not found")]
    NotFound,

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl MigrationError {
    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound
    }

    #[must_use]
    pub fn invalid_request(message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            message: message.into(),
        }
    }
}
