use fake_migration_sdk::errors::MigrationError;

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("User not found")]
    NotFound,

    #[error("Validation error on field '{field}': {message}")]
    Validation { field: String, message: String },
}

impl DomainError {
    #[must_use]
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<DomainError> for MigrationError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::NotFound => Self::not_found(),
            DomainError::Validation { field, message } => {
                Self::invalid_request(format!("{field}: {message}"))
            }
        }
    }
}
