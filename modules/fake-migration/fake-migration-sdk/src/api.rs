//! `FakeMigrationApi` trait definition.

use async_trait::async_trait;

use crate::errors::MigrationError;
use crate::models::UserProfile;

/// Public API of the fake migration service.
///
/// The email may carry scenario tags in its sub-address
/// (`jane.doe+invalidsex-delay250@example.com`); implementations honor them
/// the same way the HTTP endpoint does.
#[async_trait]
pub trait FakeMigrationApi: Send + Sync {
    /// Look up (generate) the user profile for `email`.
    ///
    /// # Errors
    /// - [`MigrationError::NotFound`] when the `notfound` tag is present
    /// - [`MigrationError::InvalidRequest`] for an empty email
    async fn get_user(&self, email: &str) -> Result<UserProfile, MigrationError>;
}
