use async_trait::async_trait;
use fake_migration_sdk::{FakeMigrationApi, MigrationError, UserProfile};
use std::sync::Arc;

use crate::domain::service::Service;

/// In-process implementation of [`FakeMigrationApi`].
pub struct LocalClient {
    service: Arc<Service>,
}

impl LocalClient {
    #[must_use]
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl FakeMigrationApi for LocalClient {
    async fn get_user(&self, email: &str) -> Result<UserProfile, MigrationError> {
        self.service.lookup(email).await.map_err(Into::into)
    }
}
