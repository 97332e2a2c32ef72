use std::sync::Arc;

use axum::Router;
use fake_migration_sdk::FakeMigrationApi;

use crate::api::rest::routes;
use crate::config::{AuthConfig, FakeMigrationConfig};
use crate::domain::catalog::Catalog;
use crate::domain::person::{CatalogPersonSource, PersonSource};
use crate::domain::service::Service;
use crate::local_client::LocalClient;

/// Wires the domain service to its REST surface and in-process client.
pub struct FakeMigrationModule {
    service: Arc<Service>,
    auth: AuthConfig,
}

impl FakeMigrationModule {
    /// Module backed by the built-in person source and catalogs.
    #[must_use]
    pub fn new(config: &FakeMigrationConfig, auth: AuthConfig) -> Self {
        Self::with_person_source(Arc::new(CatalogPersonSource::new()), config, auth)
    }

    #[must_use]
    pub fn with_person_source(
        source: Arc<dyn PersonSource>,
        config: &FakeMigrationConfig,
        auth: AuthConfig,
    ) -> Self {
        let service = Service::new(source, Catalog::builtin(), config.into());
        tracing::info!(
            seeded = config.seed.is_some(),
            max_delay = ?config.max_delay,
            "Fake migration service initialized"
        );
        Self {
            service: Arc::new(service),
            auth,
        }
    }

    #[must_use]
    pub fn router(&self) -> Router {
        routes::register_routes(Arc::clone(&self.service), &self.auth)
    }

    #[must_use]
    pub fn client(&self) -> Arc<dyn FakeMigrationApi> {
        Arc::new(LocalClient::new(Arc::clone(&self.service)))
    }
}
