use std::sync::Arc;
use std::time::Duration;

use fake_migration_sdk::models::UserProfile;
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::catalog::Catalog;
use super::error::DomainError;
use super::generator::{GeneratorSettings, ProfileGenerator};
use super::person::PersonSource;
use super::tags::TagSet;

#[derive(Debug, Clone, Default)]
pub struct ServiceConfig {
    pub generator: GeneratorSettings,
    /// Seed for a single shared RNG; `None` draws from the thread-local RNG.
    pub seed: Option<u64>,
    /// Upper bound for scenario delays; `None` honors any requested delay.
    pub max_delay: Option<Duration>,
}

/// Request-scoped orchestration of tag parsing, delays and generation.
pub struct Service {
    generator: ProfileGenerator,
    seeded_rng: Option<Mutex<StdRng>>,
    max_delay: Option<Duration>,
}

impl Service {
    #[must_use]
    pub fn new(
        source: Arc<dyn PersonSource>,
        catalog: &'static Catalog,
        config: ServiceConfig,
    ) -> Self {
        Self {
            generator: ProfileGenerator::new(source, catalog, config.generator),
            seeded_rng: config.seed.map(|seed| Mutex::new(StdRng::seed_from_u64(seed))),
            max_delay: config.max_delay,
        }
    }

    /// Produce the profile for `email`, honoring its scenario tags.
    ///
    /// A single `delay<N>` tag suspends this call for `N` ms before anything
    /// else happens, including the `notfound` outcome. Sleeping first is the
    /// legacy ordering and is kept deliberately; `notfound` still decides the
    /// outcome once the delay has elapsed.
    ///
    /// # Errors
    /// - [`DomainError::Validation`] for an empty email
    /// - [`DomainError::NotFound`] when the `notfound` tag is present
    pub async fn lookup(&self, email: &str) -> Result<UserProfile, DomainError> {
        if email.is_empty() {
            return Err(DomainError::validation("email", "must not be empty"));
        }

        let tags = TagSet::parse(email);
        tracing::debug!(%tags, "Parsed scenario tags");
        for unknown in tags.unknown() {
            tracing::debug!(tag = unknown, "Ignoring unknown scenario tag");
        }

        if let Some(delay) = self.effective_delay(&tags) {
            tracing::info!(delay_ms = delay.as_millis(), "Delaying response");
            tokio::time::sleep(delay).await;
        }

        if tags.is_not_found() {
            tracing::info!("Scenario requested not-found response");
            return Err(DomainError::NotFound);
        }

        Ok(self.generate(email, &tags))
    }

    fn effective_delay(&self, tags: &TagSet) -> Option<Duration> {
        let requested = tags.delay()?;
        match self.max_delay {
            Some(max) if requested > max => {
                tracing::warn!(
                    requested_ms = requested.as_millis(),
                    max_ms = max.as_millis(),
                    "Requested delay exceeds max_delay, clamping"
                );
                Some(max)
            }
            _ => Some(requested),
        }
    }

    // Never held across an await: the guard and `ThreadRng` are not `Send`.
    fn generate(&self, email: &str, tags: &TagSet) -> UserProfile {
        match &self.seeded_rng {
            Some(rng) => self.generator.generate(email, tags, &mut *rng.lock()),
            None => self.generator.generate(email, tags, &mut rand::rng()),
        }
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::domain::person::CatalogPersonSource;
    use fake_migration_sdk::models::Sex;
    use tokio::time::Instant;

    fn service(config: ServiceConfig) -> Service {
        Service::new(Arc::new(CatalogPersonSource), Catalog::builtin(), config)
    }

    #[tokio::test]
    async fn untagged_email_is_generated() {
        let svc = service(ServiceConfig::default());
        let profile = svc.lookup("jane.doe@example.com").await.unwrap();
        assert_eq!(profile.email.as_deref(), Some("jane.doe@example.com"));
        assert!(profile.created_time.is_some());
    }

    #[tokio::test]
    async fn empty_email_is_rejected() {
        let svc = service(ServiceConfig::default());
        let err = svc.lookup("").await.unwrap_err();
        assert!(matches!(err, DomainError::Validation { ref field, .. } if field == "email"));
    }

    #[tokio::test]
    async fn notfound_wins_over_other_tags() {
        let svc = service(ServiceConfig::default());
        for email in [
            "u+notfound@x.com",
            "u+notfound-invalidsex@x.com",
            "u+modifyemail-notfound-invalidphone@x.com",
        ] {
            let err = svc.lookup(email).await.unwrap_err();
            assert!(matches!(err, DomainError::NotFound), "{email}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn single_delay_holds_the_response() {
        let svc = service(ServiceConfig::default());
        let start = Instant::now();
        svc.lookup("u+delay2500-invalidtimezone@x.com").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(2500));
    }

    #[tokio::test(start_paused = true)]
    async fn delay_applies_before_notfound() {
        let svc = service(ServiceConfig::default());
        let start = Instant::now();
        let err = svc.lookup("u+notfound-delay300@x.com").await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound));
        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn two_delays_mean_no_delay() {
        let svc = service(ServiceConfig::default());
        let start = Instant::now();
        svc.lookup("u+delay2000-delay3000@x.com").await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(1));
    }

    #[tokio::test(start_paused = true)]
    async fn delay_is_clamped_to_max() {
        let svc = service(ServiceConfig {
            max_delay: Some(Duration::from_millis(100)),
            ..ServiceConfig::default()
        });
        let start = Instant::now();
        svc.lookup("u+delay60000@x.com").await.unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn oversized_delay_is_clamped_not_dropped() {
        let svc = service(ServiceConfig {
            max_delay: Some(Duration::from_millis(100)),
            ..ServiceConfig::default()
        });
        let start = Instant::now();
        svc.lookup("u+delay99999999999999999999999@x.com")
            .await
            .unwrap();
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(100));
        assert!(elapsed < Duration::from_secs(1));
    }

    #[tokio::test(start_paused = true)]
    async fn distinct_delay_spellings_mean_no_delay() {
        let svc = service(ServiceConfig::default());
        let start = Instant::now();
        svc.lookup("u+delay1000-delay01000@x.com").await.unwrap();
        assert!(start.elapsed() < Duration::from_millis(1));
    }

    #[tokio::test]
    async fn seeded_services_repeat_the_same_sequence() {
        let a = service(ServiceConfig {
            seed: Some(2024),
            ..ServiceConfig::default()
        });
        let b = service(ServiceConfig {
            seed: Some(2024),
            ..ServiceConfig::default()
        });
        for _ in 0..5 {
            let mut pa = a.lookup("u@x.com").await.unwrap();
            let mut pb = b.lookup("u@x.com").await.unwrap();
            pa.created_time = None;
            pb.created_time = None;
            assert_eq!(pa, pb);
        }
    }

    #[tokio::test]
    async fn tags_reach_the_generator() {
        let svc = service(ServiceConfig::default());
        let profile = svc.lookup("u+invalidsex@x.com").await.unwrap();
        assert_eq!(profile.sex, Some(Sex::Invalid));
    }
}
