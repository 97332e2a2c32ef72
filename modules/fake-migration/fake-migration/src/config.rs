use std::fmt;
use std::time::Duration;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::domain::generator::GeneratorSettings;
use crate::domain::service::ServiceConfig;

/// Header carrying the shared secret.
pub const AUTH_HEADER: &str = "X-Auth";

/// Shared-secret auth for the profile endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    #[serde(default = "default_secret")]
    pub secret: AuthSecret,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            secret: default_secret(),
        }
    }
}

fn default_secret() -> AuthSecret {
    AuthSecret::new("BEEFC4FFEE")
}

/// Configuration for profile generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FakeMigrationConfig {
    #[serde(default = "default_modify_email_marker")]
    pub modify_email_marker: String,
    #[serde(default = "default_country")]
    pub country: String,
    /// Fixed RNG seed for reproducible runs.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Upper bound for `delay<N>` scenarios, e.g. `"30s"`.
    #[serde(default, with = "humantime_option")]
    pub max_delay: Option<Duration>,
}

impl Default for FakeMigrationConfig {
    fn default() -> Self {
        Self {
            modify_email_marker: default_modify_email_marker(),
            country: default_country(),
            seed: None,
            max_delay: None,
        }
    }
}

fn default_modify_email_marker() -> String {
    "xxx".to_owned()
}

fn default_country() -> String {
    "USA".to_owned()
}

impl From<&FakeMigrationConfig> for ServiceConfig {
    fn from(cfg: &FakeMigrationConfig) -> Self {
        Self {
            generator: GeneratorSettings {
                modify_email_marker: cfg.modify_email_marker.clone(),
                country: cfg.country.clone(),
            },
            seed: cfg.seed,
            max_delay: cfg.max_delay,
        }
    }
}

/// Opaque shared secret. `Debug`, `Display` and `Serialize` never reveal it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AuthSecret(String);

impl AuthSecret {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Compare against a presented header value.
    #[must_use]
    pub fn matches(&self, presented: Option<&str>) -> bool {
        presented.is_some_and(|value| value == self.0)
    }
}

impl fmt::Debug for AuthSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for AuthSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Serialize for AuthSecret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("[REDACTED]")
    }
}

// Environment providers hand over all-digit secrets as numbers.
impl<'de> Deserialize<'de> for AuthSecret {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SecretVisitor;

        impl Visitor<'_> for SecretVisitor {
            type Value = AuthSecret;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a shared secret string")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(AuthSecret::new(v))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(AuthSecret(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(AuthSecret(v.to_string()))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(AuthSecret(v.to_string()))
            }
        }

        deserializer.deserialize_any(SecretVisitor)
    }
}

/// `Option<Duration>` as humantime strings (`"250ms"`, `"1m 30s"`).
mod humantime_option {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer, de};

    #[allow(clippy::ref_option)] // serde requires &T signature
    pub(super) fn serialize<S: Serializer>(
        value: &Option<Duration>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(duration) => {
                serializer.serialize_some(&humantime::format_duration(*duration).to_string())
            }
            None => serializer.serialize_none(),
        }
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<Duration>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| humantime::parse_duration(&raw).map_err(de::Error::custom))
            .transpose()
    }
}
