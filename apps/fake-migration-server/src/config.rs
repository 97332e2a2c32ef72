//! Layered application configuration.
//!
//! Precedence, later wins: built-in defaults, the YAML file passed with
//! `--config`, the legacy `PORT`/`AUTH` variables, `APP__*` variables, and
//! finally CLI overrides applied by [`AppConfig::apply_cli_overrides`].

use std::path::{Path, PathBuf};

use fake_migration::config::{AuthConfig, FakeMigrationConfig};
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use serde::{Deserialize, Serialize};

const ENV_PREFIX: &str = "APP__";
const ENV_SEPARATOR: &str = "__";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file does not exist: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("failed to load configuration: {0}")]
    Figment(#[from] Box<figment::Error>),

    #[error("failed to render configuration as YAML: {0}")]
    Render(String),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub generator: FakeMigrationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn default_host() -> String {
    "0.0.0.0".to_owned()
}

fn default_port() -> u16 {
    9091
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set.
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_owned()
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct CliOverrides {
    pub port: Option<u16>,
    pub verbose: u8,
}

impl AppConfig {
    /// Load defaults, then the optional YAML file, then the environment.
    ///
    /// # Errors
    /// - [`ConfigError::MissingFile`] if `path` is given but is not a file
    /// - [`ConfigError::Figment`] if a layer fails to parse or validate
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::new();

        if let Some(path) = path {
            if !path.is_file() {
                return Err(ConfigError::MissingFile(path.to_path_buf()));
            }
            figment = figment.merge(Yaml::file(path));
        }

        let config = figment
            .merge(legacy_env())
            .merge(Env::prefixed(ENV_PREFIX).split(ENV_SEPARATOR))
            .extract()?;
        Ok(config)
    }

    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(level) = verbosity_level(overrides.verbose) {
            self.logging.level = level.to_owned();
        }
    }

    /// Render the effective configuration; the auth secret is redacted.
    ///
    /// # Errors
    /// Returns [`ConfigError::Render`] if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        serde_saphyr::to_string(self).map_err(|e| ConfigError::Render(e.to_string()))
    }
}

/// `PORT` and `AUTH` as understood by earlier deployments.
fn legacy_env() -> Env {
    Env::raw().filter_map(|key| {
        if key.as_str().eq_ignore_ascii_case("PORT") {
            Some("server.port".into())
        } else if key.as_str().eq_ignore_ascii_case("AUTH") {
            Some("auth.secret".into())
        } else {
            None
        }
    })
}

fn verbosity_level(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}
