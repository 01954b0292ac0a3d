use config::{self, ConfigError, Environment};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sqlx::{postgres::PgConnectOptions, ConnectOptions};

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
}

#[derive(Debug, Deserialize)]
pub struct ApplicationSettings {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: SecretString,
    pub port: u16,
    pub host: String,
    pub name: String,
    pub acquire_timeout: u64,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseSettings {
    pub fn without_db(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .username(&self.username)
            .password(self.password.expose_secret())
            .port(self.port)
    }

    pub fn with_db(&self) -> PgConnectOptions {
        self.without_db()
            .database(&self.name)
            .log_statements(tracing::log::LevelFilter::Trace)
    }
}

fn build_settings(
    builder: config::ConfigBuilder<config::builder::DefaultState>,
) -> Result<Settings, ConfigError> {
    builder
        .add_source(
            Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__"),
        )
        .build()?
        .try_deserialize::<Settings>()
}

/// Reads `configuration/configuration.yaml` from the working directory and
/// applies `APP_*` environment overrides on top, e.g. `APP_DATABASE__PASSWORD`.
pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| ConfigError::Foreign(Box::new(e)))?;
    let configuration_directory = base_path.join("configuration");
    build_settings(config::Config::builder().add_source(config::File::from(
        configuration_directory.join("configuration.yaml"),
    )))
}

pub fn get_configuration_from_str(yaml: &str) -> Result<Settings, ConfigError> {
    build_settings(
        config::Config::builder()
            .add_source(config::File::from_str(yaml, config::FileFormat::Yaml)),
    )
}
