use std::time::Duration;

use ::config::{Config, ConfigError, Environment, File, Source};
use gatehouse_core::{Endpoint, EndpointError};
use serde::Deserialize;
use thiserror::Error;

use crate::config::constants::{SETTINGS_FILE_NAME, env, prod};

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to load settings: {0}")]
    Config(#[from] ConfigError),
    #[error("Invalid endpoint: {0}")]
    Endpoint(#[from] EndpointError),
}

#[derive(Debug, Clone, Deserialize)]
pub struct GatewaySettings {
    pub endpoint: EndpointSettings,
    pub http_client: HttpClientSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EndpointSettings {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HttpClientSettings {
    pub timeout_in_millis: u64,
}

impl HttpClientSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_in_millis)
    }
}

impl GatewaySettings {
    /// Load settings from defaults, `gatehouse.json` (optional) and
    /// `GATEHOUSE__*` environment variables, in increasing precedence.
    ///
    /// A `.env` file in the working directory is loaded first when present.
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        Self::build(
            File::with_name(SETTINGS_FILE_NAME).required(false),
            environment(),
        )
    }

    fn build<F>(file: F, environment: Environment) -> Result<Self, SettingsError>
    where
        F: Source + Send + Sync + 'static,
    {
        let settings: Self = Config::builder()
            .set_default(
                "http_client.timeout_in_millis",
                prod::http_client::TIMEOUT_IN_MILLIS,
            )?
            .add_source(file)
            .add_source(environment)
            .build()?
            .try_deserialize()?;

        // Reject an unusable endpoint at load time rather than on first request
        settings.endpoint()?;

        Ok(settings)
    }

    pub fn endpoint(&self) -> Result<Endpoint, EndpointError> {
        Endpoint::try_from(self.endpoint.url.as_str())
    }
}

fn environment() -> Environment {
    Environment::with_prefix(env::ENV_PREFIX)
        .separator(env::ENV_SEPARATOR)
        .try_parsing(true)
}
