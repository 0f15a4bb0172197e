use std::env;

use color_eyre::eyre::{Result, WrapErr, eyre};
use gatehouse_adapters::{GatewaySettings, ReqwestHttpClient, config::env as env_vars};
use gatehouse_application::RemoteAuthentication;
use gatehouse_core::{Authentication, AuthenticationError, Credentials};
use reqwest::Client as HttpClient;
use secrecy::{ExposeSecret, Secret};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Performs a single authentication against the configured endpoint and
/// prints the access token.
#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    // Load configuration
    let settings = GatewaySettings::load().wrap_err("Failed to load settings")?;
    let endpoint = settings.endpoint()?;

    let http_client = HttpClient::builder()
        .timeout(settings.http_client.timeout())
        .build()?;

    let authentication = RemoteAuthentication::new(endpoint, ReqwestHttpClient::new(http_client));

    let credentials = credentials_from_env()?;
    tracing::info!(endpoint = %authentication.endpoint(), "Authenticating...");

    match authentication.authenticate(credentials).await {
        Ok(account) => {
            tracing::info!("Authenticated");
            println!("{}", account.access_token().expose_secret());
            Ok(())
        }
        Err(AuthenticationError::InvalidCredentials) => {
            Err(eyre!("Invalid credentials, try a different email or password"))
        }
        Err(AuthenticationError::Unexpected) => {
            Err(eyre!("Authentication failed with an unexpected error"))
        }
        Err(AuthenticationError::Transport(error)) => {
            Err(error).wrap_err("Could not reach the authentication endpoint")
        }
    }
}

fn credentials_from_env() -> Result<Credentials> {
    let email = env::var(env_vars::EMAIL_ENV_VAR)
        .wrap_err_with(|| format!("{} must be set", env_vars::EMAIL_ENV_VAR))?;
    let password = env::var(env_vars::PASSWORD_ENV_VAR)
        .wrap_err_with(|| format!("{} must be set", env_vars::PASSWORD_ENV_VAR))?;

    Ok(Credentials::new(email, Secret::new(password)))
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact().with_writer(std::io::stderr);

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
