pub mod config;
pub mod http;

pub use config::{GatewaySettings, SettingsError};
pub use http::ReqwestHttpClient;
