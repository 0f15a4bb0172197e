use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

/// Account returned by a successful authentication.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    #[serde(rename = "accessToken")]
    access_token: Secret<String>,
}

impl Account {
    pub fn new(access_token: Secret<String>) -> Self {
        Self { access_token }
    }

    pub fn access_token(&self) -> &Secret<String> {
        &self.access_token
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.access_token.expose_secret() == other.access_token.expose_secret()
    }
}
