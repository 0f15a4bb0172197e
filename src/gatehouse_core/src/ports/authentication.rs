use async_trait::async_trait;
use thiserror::Error;

use crate::{
    domain::{account::Account, credentials::Credentials},
    ports::http_client::HttpClientError,
};

/// Errors returned by an authentication attempt.
///
/// `InvalidCredentials` and `Unexpected` come from the remote endpoint's answer.
/// `Transport` carries the transport's own error unchanged: the exchange never
/// completed, so nothing is known about the credentials.
#[derive(Debug, Error, PartialEq)]
pub enum AuthenticationError {
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected error")]
    Unexpected,
    #[error(transparent)]
    Transport(#[from] HttpClientError),
}

impl AuthenticationError {
    /// `true` for outcomes decided by the remote endpoint rather than the wire.
    pub fn is_domain_error(&self) -> bool {
        !matches!(self, Self::Transport(_))
    }
}

/// Domain-facing authentication contract.
///
/// Callers (UI layers, CLIs, other services) depend on this trait, never on the
/// transport behind it.
#[async_trait]
pub trait Authentication: Send + Sync {
    async fn authenticate(&self, credentials: Credentials)
    -> Result<Account, AuthenticationError>;
}
