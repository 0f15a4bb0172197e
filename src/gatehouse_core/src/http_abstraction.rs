//! Transport envelopes and the status policy for remote authentication.
//!
//! The gateway never touches an HTTP library directly. It builds an
//! [`HttpPostParams`], hands it to an [`HttpPostClient`](crate::HttpPostClient),
//! and reads back an [`HttpResponse`].
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │  gatehouse_core: envelopes + ports       │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  gatehouse_adapters: ReqwestHttpClient   │
//! │  impl HttpPostClient<T, R> { }           │
//! └──────────────┬───────────────────────────┘
//!                │
//!                ▼
//! ┌──────────────────────────────────────────┐
//! │  RemoteAuthentication branches only on   │
//! │  classify_status(response.status_code)   │
//! └──────────────────────────────────────────┘
//! ```

/// Outbound request envelope.
///
/// `body` is opaque to the transport, which serializes it as-is.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpPostParams<T> {
    pub url: String,
    pub body: Option<T>,
}

impl<T> HttpPostParams<T> {
    pub fn new(url: impl Into<String>, body: Option<T>) -> Self {
        Self {
            url: url.into(),
            body,
        }
    }
}

/// Inbound response envelope.
///
/// `body` is absent when the server sent nothing. Failure translation only
/// reads `status_code`.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse<R> {
    pub status_code: u16,
    pub body: Option<R>,
}

impl<R> HttpResponse<R> {
    pub fn new(status_code: u16, body: Option<R>) -> Self {
        Self { status_code, body }
    }

    /// A response carrying only a status code.
    pub fn status(status_code: u16) -> Self {
        Self::new(status_code, None)
    }
}

/// Status codes the authentication endpoint is known to answer with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum HttpStatusCode {
    Ok = 200,
    NoContent = 204,
    BadRequest = 400,
    Unauthorized = 401,
    Forbidden = 403,
    NotFound = 404,
}

impl HttpStatusCode {
    pub fn as_u16(self) -> u16 {
        self as u16
    }
}

impl From<HttpStatusCode> for u16 {
    fn from(code: HttpStatusCode) -> Self {
        code.as_u16()
    }
}

impl TryFrom<u16> for HttpStatusCode {
    type Error = u16;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            200 => Ok(Self::Ok),
            204 => Ok(Self::NoContent),
            400 => Ok(Self::BadRequest),
            401 => Ok(Self::Unauthorized),
            403 => Ok(Self::Forbidden),
            404 => Ok(Self::NotFound),
            other => Err(other),
        }
    }
}

/// What an authentication response status means for the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthenticationOutcome {
    /// The body is handed back as the account.
    Account,
    InvalidCredentials,
    Unexpected,
}

/// Maps a response status to an [`AuthenticationOutcome`].
///
/// | Status              | Outcome              |
/// |---------------------|----------------------|
/// | 200                 | `Account`            |
/// | 204                 | `Account`            |
/// | 400                 | `Unexpected`         |
/// | 401                 | `InvalidCredentials` |
/// | 403                 | `Account`            |
/// | 404                 | `Account`            |
/// | anything else       | `Account`            |
///
/// 403, 404 and 204 resolve to `Account` under the endpoint's current contract.
pub fn classify_status(status_code: u16) -> AuthenticationOutcome {
    match HttpStatusCode::try_from(status_code) {
        Ok(HttpStatusCode::Unauthorized) => AuthenticationOutcome::InvalidCredentials,
        Ok(HttpStatusCode::BadRequest) => AuthenticationOutcome::Unexpected,
        Ok(HttpStatusCode::Ok) => AuthenticationOutcome::Account,
        Ok(HttpStatusCode::NoContent) => AuthenticationOutcome::Account,
        Ok(HttpStatusCode::Forbidden) => AuthenticationOutcome::Account,
        Ok(HttpStatusCode::NotFound) => AuthenticationOutcome::Account,
        Err(_) => AuthenticationOutcome::Account,
    }
}
