use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::http_abstraction::{HttpPostParams, HttpResponse};

/// Failure to complete an exchange at the wire level.
///
/// Never a statement about the credentials: these reach the caller untouched.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HttpClientError {
    #[error("Connection failed: {0}")]
    Connection(String),
    #[error("Request timed out")]
    Timeout,
    #[error("Request was cancelled")]
    Cancelled,
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
    #[error("Request failed: {0}")]
    Request(String),
}

/// Port trait for submitting a POST request and receiving the raw response.
///
/// Implementations must not interpret the status code. Retries, timeouts and
/// caching are the implementation's business.
#[async_trait]
pub trait HttpPostClient<T, R>: Send + Sync
where
    T: Send + 'static,
    R: Send + 'static,
{
    async fn post(&self, params: HttpPostParams<T>) -> Result<HttpResponse<R>, HttpClientError>;
}

#[async_trait]
impl<T, R, C> HttpPostClient<T, R> for Arc<C>
where
    C: HttpPostClient<T, R> + ?Sized,
    T: Send + 'static,
    R: Send + 'static,
{
    async fn post(&self, params: HttpPostParams<T>) -> Result<HttpResponse<R>, HttpClientError> {
        (**self).post(params).await
    }
}
