use gatehouse_core::{HttpClientError, HttpPostClient, HttpPostParams, HttpResponse};
use reqwest::{Client, Url};
use serde::{Serialize, de::DeserializeOwned};

/// `HttpPostClient` backed by `reqwest`, exchanging JSON bodies.
///
/// Status codes are returned as data, never turned into errors. Timeouts are
/// configured on the wrapped `Client`.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    http_client: Client,
}

impl ReqwestHttpClient {
    pub fn new(http_client: Client) -> Self {
        Self { http_client }
    }
}

#[async_trait::async_trait]
impl<T, R> HttpPostClient<T, R> for ReqwestHttpClient
where
    T: Serialize + Send + 'static,
    R: DeserializeOwned + Send + 'static,
{
    #[tracing::instrument(name = "Posting request", skip_all, fields(url = %params.url))]
    async fn post(&self, params: HttpPostParams<T>) -> Result<HttpResponse<R>, HttpClientError> {
        let url = Url::parse(&params.url).map_err(|e| HttpClientError::Request(e.to_string()))?;

        let mut request = self.http_client.post(url);
        if let Some(body) = &params.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(map_reqwest_error)?;

        let body = decode_body(&bytes);

        Ok(HttpResponse::new(status.as_u16(), body))
    }
}

fn map_reqwest_error(error: reqwest::Error) -> HttpClientError {
    if error.is_timeout() {
        HttpClientError::Timeout
    } else if error.is_connect() {
        HttpClientError::Connection(error.to_string())
    } else if error.is_decode() || error.is_body() {
        HttpClientError::InvalidResponse(error.to_string())
    } else {
        HttpClientError::Request(error.to_string())
    }
}

// A body that is not an `R` is dropped. Whether a missing body matters is up to
// the caller, which knows what each status means.
fn decode_body<R: DeserializeOwned>(bytes: &[u8]) -> Option<R> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    match serde_json::from_slice(bytes) {
        Ok(body) => Some(body),
        Err(e) => {
            tracing::debug!(error = %e, "Discarding undecodable response body");
            None
        }
    }
}
