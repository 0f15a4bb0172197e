use async_trait::async_trait;
use gatehouse_core::{
    Account, Authentication, AuthenticationError, AuthenticationOutcome, Credentials, Endpoint,
    HttpClientError, HttpPostClient, HttpPostParams, classify_status,
};

/// Remote authentication use case - submits credentials to a fixed endpoint
/// and translates the response status into a domain outcome.
///
/// Holds no mutable state, so one instance can serve concurrent calls.
pub struct RemoteAuthentication<C>
where
    C: HttpPostClient<Credentials, Account>,
{
    endpoint: Endpoint,
    http_post_client: C,
}

impl<C> RemoteAuthentication<C>
where
    C: HttpPostClient<Credentials, Account>,
{
    pub fn new(endpoint: Endpoint, http_post_client: C) -> Self {
        Self {
            endpoint,
            http_post_client,
        }
    }

    pub fn endpoint(&self) -> &Endpoint {
        &self.endpoint
    }

    /// Execute the remote authentication use case
    ///
    /// # Arguments
    /// * `credentials` - Email and password to submit as the request body
    ///
    /// # Returns
    /// The account carried by the response body, unless the endpoint answered
    /// 401 (`InvalidCredentials`) or 400 (`Unexpected`). Transport failures are
    /// returned as `AuthenticationError::Transport` with the original error. A
    /// success status without an account body is a malformed envelope and is
    /// reported as `HttpClientError::InvalidResponse`.
    #[tracing::instrument(
        name = "RemoteAuthentication::execute",
        skip_all,
        fields(endpoint = %self.endpoint)
    )]
    pub async fn execute(&self, credentials: Credentials) -> Result<Account, AuthenticationError> {
        let params = HttpPostParams::new(self.endpoint.as_str(), Some(credentials));

        let response = self.http_post_client.post(params).await?;

        tracing::debug!(
            status_code = response.status_code,
            "Received authentication response"
        );

        let status_code = response.status_code;

        match classify_status(status_code) {
            AuthenticationOutcome::InvalidCredentials => {
                Err(AuthenticationError::InvalidCredentials)
            }
            AuthenticationOutcome::Unexpected => Err(AuthenticationError::Unexpected),
            AuthenticationOutcome::Account => response.body.ok_or_else(|| {
                HttpClientError::InvalidResponse(format!(
                    "status {status_code} carried no account body"
                ))
                .into()
            }),
        }
    }
}

#[async_trait]
impl<C> Authentication for RemoteAuthentication<C>
where
    C: HttpPostClient<Credentials, Account>,
{
    async fn authenticate(
        &self,
        credentials: Credentials,
    ) -> Result<Account, AuthenticationError> {
        self.execute(credentials).await
    }
}
