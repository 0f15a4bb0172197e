use gatehouse_adapters::ReqwestHttpClient;
use gatehouse_application::RemoteAuthentication;
use gatehouse_core::{
    Account, Authentication, AuthenticationError, Credentials, Endpoint, HttpClientError,
};
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{body_json, method, path},
};

fn gateway(server: &MockServer) -> RemoteAuthentication<ReqwestHttpClient> {
    let endpoint = Endpoint::try_from(format!("{}/login", server.uri())).unwrap();
    RemoteAuthentication::new(endpoint, ReqwestHttpClient::new(Client::new()))
}

fn credentials() -> Credentials {
    Credentials::new("a@b.com", Secret::from("p@ss".to_owned()))
}

async fn respond_with(server: &MockServer, template: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(json!({ "email": "a@b.com", "password": "p@ss" })))
        .respond_with(template)
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn authenticate_returns_account_on_ok() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(200).set_body_json(json!({ "accessToken": "abc123" })),
    )
    .await;

    let account = gateway(&server).authenticate(credentials()).await.unwrap();

    assert_eq!(account, Account::new(Secret::from("abc123".to_owned())));
    assert_eq!(account.access_token().expose_secret(), "abc123");
}

#[tokio::test]
async fn authenticate_rejects_unauthorized_with_invalid_credentials() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(401).set_body_json(json!({ "error": "Incorrect credentials" })),
    )
    .await;

    let result = gateway(&server).authenticate(credentials()).await;

    assert_eq!(result, Err(AuthenticationError::InvalidCredentials));
}

#[tokio::test]
async fn authenticate_rejects_bad_request_with_unexpected() {
    let server = MockServer::start().await;
    respond_with(&server, ResponseTemplate::new(400)).await;

    let result = gateway(&server).authenticate(credentials()).await;

    assert_eq!(result, Err(AuthenticationError::Unexpected));
}

#[tokio::test]
async fn authenticate_treats_forbidden_with_account_body_as_success() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(403).set_body_json(json!({ "accessToken": "abc123" })),
    )
    .await;

    let result = gateway(&server).authenticate(credentials()).await;

    assert_eq!(result, Ok(Account::new(Secret::from("abc123".to_owned()))));
}

#[tokio::test]
async fn authenticate_without_account_body_is_invalid_response() {
    let server = MockServer::start().await;
    respond_with(&server, ResponseTemplate::new(204)).await;

    let result = gateway(&server).authenticate(credentials()).await;

    assert!(matches!(
        result,
        Err(AuthenticationError::Transport(HttpClientError::InvalidResponse(_)))
    ));
}

#[tokio::test]
async fn authenticate_with_non_account_body_is_never_a_domain_error() {
    for status_code in [200_u16, 403, 404, 500] {
        let server = MockServer::start().await;
        respond_with(
            &server,
            ResponseTemplate::new(status_code).set_body_string("<html>oops</html>"),
        )
        .await;

        let error = gateway(&server)
            .authenticate(credentials())
            .await
            .unwrap_err();

        assert!(
            matches!(
                error,
                AuthenticationError::Transport(HttpClientError::InvalidResponse(_))
            ),
            "status {status_code}: {error:?}"
        );
        assert!(!error.is_domain_error(), "status {status_code}");
    }
}

#[tokio::test]
async fn authenticate_with_json_error_body_on_forbidden_is_invalid_response() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(403).set_body_json(json!({ "error": "forbidden" })),
    )
    .await;

    let result = gateway(&server).authenticate(credentials()).await;

    assert!(matches!(
        result,
        Err(AuthenticationError::Transport(HttpClientError::InvalidResponse(_)))
    ));
}

#[tokio::test]
async fn authenticate_bad_request_with_html_body_stays_unexpected() {
    let server = MockServer::start().await;
    respond_with(
        &server,
        ResponseTemplate::new(400).set_body_string("<html>bad request</html>"),
    )
    .await;

    let result = gateway(&server).authenticate(credentials()).await;

    assert_eq!(result, Err(AuthenticationError::Unexpected));
}

#[tokio::test]
async fn authenticate_surfaces_transport_failure_unchanged() {
    let address = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap();
    let endpoint = Endpoint::try_from(format!("http://{address}/login")).unwrap();
    let gateway = RemoteAuthentication::new(endpoint, ReqwestHttpClient::new(Client::new()));

    let result = gateway.authenticate(credentials()).await;

    match result {
        Err(AuthenticationError::Transport(HttpClientError::Connection(_))) => {}
        other => panic!("expected a connection failure, got {other:?}"),
    }
}
