pub mod domain;
pub mod http_abstraction;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::Account,
    credentials::Credentials,
    endpoint::{Endpoint, EndpointError},
};

pub use ports::{
    authentication::{Authentication, AuthenticationError},
    http_client::{HttpClientError, HttpPostClient},
};

pub use http_abstraction::{
    AuthenticationOutcome, HttpPostParams, HttpResponse, HttpStatusCode, classify_status,
};
