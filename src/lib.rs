//! # Gatehouse - Remote Authentication Gateway
//!
//! This is a facade crate that re-exports all public APIs from the gateway components.
//! Use this crate to get access to all authentication functionality in one place.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! gatehouse = { path = "../gatehouse" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Credentials`, `Account`, `Endpoint`
//! - **Ports**: `HttpPostClient`, `Authentication`
//! - **Use cases**: `RemoteAuthentication`
//! - **Adapters**: `ReqwestHttpClient`, `GatewaySettings`

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types, envelopes and the status policy
pub mod core {
    pub use gatehouse_core::*;
}

// Re-export most commonly used core types at the root level
pub use gatehouse_core::{
    Account, AuthenticationOutcome, Credentials, Endpoint, EndpointError, HttpPostParams,
    HttpResponse, HttpStatusCode, classify_status,
};

// ============================================================================
// Ports
// ============================================================================

/// Port trait definitions
pub mod ports {
    pub use gatehouse_core::{
        Authentication, AuthenticationError, HttpClientError, HttpPostClient,
    };
}

// Re-export port traits at root level
pub use ports::{Authentication, AuthenticationError, HttpClientError, HttpPostClient};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Application use cases
pub mod use_cases {
    pub use gatehouse_application::*;
}

pub use gatehouse_application::RemoteAuthentication;

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// HTTP client implementations
    pub mod http {
        pub use gatehouse_adapters::http::*;
    }

    /// Configuration
    pub mod config {
        pub use gatehouse_adapters::config::*;
    }
}

pub use gatehouse_adapters::{GatewaySettings, ReqwestHttpClient, SettingsError};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
