//! External identity verification.
//!
//! The login routes only see [`IdentityProvider`]: it builds the URL the
//! browser is sent to, and turns the authorization code from the callback
//! into an [`IdentityAssertion`]. Provider credentials obtained along the
//! way are dropped inside the implementation.

pub mod google;

use async_trait::async_trait;
use thiserror::Error;

use crate::auth::identity::IdentityAssertion;

#[derive(Debug, Error)]
pub enum OAuthError {
    /// The HTTP request to the provider failed (network error, timeout, etc.).
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// The provider response could not be parsed.
    #[error("failed to parse response: {0}")]
    Parse(String),

    /// The provider rejected the request (expired code, revoked grant, etc.).
    #[error("provider error: {0}")]
    Provider(String),

    /// An endpoint URL in the client configuration is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidEndpoint(String),
}

#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// URL to redirect the browser to, carrying the CSRF `state`.
    fn authorization_url(&self, state: &str) -> String;

    /// Complete the handshake for an authorization code.
    async fn verify_callback(&self, code: &str) -> Result<IdentityAssertion, OAuthError>;
}
