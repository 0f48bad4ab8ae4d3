#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod middleware;
pub mod oauth;
pub mod pages;
pub mod routes;
pub mod state;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::claims::TokenClaims;
pub use auth::error::{TokenError, VerificationFailure};
pub use auth::identity::IdentityAssertion;
pub use auth::jwt::{issue, verify, SignedClaims, SignedToken, TOKEN_TTL};
pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use errors::ErrorCode;
pub use extractors::{AuthToken, SessionClaims};
pub use middleware::{RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan};
pub use oauth::google::{GoogleOAuthClient, GoogleOAuthConfig};
pub use oauth::{IdentityProvider, OAuthError};
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
