//! Error codes for the login backend API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and appears verbatim in the `code`
//! field of problem+json responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Session tokens
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Token signature or structure rejected
    UnauthorizedInvalidJwt,
    /// Token is past its expiration
    UnauthorizedExpiredJwt,

    // Login handshake
    /// The `state` query parameter did not match the state cookie
    InvalidOAuthState,
    /// The provider redirected back with `?error=...`
    OAuthDenied,
    /// The callback carried no authorization code
    MissingAuthorizationCode,
    /// The provider profile cannot be turned into a session
    InvalidAssertion,
    /// Token exchange or profile lookup against the provider failed
    IdentityProviderError,

    // System
    Internal,
    ConfigError,
}

impl ErrorCode {
    /// Returns the canonical string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",

            Self::InvalidOAuthState => "INVALID_OAUTH_STATE",
            Self::OAuthDenied => "OAUTH_DENIED",
            Self::MissingAuthorizationCode => "MISSING_AUTHORIZATION_CODE",
            Self::InvalidAssertion => "INVALID_ASSERTION",
            Self::IdentityProviderError => "IDENTITY_PROVIDER_ERROR",

            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
