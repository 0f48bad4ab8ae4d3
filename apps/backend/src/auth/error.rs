use thiserror::Error;

/// Why a presented token was refused.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum VerificationFailure {
    #[error("token expired")]
    Expired,
    #[error("invalid signature")]
    InvalidSignature,
    #[error("malformed token")]
    Malformed,
}

/// Errors raised while issuing or verifying session tokens.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    /// The identity handed over by the provider cannot back a session.
    #[error("invalid identity assertion: {0}")]
    InvalidAssertion(String),
    /// A presented token was rejected. Never fatal.
    #[error("token verification failed: {0}")]
    Verification(VerificationFailure),
    #[error("failed to sign token: {0}")]
    Signing(String),
    #[error("clock is set before the unix epoch")]
    Clock,
}

impl TokenError {
    pub fn invalid_assertion(detail: impl Into<String>) -> Self {
        Self::InvalidAssertion(detail.into())
    }
}

impl From<VerificationFailure> for TokenError {
    fn from(failure: VerificationFailure) -> Self {
        Self::Verification(failure)
    }
}
