use std::fmt;

use jsonwebtoken::Algorithm;

/// Signing settings for session tokens.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Symmetric key for signing and verifying tokens
    pub jwt_secret: Vec<u8>,
    /// JWT algorithm to use (HS256)
    pub algorithm: Algorithm,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given signing secret
    pub fn new(jwt_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            algorithm: Algorithm::HS256,
        }
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("algorithm", &self.algorithm)
            .finish()
    }
}
