use std::fmt;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use super::claims::TokenClaims;
use super::error::{TokenError, VerificationFailure};
use super::identity::IdentityAssertion;
use crate::state::security_config::SecurityConfig;

/// Lifetime of every issued session token.
pub const TOKEN_TTL: Duration = Duration::from_secs(60 * 60);

/// Full payload of a session token: the application claims plus the
/// registered time claims.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct SignedClaims {
    #[serde(flatten)]
    pub claims: TokenClaims,
    /// Issued-at (seconds since epoch)
    pub iat: i64,
    /// Expiry (seconds since epoch)
    pub exp: i64,
}

/// Opaque bearer string handed to the user after login.
#[derive(Clone, PartialEq, Eq)]
pub struct SignedToken {
    token: String,
    expires_at: i64,
}

impl SignedToken {
    pub fn as_str(&self) -> &str {
        &self.token
    }

    /// Expiry in seconds since epoch.
    pub fn expires_at(&self) -> i64 {
        self.expires_at
    }

    pub fn into_string(self) -> String {
        self.token
    }
}

impl fmt::Debug for SignedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignedToken")
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

fn unix_seconds(at: SystemTime) -> Result<i64, TokenError> {
    let elapsed = at.duration_since(UNIX_EPOCH).map_err(|_| TokenError::Clock)?;
    i64::try_from(elapsed.as_secs()).map_err(|_| TokenError::Clock)
}

/// Mint a session token for a verified identity.
///
/// Pure apart from the `now` input: no I/O and no logging. Fails with
/// [`TokenError::InvalidAssertion`] when the assertion has no subject or no
/// email, and never signs with an empty secret.
pub fn issue(
    assertion: &IdentityAssertion,
    security: &SecurityConfig,
    now: SystemTime,
) -> Result<SignedToken, TokenError> {
    assertion.validate()?;

    let claims = TokenClaims::from_assertion(assertion)
        .ok_or_else(|| TokenError::invalid_assertion("provider profile has no email address"))?;

    if security.jwt_secret.is_empty() {
        return Err(TokenError::Signing("signing secret is empty".to_string()));
    }

    let iat = unix_seconds(now)?;
    let exp = i64::try_from(TOKEN_TTL.as_secs())
        .ok()
        .and_then(|ttl| iat.checked_add(ttl))
        .ok_or(TokenError::Clock)?;

    let payload = SignedClaims { claims, iat, exp };

    let token = encode(
        &Header::new(security.algorithm),
        &payload,
        &EncodingKey::from_secret(&security.jwt_secret),
    )
    .map_err(|e| TokenError::Signing(e.to_string()))?;

    Ok(SignedToken {
        token,
        expires_at: exp,
    })
}

/// Verify a session token against `now` and return its payload.
///
/// The algorithm is pinned to the configured one. A token is expired once
/// `now` is strictly past `exp`.
pub fn verify(
    token: &str,
    security: &SecurityConfig,
    now: SystemTime,
) -> Result<SignedClaims, TokenError> {
    // An empty HMAC key is forgeable by anyone.
    if security.jwt_secret.is_empty() {
        return Err(VerificationFailure::InvalidSignature.into());
    }

    let now = unix_seconds(now)?;

    // Expiry is checked against the caller's clock below, not the library's.
    let mut validation = Validation::new(security.algorithm);
    validation.validate_exp = false;

    let payload = decode::<SignedClaims>(
        token,
        &DecodingKey::from_secret(&security.jwt_secret),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::InvalidSignature => VerificationFailure::InvalidSignature,
        ErrorKind::ExpiredSignature => VerificationFailure::Expired,
        _ => VerificationFailure::Malformed,
    })?;

    if now > payload.exp {
        return Err(VerificationFailure::Expired.into());
    }

    Ok(payload)
}
