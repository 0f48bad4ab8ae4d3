//! Stateless session tokens: identity assertions in, signed claims out.

pub mod claims;
pub mod error;
pub mod identity;
pub mod jwt;

pub use claims::TokenClaims;
pub use error::{TokenError, VerificationFailure};
pub use identity::IdentityAssertion;
pub use jwt::{issue, verify, SignedClaims, SignedToken, TOKEN_TTL};
