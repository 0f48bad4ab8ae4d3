//! Claims embedded in backend-issued session tokens.

use serde::{Deserialize, Serialize};

use super::identity::IdentityAssertion;

/// The flat, application-level payload of a session token.
///
/// Provider credentials (access/refresh tokens) never appear here.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    /// External account identifier (the provider's `sub`)
    pub id: String,
    pub name: String,
    /// Primary email, i.e. the first one the provider listed
    pub email: String,
}

impl TokenClaims {
    /// Map an assertion onto claims. Returns `None` when there is no email
    /// to promote to primary; callers validate before reaching this point.
    pub(crate) fn from_assertion(assertion: &IdentityAssertion) -> Option<Self> {
        let email = assertion.primary_email()?;
        Some(Self {
            id: assertion.subject_id.clone(),
            name: assertion.display_name.clone(),
            email: email.to_string(),
        })
    }
}
