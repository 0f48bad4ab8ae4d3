//! Verified identity handed over by an external provider.

use serde::{Deserialize, Serialize};

use super::error::TokenError;

/// Profile of an account whose login the provider has just confirmed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityAssertion {
    /// Provider-scoped unique account id. Must be non-empty.
    pub subject_id: String,
    /// Human-readable name; may be empty.
    pub display_name: String,
    /// Emails in the provider's preferred order. Index 0 is primary.
    pub emails: Vec<String>,
}

impl IdentityAssertion {
    pub fn new(
        subject_id: impl Into<String>,
        display_name: impl Into<String>,
        emails: Vec<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            display_name: display_name.into(),
            emails,
        }
    }

    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    /// Reject assertions that cannot back a session: no subject, or no
    /// usable primary email. There is no placeholder fallback.
    pub fn validate(&self) -> Result<(), TokenError> {
        if self.subject_id.trim().is_empty() {
            return Err(TokenError::invalid_assertion("subject id is empty"));
        }

        match self.primary_email() {
            None => Err(TokenError::invalid_assertion(
                "provider profile has no email address",
            )),
            Some(email) if email.trim().is_empty() => {
                Err(TokenError::invalid_assertion("primary email is empty"))
            }
            Some(_) => Ok(()),
        }
    }
}
