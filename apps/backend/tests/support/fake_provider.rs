//! In-memory stand-in for Google.

use std::sync::Mutex;

use async_trait::async_trait;
use login_backend::{IdentityAssertion, IdentityProvider, OAuthError};

pub const FAKE_AUTHORIZE_URL: &str = "https://accounts.fake.test/authorize";

enum Outcome {
    Identity(IdentityAssertion),
    Reject(String),
}

/// Answers every callback with a fixed outcome and records the codes it
/// was handed.
pub struct FakeProvider {
    outcome: Outcome,
    codes: Mutex<Vec<String>>,
}

impl FakeProvider {
    pub fn returning(assertion: IdentityAssertion) -> Self {
        Self {
            outcome: Outcome::Identity(assertion),
            codes: Mutex::new(Vec::new()),
        }
    }

    pub fn rejecting(reason: &str) -> Self {
        Self {
            outcome: Outcome::Reject(reason.to_string()),
            codes: Mutex::new(Vec::new()),
        }
    }

    /// Authorization codes received so far, in order.
    pub fn codes(&self) -> Vec<String> {
        self.codes.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdentityProvider for FakeProvider {
    fn authorization_url(&self, state: &str) -> String {
        format!("{FAKE_AUTHORIZE_URL}?response_type=code&state={state}")
    }

    async fn verify_callback(&self, code: &str) -> Result<IdentityAssertion, OAuthError> {
        self.codes.lock().unwrap().push(code.to_string());
        match &self.outcome {
            Outcome::Identity(assertion) => Ok(assertion.clone()),
            Outcome::Reject(reason) => Err(OAuthError::Provider(reason.clone())),
        }
    }
}
