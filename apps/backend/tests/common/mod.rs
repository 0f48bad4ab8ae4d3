#![allow(dead_code)]

pub mod proptest_prelude;

use std::time::SystemTime;

use login_backend::{issue, IdentityAssertion, SecurityConfig, SignedToken};

// Logging is auto-installed for every test binary
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Signing secret shared by the integration suites.
pub const TEST_SECRET: &[u8] = b"integration_test_secret_0123456789abcdef";

pub fn test_security() -> SecurityConfig {
    SecurityConfig::new(TEST_SECRET)
}

/// The profile used throughout the suites.
pub fn ada() -> IdentityAssertion {
    IdentityAssertion::new(
        "g-123",
        "Ada Lovelace",
        vec!["ada@example.com".to_string(), "ada@alt.com".to_string()],
    )
}

/// Issue a token for `assertion` at `now` with the shared test secret.
pub fn token_for(assertion: &IdentityAssertion, now: SystemTime) -> SignedToken {
    issue(assertion, &test_security(), now).expect("issue test token")
}
