use tracing::{info, warn};

use crate::logging::pii::Redacted;
use crate::trace_ctx;

/// Log a login attempt that ended without a session token.
pub fn login_failed(reason: &str, email: Option<&str>) {
    let trace_id = trace_ctx::trace_id();

    warn!(
        event = "SECURITY_LOGIN_FAILED",
        %trace_id,
        email = %Redacted(email.unwrap_or("")),
        reason,
        "Login failed"
    );
}

/// Log a session token being handed out.
pub fn session_issued(subject_id: &str, email: &str, expires_at: i64) {
    let trace_id = trace_ctx::trace_id();

    info!(
        event = "SECURITY_SESSION_ISSUED",
        %trace_id,
        subject_id,
        email = %Redacted(email),
        expires_at,
        "Session token issued"
    );
}
