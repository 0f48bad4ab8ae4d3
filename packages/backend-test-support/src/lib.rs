//! Shared helpers for the backend's unit and integration tests.
//!
//! Nothing here depends on backend types, so the helpers double as a check
//! on the wire contract rather than on the Rust one.

pub mod cookies;
pub mod logging;
pub mod problem_details;
