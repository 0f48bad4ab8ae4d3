//! Error codes shared by the HTTP boundary.

pub mod error_code;

pub use error_code::ErrorCode;
