pub mod auth_token;
pub mod session_claims;

pub use auth_token::AuthToken;
pub use session_claims::SessionClaims;
