use std::fmt;
use std::sync::Arc;

use super::security_config::SecurityConfig;
use crate::config::AppConfig;
use crate::oauth::IdentityProvider;

/// Application state shared by every worker. Immutable after startup.
#[derive(Clone)]
pub struct AppState {
    /// Token signing settings
    pub security: SecurityConfig,
    /// External identity verifier (Google in production)
    pub identity: Arc<dyn IdentityProvider>,
    /// Path the provider redirects back to
    pub callback_path: String,
    /// Whether cookies get the `Secure` attribute
    pub secure_cookies: bool,
}

impl AppState {
    pub fn new(
        security: SecurityConfig,
        identity: Arc<dyn IdentityProvider>,
        callback_path: impl Into<String>,
    ) -> Self {
        Self {
            security,
            identity,
            callback_path: callback_path.into(),
            secure_cookies: false,
        }
    }

    /// Build state from the loaded configuration.
    pub fn from_config(config: &AppConfig, identity: Arc<dyn IdentityProvider>) -> Self {
        Self {
            security: config.security(),
            identity,
            callback_path: config.callback_path.clone(),
            secure_cookies: config.public_url.starts_with("https://"),
        }
    }

    pub fn with_secure_cookies(mut self, secure: bool) -> Self {
        self.secure_cookies = secure;
        self
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("security", &self.security)
            .field("callback_path", &self.callback_path)
            .field("secure_cookies", &self.secure_cookies)
            .finish_non_exhaustive()
    }
}
