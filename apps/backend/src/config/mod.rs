//! Application configuration loaded once from environment variables.
//!
//! Required:
//! - `GOOGLE_CLIENT_ID`, `GOOGLE_CLIENT_SECRET`: OAuth client registration
//! - `BACKEND_JWT_SECRET`: session token signing key (at least 32 bytes)
//!
//! Optional:
//! - `GOOGLE_CALLBACK_PATH` (default `/auth/google/callback`)
//! - `BACKEND_HOST` (default `0.0.0.0`), `BACKEND_PORT` (default `3001`)
//! - `BACKEND_PUBLIC_URL` (default `http://localhost:{port}`), the externally
//!   visible origin used to build the OAuth redirect URI

use std::env;
use std::fmt;

use thiserror::Error;

use crate::oauth::google::GoogleOAuthConfig;
use crate::state::security_config::SecurityConfig;

pub const DEFAULT_CALLBACK_PATH: &str = "/auth/google/callback";
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3001;
pub const MIN_JWT_SECRET_LEN: usize = 32;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    MissingEnvVar(&'static str),
    #[error("{var} is invalid: {detail}")]
    InvalidValue { var: &'static str, detail: String },
}

/// Process-wide configuration.
#[derive(Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub public_url: String,
    pub callback_path: String,
    pub client_id: String,
    client_secret: String,
    jwt_secret: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup`, treating blank values as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let require = |name: &'static str| get(name).ok_or(ConfigError::MissingEnvVar(name));

        // Client id and signing secret gate startup before anything else.
        let client_id = require("GOOGLE_CLIENT_ID")?;
        let jwt_secret = require("BACKEND_JWT_SECRET")?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::InvalidValue {
                var: "BACKEND_JWT_SECRET",
                detail: format!("must be at least {MIN_JWT_SECRET_LEN} characters"),
            });
        }
        let client_secret = require("GOOGLE_CLIENT_SECRET")?;

        let host = get("BACKEND_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let port = match get("BACKEND_PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidValue {
                var: "BACKEND_PORT",
                detail: format!("expected a port number, got '{raw}'"),
            })?,
            None => DEFAULT_PORT,
        };

        let callback_path =
            get("GOOGLE_CALLBACK_PATH").unwrap_or_else(|| DEFAULT_CALLBACK_PATH.to_string());
        if !callback_path.starts_with('/') {
            return Err(ConfigError::InvalidValue {
                var: "GOOGLE_CALLBACK_PATH",
                detail: "must start with '/'".to_string(),
            });
        }

        let public_url = get("BACKEND_PUBLIC_URL")
            .unwrap_or_else(|| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_string();
        url::Url::parse(&public_url).map_err(|e| ConfigError::InvalidValue {
            var: "BACKEND_PUBLIC_URL",
            detail: e.to_string(),
        })?;

        Ok(Self {
            host,
            port,
            public_url,
            callback_path,
            client_id,
            client_secret,
            jwt_secret,
        })
    }

    /// Absolute URL the provider redirects back to.
    pub fn redirect_uri(&self) -> String {
        format!("{}{}", self.public_url, self.callback_path)
    }

    pub fn security(&self) -> SecurityConfig {
        SecurityConfig::new(self.jwt_secret.as_bytes())
    }

    pub fn google_oauth(&self) -> GoogleOAuthConfig {
        GoogleOAuthConfig::new(
            self.client_id.clone(),
            self.client_secret.clone(),
            self.redirect_uri(),
        )
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("public_url", &self.public_url)
            .field("callback_path", &self.callback_path)
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("jwt_secret", &"[REDACTED]")
            .finish()
    }
}
