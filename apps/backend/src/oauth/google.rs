//! Google OAuth 2.0 authorization code flow.
//!
//! 1. [`GoogleOAuthClient::authorization_url`] sends the browser to Google
//!    with a CSRF `state`.
//! 2. Google redirects back to the configured redirect URI with `code` and
//!    `state`.
//! 3. [`GoogleOAuthClient::exchange_code`] trades the code for an access token.
//! 4. [`GoogleOAuthClient::get_user_info`] fetches the profile, which becomes
//!    an [`IdentityAssertion`]. The access token is dropped afterwards.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::{IdentityProvider, OAuthError};
use crate::auth::identity::IdentityAssertion;

pub const GOOGLE_AUTHORIZE_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

const HTTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Credentials and endpoints for the Google client.
#[derive(Clone)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: String,
    /// Callback URL registered with Google
    pub redirect_uri: String,
    pub scopes: Vec<String>,
    pub authorize_url: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl GoogleOAuthConfig {
    /// Configuration against Google's public endpoints with the
    /// `openid email profile` scopes.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: redirect_uri.into(),
            scopes: vec!["openid".into(), "email".into(), "profile".into()],
            authorize_url: GOOGLE_AUTHORIZE_URL.to_string(),
            token_url: GOOGLE_TOKEN_URL.to_string(),
            userinfo_url: GOOGLE_USERINFO_URL.to_string(),
        }
    }

    /// Point the token and userinfo calls at another origin.
    pub fn with_api_base(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.token_url = format!("{base}/token");
        self.userinfo_url = format!("{base}/v1/userinfo");
        self
    }

    pub fn scopes_string(&self) -> String {
        self.scopes.join(" ")
    }
}

impl fmt::Debug for GoogleOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GoogleOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("scopes", &self.scopes)
            .finish_non_exhaustive()
    }
}

/// Successful token endpoint response. Only the access token is kept, and
/// only for the duration of the userinfo call.
#[derive(Deserialize)]
pub struct GoogleTokenResponse {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
struct GoogleErrorResponse {
    error: String,
    error_description: Option<String>,
}

/// Profile returned by the userinfo endpoint.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GoogleUserInfo {
    pub sub: String,
    pub email: Option<String>,
    pub email_verified: Option<bool>,
    pub name: Option<String>,
}

impl GoogleUserInfo {
    /// Map the profile onto an assertion. Emails Google explicitly reports
    /// as unverified are left out, as are blank ones.
    pub fn into_assertion(self) -> IdentityAssertion {
        let verified = self.email_verified != Some(false);
        let emails = self
            .email
            .map(|e| e.trim().to_string())
            .filter(|e| verified && !e.is_empty())
            .into_iter()
            .collect();

        IdentityAssertion::new(self.sub, self.name.unwrap_or_default(), emails)
    }
}

#[derive(Debug, Clone)]
pub struct GoogleOAuthClient {
    config: GoogleOAuthConfig,
    authorize_url: Url,
    http_client: reqwest::Client,
}

impl GoogleOAuthClient {
    pub fn new(config: GoogleOAuthConfig) -> Result<Self, OAuthError> {
        let authorize_url = Url::parse(&config.authorize_url)
            .map_err(|e| OAuthError::InvalidEndpoint(format!("{}: {e}", config.authorize_url)))?;
        for endpoint in [&config.token_url, &config.userinfo_url] {
            Url::parse(endpoint)
                .map_err(|e| OAuthError::InvalidEndpoint(format!("{endpoint}: {e}")))?;
        }

        let http_client = reqwest::Client::builder().timeout(HTTP_TIMEOUT).build()?;

        Ok(Self {
            config,
            authorize_url,
            http_client,
        })
    }

    pub fn config(&self) -> &GoogleOAuthConfig {
        &self.config
    }

    #[tracing::instrument(skip(self, code), name = "GoogleOAuthClient::exchange_code")]
    pub async fn exchange_code(&self, code: &str) -> Result<GoogleTokenResponse, OAuthError> {
        debug!("exchanging authorization code for tokens");

        let response = self
            .http_client
            .post(&self.config.token_url)
            .form(&[
                ("client_id", self.config.client_id.as_str()),
                ("client_secret", self.config.client_secret.as_str()),
                ("code", code),
                ("redirect_uri", self.config.redirect_uri.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;

        if let Ok(error_response) = serde_json::from_str::<GoogleErrorResponse>(&body) {
            if !error_response.error.is_empty() {
                let message = error_response
                    .error_description
                    .unwrap_or(error_response.error);
                return Err(OAuthError::Provider(message));
            }
        }

        if !status.is_success() {
            return Err(OAuthError::Provider(format!(
                "token endpoint returned {status}"
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| OAuthError::Parse(format!("failed to parse token response: {e}")))
    }

    #[tracing::instrument(skip(self, access_token), name = "GoogleOAuthClient::get_user_info")]
    pub async fn get_user_info(&self, access_token: &str) -> Result<GoogleUserInfo, OAuthError> {
        debug!("fetching Google user info");

        let response = self
            .http_client
            .get(&self.config.userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(OAuthError::Provider(format!(
                "userinfo endpoint returned {status}"
            )));
        }

        response
            .json()
            .await
            .map_err(|e| OAuthError::Parse(format!("failed to parse user info response: {e}")))
    }
}

#[async_trait]
impl IdentityProvider for GoogleOAuthClient {
    fn authorization_url(&self, state: &str) -> String {
        let mut url = self.authorize_url.clone();

        url.query_pairs_mut()
            .append_pair("client_id", &self.config.client_id)
            .append_pair("redirect_uri", &self.config.redirect_uri)
            .append_pair("response_type", "code")
            .append_pair("scope", &self.config.scopes_string())
            .append_pair("state", state)
            .append_pair("prompt", "select_account");

        url.to_string()
    }

    async fn verify_callback(&self, code: &str) -> Result<IdentityAssertion, OAuthError> {
        let tokens = self.exchange_code(code).await?;
        let profile = self.get_user_info(&tokens.access_token).await?;
        Ok(profile.into_assertion())
    }
}
