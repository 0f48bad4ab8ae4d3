//! Login handshake with the identity provider.
//!
//! `GET /auth/google` sets a random `state` in a short-lived cookie and
//! redirects to the provider. The callback checks `state` against that
//! cookie, hands the code to the provider, and answers with an HTML page
//! carrying a freshly issued session token.

use std::time::SystemTime;

use actix_web::cookie::{time::Duration as CookieDuration, Cookie, SameSite};
use actix_web::http::header;
use actix_web::{web, HttpRequest, HttpResponse};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::RngCore;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::auth::jwt::issue;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::pages;
use crate::state::app_state::AppState;

pub const LOGIN_PATH: &str = "/auth/google";
pub const STATE_COOKIE: &str = "oauth_state";
const STATE_TTL_MINUTES: i64 = 10;
const STATE_BYTES: usize = 32;

#[derive(Debug, Default, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

fn generate_state() -> String {
    let mut bytes = [0u8; STATE_BYTES];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}

fn state_cookie(value: String, secure: bool) -> Cookie<'static> {
    Cookie::build(STATE_COOKIE, value)
        .http_only(true)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(CookieDuration::minutes(STATE_TTL_MINUTES))
        .secure(secure)
        .finish()
}

fn state_removal_cookie(secure: bool) -> Cookie<'static> {
    let mut cookie = state_cookie(String::new(), secure);
    cookie.make_removal();
    cookie
}

async fn login(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let state = generate_state();
    let location = app_state.identity.authorization_url(&state);

    debug!("redirecting to identity provider");

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .cookie(state_cookie(state, app_state.secure_cookies))
        .finish())
}

/// The `state` round-trip must match exactly; a missing half counts as a
/// mismatch.
fn check_state(req: &HttpRequest, query: &CallbackQuery) -> Result<(), AppError> {
    let expected = req.cookie(STATE_COOKIE).map(|c| c.value().to_string());

    match (expected.as_deref(), query.state.as_deref()) {
        (Some(expected), Some(received)) if !expected.is_empty() && expected == received => {
            Ok(())
        }
        _ => Err(AppError::bad_request(
            ErrorCode::InvalidOAuthState,
            "Login state is missing or does not match; start the login again",
        )),
    }
}

async fn callback(
    req: HttpRequest,
    query: web::Query<CallbackQuery>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = query.into_inner();

    if let Some(error) = query.error.as_deref() {
        security::login_failed("provider_denied", None);
        let detail = match query.error_description.as_deref() {
            Some(description) => format!("{error}: {description}"),
            None => error.to_string(),
        };
        return Err(AppError::bad_request(ErrorCode::OAuthDenied, detail));
    }

    if let Err(e) = check_state(&req, &query) {
        security::login_failed("state_mismatch", None);
        return Err(e);
    }

    let code = query
        .code
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .ok_or_else(|| {
            security::login_failed("missing_code", None);
            AppError::bad_request(
                ErrorCode::MissingAuthorizationCode,
                "Callback carried no authorization code",
            )
        })?;

    let assertion = app_state
        .identity
        .verify_callback(code)
        .await
        .map_err(|e| {
            warn!(error = %Redacted(&e.to_string()), "identity provider rejected callback");
            security::login_failed("provider_error", None);
            AppError::from(e)
        })?;

    let token = issue(&assertion, &app_state.security, SystemTime::now()).map_err(|e| {
        security::login_failed("invalid_assertion", assertion.primary_email());
        AppError::from(e)
    })?;

    security::session_issued(
        &assertion.subject_id,
        assertion.primary_email().unwrap_or_default(),
        token.expires_at(),
    );

    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .cookie(state_removal_cookie(app_state.secure_cookies))
        .body(pages::token_page(&token)?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig, callback_path: &str) {
    cfg.service(web::resource(LOGIN_PATH).route(web::get().to(login)));
    cfg.service(web::resource(callback_path.to_string()).route(web::get().to(callback)));
}
