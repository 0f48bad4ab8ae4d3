use std::time::SystemTime;

use actix_web::dev::Payload;
use actix_web::{web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use super::auth_token::AuthToken;
use crate::auth::jwt::{verify, SignedClaims};
use crate::state::app_state::AppState;
use crate::AppError;

/// Verified session token payload from the `Authorization` header.
///
/// Expired tokens map to `UNAUTHORIZED_EXPIRED_JWT`; bad signatures and
/// garbage map to `UNAUTHORIZED_INVALID_JWT`.
#[derive(Debug, Clone)]
pub struct SessionClaims(pub SignedClaims);

impl SessionClaims {
    fn extract(req: &HttpRequest) -> Result<Self, AppError> {
        let bearer = AuthToken::from_headers(req)?;

        let app_state = req
            .app_data::<web::Data<AppState>>()
            .ok_or_else(|| AppError::internal("AppState not found"))?;

        let payload = verify(&bearer.token, &app_state.security, SystemTime::now())?;
        Ok(SessionClaims(payload))
    }
}

impl FromRequest for SessionClaims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(Self::extract(req))
    }
}
