use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::SessionClaims;

/// Echo the verified claims of the presented session token.
async fn me(session: SessionClaims) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(session.0))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/me").route(web::get().to(me)));
}
