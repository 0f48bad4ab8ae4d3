use actix_web::{web, HttpResponse};

use super::auth::LOGIN_PATH;
use crate::error::AppError;
use crate::pages;

async fn root() -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(pages::landing_page(LOGIN_PATH)?))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(root)));
}
