//! Security headers middleware
//!
//! Adds to every response:
//! - X-Content-Type-Options: nosniff
//! - X-Frame-Options: DENY
//! - Referrer-Policy: no-referrer (the callback URL carries the authorization code)
//! - Content-Security-Policy: no scripts anywhere; inline styles only on HTML pages
//! - Permissions-Policy: sensitive browser features disabled
//! - Cache-Control: no-store on login, callback, API and health paths, so
//!   pages embedding a session token never land in a cache

use std::rc::Rc;

use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header;
use actix_web::Error as ActixError;
use futures_util::future::{ready, LocalBoxFuture, Ready};

const API_CSP: &str = "default-src 'none'; frame-ancestors 'none'";
const PAGE_CSP: &str = "default-src 'none'; style-src 'unsafe-inline'; frame-ancestors 'none'; form-action 'none'";

pub struct SecurityHeaders {
    callback_path: Rc<str>,
}

impl SecurityHeaders {
    /// `callback_path` is configurable, so it is matched explicitly in
    /// addition to the fixed `/auth/` prefix.
    pub fn new(callback_path: impl AsRef<str>) -> Self {
        Self {
            callback_path: Rc::from(callback_path.as_ref()),
        }
    }
}

fn is_json_path(path: &str) -> bool {
    path.starts_with("/api/") || path == "/health"
}

fn is_no_store_path(path: &str, callback_path: &str) -> bool {
    is_json_path(path) || path.starts_with("/auth/") || path == callback_path
}

impl<S, B> Transform<S, ServiceRequest> for SecurityHeaders
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type InitError = ();
    type Transform = SecurityHeadersMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SecurityHeadersMiddleware {
            service,
            callback_path: Rc::clone(&self.callback_path),
        }))
    }
}

pub struct SecurityHeadersMiddleware<S> {
    service: S,
    callback_path: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for SecurityHeadersMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = ActixError>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = ActixError;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let path = req.path().to_string();
        let no_store = is_no_store_path(&path, &self.callback_path);
        let csp = if is_json_path(&path) { API_CSP } else { PAGE_CSP };
        let fut = self.service.call(req);

        Box::pin(async move {
            let mut res = fut.await?;
            let headers = res.headers_mut();

            headers.insert(
                header::X_CONTENT_TYPE_OPTIONS,
                header::HeaderValue::from_static("nosniff"),
            );
            headers.insert(
                header::X_FRAME_OPTIONS,
                header::HeaderValue::from_static("DENY"),
            );
            headers.insert(
                header::REFERRER_POLICY,
                header::HeaderValue::from_static("no-referrer"),
            );
            headers.insert(
                header::CONTENT_SECURITY_POLICY,
                header::HeaderValue::from_static(csp),
            );
            headers.insert(
                header::HeaderName::from_static("permissions-policy"),
                header::HeaderValue::from_static(
                    "geolocation=(), microphone=(), camera=(), payment=(), usb=()",
                ),
            );

            if no_store {
                headers.insert(
                    header::CACHE_CONTROL,
                    header::HeaderValue::from_static("no-store"),
                );
            }

            Ok(res)
        })
    }
}
