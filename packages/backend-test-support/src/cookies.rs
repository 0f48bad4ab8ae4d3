//! Reading `Set-Cookie` headers off test responses.

use actix_web::cookie::Cookie;
use actix_web::http::header::{HeaderMap, SET_COOKIE};

/// Parse the `Set-Cookie` header for `name`, if the response set one.
pub fn find_set_cookie(headers: &HeaderMap, name: &str) -> Option<Cookie<'static>> {
    headers
        .get_all(SET_COOKIE)
        .filter_map(|value| value.to_str().ok())
        .filter_map(|raw| Cookie::parse(raw.to_string()).ok())
        .find(|cookie| cookie.name() == name)
}
