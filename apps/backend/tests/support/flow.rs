//! Helpers for walking the browser side of the login handshake.

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::cookie::Cookie;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::http::header::LOCATION;
use actix_web::{test, Error};
use backend_test_support::cookies::find_set_cookie;
use login_backend::routes::auth::{LOGIN_PATH, STATE_COOKIE};

/// What the browser holds after following `GET /auth/google`.
pub struct LoginStart {
    pub location: url::Url,
    pub state: String,
    pub cookie: Cookie<'static>,
}

pub async fn start_login<S>(app: &S) -> LoginStart
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = test::call_service(app, test::TestRequest::get().uri(LOGIN_PATH).to_request()).await;
    assert_eq!(resp.status().as_u16(), 302);

    let location = resp
        .headers()
        .get(LOCATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| url::Url::parse(v).expect("Location is an absolute URL"))
        .expect("redirect carries a Location header");

    let state = location
        .query_pairs()
        .find(|(k, _)| k == "state")
        .map(|(_, v)| v.into_owned())
        .expect("authorization URL carries state");

    let cookie = find_set_cookie(resp.headers(), STATE_COOKIE).expect("state cookie is set");

    LoginStart {
        location,
        state,
        cookie,
    }
}

/// Pull the token out of the callback page.
pub fn token_from_page(html: &str) -> String {
    let start = html
        .find("<pre id=\"token\">")
        .map(|i| i + "<pre id=\"token\">".len())
        .expect("page embeds the token");
    let end = html[start..].find("</pre>").expect("token block is closed") + start;
    html[start..end].to_string()
}
