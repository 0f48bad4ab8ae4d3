// GET /auth/google: redirect to the provider with a fresh CSRF state.

use std::sync::Arc;

use actix_web::cookie::SameSite;
use actix_web::test;
use login_backend::routes::auth::STATE_COOKIE;

use crate::common::ada;
use crate::support::fake_provider::FAKE_AUTHORIZE_URL;
use crate::support::flow::start_login;
use crate::support::{create_test_app, test_state, FakeProvider};

#[actix_web::test]
async fn redirects_to_provider_with_state_cookie() {
    let fake = Arc::new(FakeProvider::returning(ada()));
    let app = create_test_app(test_state(fake.clone())).await;

    let start = start_login(&app).await;

    assert!(start.location.as_str().starts_with(FAKE_AUTHORIZE_URL));
    assert_eq!(start.cookie.name(), STATE_COOKIE);
    assert_eq!(start.cookie.value(), start.state);
    assert_eq!(start.cookie.http_only(), Some(true));
    assert_eq!(start.cookie.same_site(), Some(SameSite::Lax));
    assert_eq!(start.cookie.path(), Some("/"));
    assert!(start.cookie.max_age().is_some());

    // Nothing reaches the provider until the callback.
    assert!(fake.codes().is_empty());
}

#[actix_web::test]
async fn each_login_gets_a_new_state() {
    let app = create_test_app(test_state(Arc::new(FakeProvider::returning(ada())))).await;

    let first = start_login(&app).await;
    let second = start_login(&app).await;

    assert_ne!(first.state, second.state);
}

#[actix_web::test]
async fn secure_cookie_when_configured() {
    let state = test_state(Arc::new(FakeProvider::returning(ada()))).with_secure_cookies(true);
    let app = create_test_app(state).await;

    let start = start_login(&app).await;
    assert_eq!(start.cookie.secure(), Some(true));
}

#[actix_web::test]
async fn login_response_is_not_cached() {
    let app = create_test_app(test_state(Arc::new(FakeProvider::returning(ada())))).await;

    let req = test::TestRequest::get().uri("/auth/google").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get("cache-control").unwrap(), "no-store");
}
