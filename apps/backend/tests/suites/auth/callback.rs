// GET /auth/google/callback: state check, code exchange, token page.

use std::sync::Arc;
use std::time::SystemTime;

use actix_web::cookie::Cookie;
use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::cookies::find_set_cookie;
use backend_test_support::problem_details::assert_problem_details_from_service_response;
use login_backend::routes::auth::STATE_COOKIE;
use login_backend::{verify, IdentityAssertion, TOKEN_TTL};

use crate::common::{ada, test_security};
use crate::support::flow::{start_login, token_from_page};
use crate::support::{create_test_app, test_state, FakeProvider};

const CALLBACK: &str = "/auth/google/callback";

#[actix_web::test]
async fn happy_path_issues_token_page() {
    let fake = Arc::new(FakeProvider::returning(ada()));
    let app = create_test_app(test_state(fake.clone())).await;
    let start = start_login(&app).await;

    let req = test::TestRequest::get()
        .uri(&format!("{CALLBACK}?code=auth-code-1&state={}", start.state))
        .cookie(start.cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp
        .headers()
        .get("content-type")
        .unwrap()
        .to_str()
        .unwrap()
        .starts_with("text/html"));
    assert_eq!(resp.headers().get("cache-control").unwrap(), "no-store");

    let cleared = find_set_cookie(resp.headers(), STATE_COOKIE).expect("state cookie cleared");
    assert_eq!(cleared.value(), "");

    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    let token = token_from_page(html);

    assert_eq!(fake.codes(), vec!["auth-code-1".to_string()]);

    let payload = verify(&token, &test_security(), SystemTime::now()).unwrap();
    assert_eq!(payload.claims.id, "g-123");
    assert_eq!(payload.claims.name, "Ada Lovelace");
    assert_eq!(payload.claims.email, "ada@example.com");
    assert_eq!(payload.exp - payload.iat, TOKEN_TTL.as_secs() as i64);
}

#[actix_web::test]
async fn mismatched_state_is_rejected() {
    let fake = Arc::new(FakeProvider::returning(ada()));
    let app = create_test_app(test_state(fake.clone())).await;
    let start = start_login(&app).await;

    let req = test::TestRequest::get()
        .uri(&format!("{CALLBACK}?code=c&state=forged-state"))
        .cookie(start.cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_OAUTH_STATE",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
    assert!(fake.codes().is_empty());
}

#[actix_web::test]
async fn missing_state_cookie_is_rejected() {
    let fake = Arc::new(FakeProvider::returning(ada()));
    let app = create_test_app(test_state(fake.clone())).await;
    let start = start_login(&app).await;

    let req = test::TestRequest::get()
        .uri(&format!("{CALLBACK}?code=c&state={}", start.state))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_OAUTH_STATE",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
    assert!(fake.codes().is_empty());
}

#[actix_web::test]
async fn empty_state_never_matches() {
    let app = create_test_app(test_state(Arc::new(FakeProvider::returning(ada())))).await;

    let req = test::TestRequest::get()
        .uri(&format!("{CALLBACK}?code=c&state="))
        .cookie(Cookie::new(STATE_COOKIE, ""))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_OAUTH_STATE",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
}

#[actix_web::test]
async fn provider_denial_is_reported() {
    let fake = Arc::new(FakeProvider::returning(ada()));
    let app = create_test_app(test_state(fake.clone())).await;

    let req = test::TestRequest::get()
        .uri(&format!("{CALLBACK}?error=access_denied"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "OAUTH_DENIED",
        StatusCode::BAD_REQUEST,
        Some("access_denied"),
    )
    .await;
    assert!(fake.codes().is_empty());
}

#[actix_web::test]
async fn missing_code_is_rejected() {
    let fake = Arc::new(FakeProvider::returning(ada()));
    let app = create_test_app(test_state(fake.clone())).await;
    let start = start_login(&app).await;

    let req = test::TestRequest::get()
        .uri(&format!("{CALLBACK}?state={}", start.state))
        .cookie(start.cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "MISSING_AUTHORIZATION_CODE",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;
    assert!(fake.codes().is_empty());
}

#[actix_web::test]
async fn provider_failure_is_bad_gateway() {
    let fake = Arc::new(FakeProvider::rejecting("invalid_grant"));
    let app = create_test_app(test_state(fake.clone())).await;
    let start = start_login(&app).await;

    let req = test::TestRequest::get()
        .uri(&format!("{CALLBACK}?code=stale&state={}", start.state))
        .cookie(start.cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "IDENTITY_PROVIDER_ERROR",
        StatusCode::BAD_GATEWAY,
        Some("invalid_grant"),
    )
    .await;
    assert_eq!(fake.codes(), vec!["stale".to_string()]);
}

#[actix_web::test]
async fn profile_without_email_is_unprocessable() {
    let no_email = IdentityAssertion::new("g-456", "No Mail", Vec::new());
    let app = create_test_app(test_state(Arc::new(FakeProvider::returning(no_email)))).await;
    let start = start_login(&app).await;

    let req = test::TestRequest::get()
        .uri(&format!("{CALLBACK}?code=c&state={}", start.state))
        .cookie(start.cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_from_service_response(
        resp,
        "INVALID_ASSERTION",
        StatusCode::UNPROCESSABLE_ENTITY,
        None,
    )
    .await;
}
