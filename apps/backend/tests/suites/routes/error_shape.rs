// Every error leaves the app as problem+json carrying the request's
// trace id in both the body and the `x-trace-id` header.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use backend_test_support::problem_details::assert_problem_details_from_service_response;

use crate::common::ada;
use crate::support::{create_test_app, test_state, FakeProvider};

#[actix_web::test]
async fn trace_id_matches_request_id() {
    let app = create_test_app(test_state(Arc::new(FakeProvider::returning(ada())))).await;

    let req = test::TestRequest::get()
        .uri("/api/me")
        .insert_header(("x-request-id", "edge-7f3a"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.headers().get("x-request-id").unwrap(), "edge-7f3a");

    let problem = assert_problem_details_from_service_response(
        resp,
        "UNAUTHORIZED_MISSING_BEARER",
        StatusCode::UNAUTHORIZED,
        Some("Bearer"),
    )
    .await;

    assert_eq!(problem.trace_id, "edge-7f3a");
    assert_eq!(problem.title, "Unauthorized Missing Bearer");
    assert!(problem.type_.ends_with("/UNAUTHORIZED_MISSING_BEARER"));
}

#[actix_web::test]
async fn generated_trace_id_is_not_unknown() {
    let app = create_test_app(test_state(Arc::new(FakeProvider::returning(ada())))).await;

    let req = test::TestRequest::get()
        .uri("/auth/google/callback?error=access_denied")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let request_id = resp
        .headers()
        .get("x-request-id")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let problem = assert_problem_details_from_service_response(
        resp,
        "OAUTH_DENIED",
        StatusCode::BAD_REQUEST,
        None,
    )
    .await;

    assert_ne!(problem.trace_id, "unknown");
    assert_eq!(problem.trace_id, request_id);
}
