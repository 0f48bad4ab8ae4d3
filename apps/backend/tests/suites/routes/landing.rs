use std::sync::Arc;

use actix_web::test;

use crate::common::ada;
use crate::support::{create_test_app, test_state, FakeProvider};

#[actix_web::test]
async fn root_links_to_login() {
    let app = create_test_app(test_state(Arc::new(FakeProvider::returning(ada())))).await;

    let req = test::TestRequest::get().uri("/").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 200);
    let body = test::read_body(resp).await;
    let html = std::str::from_utf8(&body).unwrap();
    assert!(html.contains("href=\"/auth/google\""));
}
