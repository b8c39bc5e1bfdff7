mod common;
mod support;

use actix_web::http::StatusCode;
use actix_web::test;
use storefront_backend::auth::PasswordMode;
use support::create_test_app;
use support::fixtures::test_state;

#[actix_web::test]
async fn health_without_database() {
    let (state, _clock) = test_state(PasswordMode::ServerSideHash).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.headers().contains_key("x-trace-id"));

    let body = common::read_ok_json(resp).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], "disabled");
    assert_eq!(body["app_version"], env!("CARGO_PKG_VERSION"));
    assert!(body["time"].as_str().is_some_and(|t| t.contains('T')));
}

#[actix_web::test]
async fn unknown_route_is_404() {
    let (state, _clock) = test_state(PasswordMode::ServerSideHash).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/api/nope").to_request();
    let resp = test::call_service(&app, req).await;
    let detail = common::assert_problem(resp, StatusCode::NOT_FOUND, "NOT_FOUND").await;
    assert_eq!(detail, "Not found");
}

#[actix_web::test]
async fn unknown_route_inside_a_scope_is_404() {
    let (state, _clock) = test_state(PasswordMode::ServerSideHash).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post().uri("/api/auth/nope").to_request();
    let resp = test::call_service(&app, req).await;
    common::assert_problem(resp, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}
