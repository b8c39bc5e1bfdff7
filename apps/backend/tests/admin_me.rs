mod common;
mod support;

use actix_web::http::{header, StatusCode};
use actix_web::test;
use serde_json::json;
use storefront_backend::auth::{NewClaims, PasswordMode};
use support::create_test_app;
use support::fixtures::{test_state, ADMIN_PASSWORD, ADMIN_USERNAME};

fn me(token: &str) -> actix_http::Request {
    test::TestRequest::get()
        .uri("/api/admin/me")
        .insert_header((header::AUTHORIZATION, format!("Bearer {token}")))
        .to_request()
}

#[actix_web::test]
async fn login_then_me() {
    let (state, _clock) = test_state(PasswordMode::ServerSideHash).await;
    let app = create_test_app(state).build().await;

    let login = test::TestRequest::post()
        .uri("/api/auth/admin/login")
        .set_json(json!({ "username": ADMIN_USERNAME, "password": ADMIN_PASSWORD }))
        .to_request();
    let body = common::read_ok_json(test::call_service(&app, login).await).await;
    let token = body["token"].as_str().unwrap().to_string();

    let claims = common::read_ok_json(test::call_service(&app, me(&token)).await).await;
    assert_eq!(claims["sub"], "admin-1");
    assert_eq!(claims["type"], "admin");
    assert_eq!(claims["username"], "admin");
    assert_eq!(claims["email"], "admin@pzm.ae");
}

#[actix_web::test]
async fn other_principal_types_are_forbidden() {
    let (state, _clock) = test_state(PasswordMode::ServerSideHash).await;
    let mut claims = NewClaims::admin("cust-1", "c@x.com", "shopper");
    claims.principal_type = "customer".to_string();
    let token = state.credentials.issue(claims).unwrap();
    let app = create_test_app(state).build().await;

    let resp = test::call_service(&app, me(&token)).await;
    let detail = common::assert_problem(resp, StatusCode::FORBIDDEN, "FORBIDDEN").await;
    assert!(!detail.is_empty());
}

#[actix_web::test]
async fn missing_token_is_unauthorized() {
    let (state, _clock) = test_state(PasswordMode::ServerSideHash).await;
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::get().uri("/api/admin/me").to_request();
    let resp = test::call_service(&app, req).await;
    common::assert_problem(resp, StatusCode::UNAUTHORIZED, "UNAUTHORIZED").await;
}
