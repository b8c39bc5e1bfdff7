#![allow(dead_code)]

// tests/common/mod.rs
use actix_web::body::BoxBody;
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::test;
use serde_json::Value;

// Logging is auto-installed for every test binary that pulls this in
#[ctor::ctor]
fn init_logging() {
    backend_test_support::logging::init();
}

/// Assert a Problem Details error and return its `detail`.
pub async fn assert_problem(
    resp: ServiceResponse<BoxBody>,
    expected_status: StatusCode,
    expected_code: &str,
) -> String {
    backend_test_support::problem_details::assert_problem_response(
        resp,
        expected_code,
        expected_status,
    )
    .await
    .detail
}

/// Read a successful JSON body, failing loudly on anything else.
pub async fn read_ok_json(resp: ServiceResponse<BoxBody>) -> Value {
    assert_eq!(resp.status(), StatusCode::OK);
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap_or_else(|_| {
        panic!(
            "expected JSON body, got: {}",
            String::from_utf8_lossy(&body)
        )
    })
}
