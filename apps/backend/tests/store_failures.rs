mod common;
mod support;

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test;
use async_trait::async_trait;
use sea_orm::DbErr;
use serde_json::json;
use storefront_backend::infra::state::StateBuilder;
use storefront_backend::state::security_config::SecurityConfig;
use storefront_backend::store::{AdminPrincipal, AdminStore, StoreError};
use support::create_test_app;

/// Store whose every lookup fails.
#[derive(Debug)]
struct BrokenStore;

#[async_trait]
impl AdminStore for BrokenStore {
    async fn find_principal_by_username(
        &self,
        _username: &str,
    ) -> Result<Option<AdminPrincipal>, StoreError> {
        Err(StoreError::Db(DbErr::Custom("connection refused".to_string())))
    }

    async fn get_password_hash(&self, _username: &str) -> Result<Option<String>, StoreError> {
        Err(StoreError::Db(DbErr::Custom("connection refused".to_string())))
    }
}

#[actix_web::test]
async fn store_outage_is_a_server_error_not_an_auth_outcome() {
    let state = StateBuilder::new(SecurityConfig::new("secret"))
        .with_admin_store(Arc::new(BrokenStore))
        .build()
        .await
        .unwrap();
    let app = create_test_app(state).build().await;

    let req = test::TestRequest::post()
        .uri("/api/auth/admin/login")
        .set_json(json!({ "username": "admin", "password": "secret1" }))
        .to_request();
    let resp = test::call_service(&app, req).await;

    let detail =
        common::assert_problem(resp, StatusCode::INTERNAL_SERVER_ERROR, "DB_ERROR").await;
    assert!(!detail.contains("connection refused"));
}
