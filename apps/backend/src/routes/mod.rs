use actix_web::{web, HttpRequest};

use crate::error::AppError;

pub mod admin;
pub mod auth;
pub mod health;

/// Register every route. Shared by `main.rs` and the integration tests;
/// middleware is applied by the caller.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Health check: /health
    cfg.configure(health::configure_routes);

    // Auth routes: /api/auth/**
    cfg.service(web::scope("/api/auth").configure(auth::configure_routes));

    // Admin-only routes: /api/admin/**
    cfg.service(web::scope("/api/admin").configure(admin::configure_routes));

    // Anything else: 404 Problem Details
    cfg.default_service(web::route().to(not_found));
}

async fn not_found(req: HttpRequest) -> Result<&'static str, AppError> {
    tracing::debug!(method = %req.method(), path = %req.path(), "no matching route");
    Err(AppError::not_found("Not found"))
}
