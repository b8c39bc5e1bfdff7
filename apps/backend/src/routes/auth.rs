use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::{Claims, NewClaims};
use crate::error::AppError;
use crate::extractors::{BearerClaims, JsonBody};
use crate::logging::pii::Redacted;
use crate::logging::security;
use crate::state::app_state::AppState;
use crate::store::AdminPrincipal;

#[derive(Debug, Deserialize)]
pub struct AdminLoginRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct AdminLoginResponse {
    pub token: String,
    pub user: AdminPrincipal,
}

#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub user: Claims,
}

/// The field as sent; whitespace only counts when checking for blank.
fn required<'a>(value: &'a Option<String>, field: &str) -> Result<&'a str, AppError> {
    match value.as_deref() {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(AppError::invalid(format!("{field} is required"))),
    }
}

/// Exchange admin credentials for a session token.
///
/// Unknown user, missing hash and wrong password all produce the same
/// `INVALID_CREDENTIALS` response.
async fn admin_login(
    body: JsonBody<AdminLoginRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let username = required(&body.username, "username")?;
    let password = required(&body.password, "password")?;

    let Some(principal) = app_state.admins.find_principal_by_username(username).await? else {
        security::login_failed("unknown_user", username);
        return Err(AppError::invalid_credentials());
    };

    let Some(stored_hash) = app_state.admins.get_password_hash(username).await? else {
        security::login_failed("missing_hash", username);
        return Err(AppError::invalid_credentials());
    };

    if !app_state.credentials.verify_password(password, &stored_hash) {
        security::login_failed("bad_password", username);
        return Err(AppError::invalid_credentials());
    }

    let token = app_state.credentials.issue(NewClaims::admin(
        principal.id.clone(),
        principal.email.clone(),
        principal.username.clone(),
    ))?;

    info!(username = %Redacted(&principal.username), role = %principal.role, "admin login");

    Ok(HttpResponse::Ok().json(AdminLoginResponse {
        token,
        user: principal,
    }))
}

/// Echo the claims of a valid bearer token.
async fn verify(claims: BearerClaims) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(VerifyResponse {
        valid: true,
        user: claims.into_inner(),
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/admin/login").route(web::post().to(admin_login)))
        .service(web::resource("/verify").route(web::get().to(verify)));
}
