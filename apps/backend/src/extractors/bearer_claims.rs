use std::future::{ready, Ready};
use std::ops::Deref;

use actix_web::dev::Payload;
use actix_web::http::header;
use actix_web::{web, FromRequest, HttpRequest};

use crate::auth::Claims;
use crate::error::AppError;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Claims of any valid bearer token.
///
/// Missing or malformed `Authorization` -> 401 `UNAUTHORIZED`; a token that
/// fails verification -> 401 `INVALID_TOKEN`.
#[derive(Debug, Clone)]
pub struct BearerClaims(pub Claims);

/// Claims of a valid bearer token whose principal type is `admin`.
/// Other principal types -> 403 `FORBIDDEN`.
#[derive(Debug, Clone)]
pub struct AdminClaims(pub Claims);

impl BearerClaims {
    pub fn into_inner(self) -> Claims {
        self.0
    }
}

impl AdminClaims {
    pub fn into_inner(self) -> Claims {
        self.0
    }
}

impl Deref for BearerClaims {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Deref for AdminClaims {
    type Target = Claims;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn authenticate(req: &HttpRequest) -> Result<Claims, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::internal("AppState not available"))?;

    let header_value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok());

    let Some(token) = state.credentials.extract_bearer(header_value) else {
        security::token_rejected(req.path(), "missing_bearer");
        return Err(AppError::unauthorized());
    };

    state.credentials.verify(&token).ok_or_else(|| {
        security::token_rejected(req.path(), "invalid_token");
        AppError::invalid_token()
    })
}

impl FromRequest for BearerClaims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req).map(BearerClaims))
    }
}

impl FromRequest for AdminClaims {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        ready(authenticate(req).and_then(|claims| {
            if claims.is_admin() {
                Ok(AdminClaims(claims))
            } else {
                security::token_rejected(req.path(), "not_admin");
                Err(AppError::forbidden())
            }
        }))
    }
}
