use actix_web::{web, HttpResponse};

use crate::error::AppError;
use crate::extractors::AdminClaims;

/// Claims of the calling admin.
async fn me(claims: AdminClaims) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(claims.into_inner()))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/me", web::get().to(me));
}
