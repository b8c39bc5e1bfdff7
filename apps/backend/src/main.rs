use std::process::ExitCode;

use actix_web::{web, App, HttpServer};
use storefront_backend::config::db::db_url;
use storefront_backend::config::server::ServerConfig;
use storefront_backend::error::AppError;
use storefront_backend::infra::state::StateBuilder;
use storefront_backend::middleware::{cors_middleware, RequestTrace, StructuredLogger};
use storefront_backend::routes;
use storefront_backend::state::app_state::AppState;
use storefront_backend::state::security_config::SecurityConfig;
use tracing::{error, info, warn};

mod telemetry;

async fn build_app_state() -> Result<AppState, AppError> {
    let security = SecurityConfig::from_env()?;
    let db_url = db_url()?;

    if db_url.is_none() {
        warn!("no database configured; admin logins use an empty in-memory store");
    }

    StateBuilder::new(security).with_db_url(db_url).build().await
}

#[actix_web::main]
async fn main() -> ExitCode {
    if let Err(e) = telemetry::init_tracing() {
        eprintln!("failed to install tracing subscriber: {e}");
        return ExitCode::FAILURE;
    }

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let server = match ServerConfig::from_env() {
        Ok(server) => server,
        Err(e) => {
            error!(error = %e, "invalid server configuration");
            return ExitCode::FAILURE;
        }
    };

    let app_state = match build_app_state().await {
        Ok(state) => state,
        Err(e) => {
            error!(error = %e, "failed to build application state");
            return ExitCode::FAILURE;
        }
    };

    info!(
        host = %server.host,
        port = server.port,
        password_mode = %app_state.credentials.password_mode(),
        db = app_state.db().is_some(),
        "starting storefront backend"
    );

    let data = web::Data::new(app_state);

    let http = HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(StructuredLogger)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port));

    let result = match http {
        Ok(http) => http.run().await,
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "server error");
            ExitCode::FAILURE
        }
    }
}
