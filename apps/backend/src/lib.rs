#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod auth;
pub mod config;
pub mod entities;
pub mod error;
pub mod errors;
pub mod extractors;
pub mod infra;
pub mod logging;
pub mod middleware;
pub mod repos;
pub mod routes;
pub mod state;
pub mod store;
pub mod trace_ctx;

// Re-exports for public API
pub use auth::{Claims, CredentialService, NewClaims, PasswordMode};
pub use error::AppError;
pub use extractors::{AdminClaims, BearerClaims};
pub use infra::state::StateBuilder;
pub use state::app_state::AppState;
pub use state::security_config::SecurityConfig;
pub use store::{AdminPrincipal, AdminRole, AdminStore, InMemoryAdminStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
