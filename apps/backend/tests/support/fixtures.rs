use std::sync::Arc;

use storefront_backend::auth::{hash_password, ManualClock, PasswordMode};
use storefront_backend::infra::state::StateBuilder;
use storefront_backend::state::app_state::AppState;
use storefront_backend::state::security_config::SecurityConfig;
use storefront_backend::store::{AdminPrincipal, AdminRole, InMemoryAdminStore};

pub const TEST_SECRET: &str = "test_secret_key_for_testing_purposes_only";
pub const NOW: i64 = 1_760_000_000;

pub const ADMIN_USERNAME: &str = "admin";
pub const ADMIN_PASSWORD: &str = "secret1";

pub fn admin_principal() -> AdminPrincipal {
    AdminPrincipal {
        id: "admin-1".to_string(),
        username: ADMIN_USERNAME.to_string(),
        email: "admin@pzm.ae".to_string(),
        role: AdminRole::SuperAdmin,
    }
}

/// Store with the default admin, plus `ghost` who has a principal but a
/// digest that can never match.
pub fn seeded_store() -> InMemoryAdminStore {
    InMemoryAdminStore::new()
        .with_admin(admin_principal(), hash_password(ADMIN_PASSWORD))
        .with_admin(
            AdminPrincipal {
                id: "admin-2".to_string(),
                username: "ghost".to_string(),
                email: "ghost@pzm.ae".to_string(),
                role: AdminRole::Admin,
            },
            "not-a-digest",
        )
}

/// Seeded in-memory state on a manual clock pinned at [`NOW`].
pub async fn test_state(mode: PasswordMode) -> (AppState, Arc<ManualClock>) {
    let clock = Arc::new(ManualClock::new(NOW));
    let state = StateBuilder::new(SecurityConfig::new(TEST_SECRET).with_password_mode(mode))
        .with_clock(clock.clone())
        .with_admin_store(Arc::new(seeded_store()))
        .build()
        .await
        .unwrap_or_else(|e| panic!("failed to build test state: {e}"));
    (state, clock)
}
