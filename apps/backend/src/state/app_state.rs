use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::auth::CredentialService;
use crate::store::AdminStore;

/// Application state containing shared resources
#[derive(Debug, Clone)]
pub struct AppState {
    /// Database connection (absent when running on the in-memory store)
    pub db: Option<DatabaseConnection>,
    /// Token issuance/verification and password checks, keyed once at startup
    pub credentials: CredentialService,
    /// Admin lookups for the login flow
    pub admins: Arc<dyn AdminStore>,
}

impl AppState {
    pub fn new(
        db: Option<DatabaseConnection>,
        credentials: CredentialService,
        admins: Arc<dyn AdminStore>,
    ) -> Self {
        Self {
            db,
            credentials,
            admins,
        }
    }

    pub fn db(&self) -> Option<&DatabaseConnection> {
        self.db.as_ref()
    }
}
