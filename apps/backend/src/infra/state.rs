use std::sync::Arc;

use crate::auth::{Clock, CredentialService, SystemClock};
use crate::error::AppError;
use crate::infra::db::bootstrap_db;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;
use crate::store::{AdminStore, InMemoryAdminStore, SeaOrmAdminStore};

/// Builder for creating AppState instances (used in both tests and main)
pub struct StateBuilder {
    security_config: SecurityConfig,
    clock: Arc<dyn Clock>,
    db_url: Option<String>,
    admin_store: Option<Arc<dyn AdminStore>>,
}

impl StateBuilder {
    pub fn new(security_config: SecurityConfig) -> Self {
        Self {
            security_config,
            clock: Arc::new(SystemClock),
            db_url: None,
            admin_store: None,
        }
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_db_url(mut self, db_url: Option<String>) -> Self {
        self.db_url = db_url;
        self
    }

    /// Use this store instead of the database. Ignored when a database URL is set.
    pub fn with_admin_store(mut self, store: Arc<dyn AdminStore>) -> Self {
        self.admin_store = Some(store);
        self
    }

    pub async fn build(self) -> Result<AppState, AppError> {
        let credentials = CredentialService::with_clock(&self.security_config, self.clock)?;

        match self.db_url {
            Some(url) => {
                // single entrypoint: connect + migrate
                let conn = bootstrap_db(&url).await?;
                let admins: Arc<dyn AdminStore> = Arc::new(SeaOrmAdminStore::new(conn.clone()));
                Ok(AppState::new(Some(conn), credentials, admins))
            }
            None => {
                let admins = self
                    .admin_store
                    .unwrap_or_else(|| Arc::new(InMemoryAdminStore::new()));
                Ok(AppState::new(None, credentials, admins))
            }
        }
    }
}
