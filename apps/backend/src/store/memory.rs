use std::collections::HashMap;

use async_trait::async_trait;
use parking_lot::RwLock;

use super::{AdminPrincipal, AdminStore, StoreError};

#[derive(Debug, Clone)]
struct StoredAdmin {
    principal: AdminPrincipal,
    password_hash: String,
}

/// Process-local admin store keyed by username.
#[derive(Debug, Default)]
pub struct InMemoryAdminStore {
    admins: RwLock<HashMap<String, StoredAdmin>>,
}

impl InMemoryAdminStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace an admin. `password_hash` is stored verbatim.
    pub fn insert(&self, principal: AdminPrincipal, password_hash: impl Into<String>) {
        let stored = StoredAdmin {
            principal,
            password_hash: password_hash.into(),
        };
        self.admins
            .write()
            .insert(stored.principal.username.clone(), stored);
    }

    pub fn with_admin(self, principal: AdminPrincipal, password_hash: impl Into<String>) -> Self {
        self.insert(principal, password_hash);
        self
    }
}

#[async_trait]
impl AdminStore for InMemoryAdminStore {
    async fn find_principal_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminPrincipal>, StoreError> {
        Ok(self
            .admins
            .read()
            .get(username)
            .map(|stored| stored.principal.clone()))
    }

    async fn get_password_hash(&self, username: &str) -> Result<Option<String>, StoreError> {
        Ok(self
            .admins
            .read()
            .get(username)
            .map(|stored| stored.password_hash.clone()))
    }
}
