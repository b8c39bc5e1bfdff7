use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use super::{AdminPrincipal, AdminStore, StoreError};
use crate::repos::admins;

/// Admin store backed by the `admin_users` table.
#[derive(Debug, Clone)]
pub struct SeaOrmAdminStore {
    conn: DatabaseConnection,
}

impl SeaOrmAdminStore {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl AdminStore for SeaOrmAdminStore {
    async fn find_principal_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminPrincipal>, StoreError> {
        admins::find_by_username(&self.conn, username)
            .await?
            .map(AdminPrincipal::try_from)
            .transpose()
    }

    async fn get_password_hash(&self, username: &str) -> Result<Option<String>, StoreError> {
        let admin = admins::find_by_username(&self.conn, username).await?;
        Ok(admin.map(|model| model.password_hash))
    }
}
