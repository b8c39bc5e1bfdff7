//! Credential store boundary.
//!
//! The admin-user table is owned by the storefront; this backend only reads
//! it. Two implementations: [`SeaOrmAdminStore`] over PostgreSQL and
//! [`InMemoryAdminStore`] for tests and database-less runs.

use std::fmt;
use std::str::FromStr;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod memory;
pub mod sea;

pub use memory::InMemoryAdminStore;
pub use sea::SeaOrmAdminStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("admin store query failed: {0}")]
    Db(#[from] sea_orm::DbErr),
    #[error("stored admin record is invalid: {0}")]
    Corrupt(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminRole {
    Admin,
    SuperAdmin,
}

impl AdminRole {
    pub const fn as_str(&self) -> &'static str {
        match self {
            AdminRole::Admin => "admin",
            AdminRole::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for AdminRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AdminRole {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(AdminRole::Admin),
            "super_admin" => Ok(AdminRole::SuperAdmin),
            other => Err(StoreError::Corrupt(format!("unknown admin role '{other}'"))),
        }
    }
}

/// Redacted view of an admin user. Never carries the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminPrincipal {
    pub id: String,
    pub username: String,
    pub email: String,
    pub role: AdminRole,
}

#[async_trait]
pub trait AdminStore: fmt::Debug + Send + Sync {
    async fn find_principal_by_username(
        &self,
        username: &str,
    ) -> Result<Option<AdminPrincipal>, StoreError>;

    /// Lower-case hex SHA-256 digest stored for `username`.
    async fn get_password_hash(&self, username: &str) -> Result<Option<String>, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_strings() {
        assert_eq!("admin".parse::<AdminRole>().unwrap(), AdminRole::Admin);
        assert_eq!(
            "super_admin".parse::<AdminRole>().unwrap(),
            AdminRole::SuperAdmin
        );
        assert_eq!(
            serde_json::to_string(&AdminRole::SuperAdmin).unwrap(),
            "\"super_admin\""
        );
        assert!(matches!(
            "owner".parse::<AdminRole>(),
            Err(StoreError::Corrupt(_))
        ));
    }
}
