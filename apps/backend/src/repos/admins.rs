//! Admin-user lookups.

use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entities::admin_users;
use crate::store::{AdminPrincipal, StoreError};

pub async fn find_by_username<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    username: &str,
) -> Result<Option<admin_users::Model>, StoreError> {
    let admin = admin_users::Entity::find()
        .filter(admin_users::Column::Username.eq(username))
        .one(conn)
        .await?;
    Ok(admin)
}

impl TryFrom<admin_users::Model> for AdminPrincipal {
    type Error = StoreError;

    fn try_from(model: admin_users::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            role: model.role.parse()?,
            id: model.id,
            username: model.username,
            email: model.email,
        })
    }
}
