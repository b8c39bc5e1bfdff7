use migration::migrate_up;
use sea_orm::{Database, DatabaseConnection};
use tracing::info;

use crate::error::AppError;

/// Connect to the credential database. Does NOT run migrations.
pub async fn connect_db(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = Database::connect(database_url).await?;
    Ok(conn)
}

/// Connect and bring the schema up to date.
pub async fn bootstrap_db(database_url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_db(database_url).await?;
    migrate_up(&conn).await?;
    info!("credential database ready");
    Ok(conn)
}
