use std::env;

use crate::error::AppError;

/// Resolve the credential-store database URL, if one is configured.
///
/// `DATABASE_URL` wins. Otherwise, when `POSTGRES_DB` is set, the URL is
/// assembled from `POSTGRES_*` variables. With neither, the backend runs on
/// the in-memory store.
pub fn db_url() -> Result<Option<String>, AppError> {
    if let Some(url) = non_empty_var("DATABASE_URL") {
        return Ok(Some(url));
    }

    let Some(db_name) = non_empty_var("POSTGRES_DB") else {
        return Ok(None);
    };

    let host = non_empty_var("POSTGRES_HOST").unwrap_or_else(|| "localhost".to_string());
    let port = non_empty_var("POSTGRES_PORT").unwrap_or_else(|| "5432".to_string());
    let username = must_var("POSTGRES_USER")?;
    let password = must_var("POSTGRES_PASSWORD")?;

    Ok(Some(format!(
        "postgresql://{username}:{password}@{host}:{port}/{db_name}"
    )))
}

fn non_empty_var(name: &str) -> Option<String> {
    env::var(name).ok().filter(|v| !v.trim().is_empty())
}

/// Get required environment variable or return error
fn must_var(name: &str) -> Result<String, AppError> {
    non_empty_var(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}

#[cfg(test)]
mod tests {
    use std::env;

    use serial_test::serial;

    use super::db_url;

    const VARS: [&str; 6] = [
        "DATABASE_URL",
        "POSTGRES_DB",
        "POSTGRES_HOST",
        "POSTGRES_PORT",
        "POSTGRES_USER",
        "POSTGRES_PASSWORD",
    ];

    fn clear_env() {
        for var in VARS {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_no_database_configured() {
        clear_env();
        assert_eq!(db_url().unwrap(), None);
    }

    #[test]
    #[serial]
    fn test_database_url_takes_precedence() {
        clear_env();
        env::set_var("DATABASE_URL", "postgresql://u:p@db:5432/shop");
        env::set_var("POSTGRES_DB", "ignored");
        assert_eq!(
            db_url().unwrap().as_deref(),
            Some("postgresql://u:p@db:5432/shop")
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_assembled_from_parts_with_defaults() {
        clear_env();
        env::set_var("POSTGRES_DB", "storefront");
        env::set_var("POSTGRES_USER", "shop_app");
        env::set_var("POSTGRES_PASSWORD", "pw");
        assert_eq!(
            db_url().unwrap().as_deref(),
            Some("postgresql://shop_app:pw@localhost:5432/storefront")
        );

        env::set_var("POSTGRES_HOST", "db.internal");
        env::set_var("POSTGRES_PORT", "5433");
        assert_eq!(
            db_url().unwrap().as_deref(),
            Some("postgresql://shop_app:pw@db.internal:5433/storefront")
        );
        clear_env();
    }

    #[test]
    #[serial]
    fn test_missing_credentials_is_config_error() {
        clear_env();
        env::set_var("POSTGRES_DB", "storefront");
        let err = db_url().unwrap_err();
        assert!(err.to_string().contains("POSTGRES_USER"));
        clear_env();
    }
}
