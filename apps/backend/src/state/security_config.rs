use std::env;
use std::fmt;

use crate::auth::PasswordMode;
use crate::error::AppError;

pub const ADMIN_SECRET_ENV: &str = "STOREFRONT_ADMIN_SECRET";
pub const PASSWORD_MODE_ENV: &str = "STOREFRONT_PASSWORD_MODE";

/// Credential settings fixed at startup.
#[derive(Clone)]
pub struct SecurityConfig {
    /// Shared secret for signing and verifying admin tokens
    admin_secret: Vec<u8>,
    /// How login passwords are compared (defaults to server-side hashing)
    pub password_mode: PasswordMode,
}

impl SecurityConfig {
    /// Create a new SecurityConfig with the given admin secret
    pub fn new(admin_secret: impl Into<Vec<u8>>) -> Self {
        Self {
            admin_secret: admin_secret.into(),
            password_mode: PasswordMode::default(),
        }
    }

    pub fn with_password_mode(mut self, password_mode: PasswordMode) -> Self {
        self.password_mode = password_mode;
        self
    }

    pub fn admin_secret(&self) -> &[u8] {
        &self.admin_secret
    }

    /// Read `STOREFRONT_ADMIN_SECRET` (required, non-empty) and
    /// `STOREFRONT_PASSWORD_MODE` (optional).
    pub fn from_env() -> Result<Self, AppError> {
        let secret = env::var(ADMIN_SECRET_ENV)
            .map_err(|_| AppError::config(format!("{ADMIN_SECRET_ENV} must be set")))?;
        if secret.is_empty() {
            return Err(AppError::config(format!(
                "{ADMIN_SECRET_ENV} must not be empty"
            )));
        }

        let password_mode = match env::var(PASSWORD_MODE_ENV) {
            Ok(raw) if !raw.trim().is_empty() => raw.parse::<PasswordMode>()?,
            _ => PasswordMode::default(),
        };

        Ok(Self::new(secret).with_password_mode(password_mode))
    }
}

impl fmt::Debug for SecurityConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurityConfig")
            .field("admin_secret", &"[REDACTED]")
            .field("password_mode", &self.password_mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use serial_test::serial;

    use super::*;
    use crate::errors::ErrorCode;

    fn with_env<R>(secret: Option<&str>, mode: Option<&str>, f: impl FnOnce() -> R) -> R {
        let saved = (env::var(ADMIN_SECRET_ENV).ok(), env::var(PASSWORD_MODE_ENV).ok());
        set_or_remove(ADMIN_SECRET_ENV, secret);
        set_or_remove(PASSWORD_MODE_ENV, mode);
        let result = f();
        set_or_remove(ADMIN_SECRET_ENV, saved.0.as_deref());
        set_or_remove(PASSWORD_MODE_ENV, saved.1.as_deref());
        result
    }

    fn set_or_remove(key: &str, value: Option<&str>) {
        match value {
            Some(v) => env::set_var(key, v),
            None => env::remove_var(key),
        }
    }

    #[test]
    #[serial]
    fn reads_secret_with_default_mode() {
        let config = with_env(Some("s3cret"), None, SecurityConfig::from_env).unwrap();
        assert_eq!(config.admin_secret(), b"s3cret");
        assert_eq!(config.password_mode, PasswordMode::ServerSideHash);
    }

    #[test]
    #[serial]
    fn reads_explicit_mode() {
        let config = with_env(
            Some("s3cret"),
            Some("client_precomputed_hash"),
            SecurityConfig::from_env,
        )
        .unwrap();
        assert_eq!(config.password_mode, PasswordMode::ClientPrecomputedHash);
    }

    #[test]
    #[serial]
    fn missing_or_empty_secret_is_config_error() {
        let err = with_env(None, None, SecurityConfig::from_env).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ConfigError);
        let err = with_env(Some(""), None, SecurityConfig::from_env).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ConfigError);
    }

    #[test]
    #[serial]
    fn unknown_mode_is_config_error() {
        let err = with_env(Some("s3cret"), Some("md5"), SecurityConfig::from_env).unwrap_err();
        assert_eq!(err.code(), ErrorCode::ConfigError);
    }

    #[test]
    fn debug_redacts_secret() {
        let rendered = format!("{:?}", SecurityConfig::new("hunter2"));
        assert!(!rendered.contains("hunter2"));
    }
}
