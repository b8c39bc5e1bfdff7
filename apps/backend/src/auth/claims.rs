//! Claims carried by admin session tokens.

use serde::{Deserialize, Serialize};

/// Principal type stamped on back-office tokens.
pub const ADMIN_PRINCIPAL: &str = "admin";

/// Validity window of an issued token (24 hours).
pub const TOKEN_TTL_SECS: i64 = 24 * 60 * 60;

/// Caller-supplied claims; timestamps are added by the issuer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewClaims {
    pub subject: String,
    pub principal_type: String,
    pub email: String,
    pub username: String,
}

impl NewClaims {
    pub fn admin(
        subject: impl Into<String>,
        email: impl Into<String>,
        username: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            principal_type: ADMIN_PRINCIPAL.to_string(),
            email: email.into(),
            username: username.into(),
        }
    }
}

/// Full claims record as it appears in the token payload.
///
/// Field order here is the serialization order; do not reorder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Admin user id
    #[serde(rename = "sub")]
    pub subject: String,
    #[serde(rename = "type")]
    pub principal_type: String,
    /// Display attributes as of issuance; not refreshed
    pub email: String,
    pub username: String,
    /// Issued-at (seconds since epoch)
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Expiry (seconds since epoch)
    #[serde(rename = "exp")]
    pub expires_at: i64,
}

impl Claims {
    pub fn from_new(claims: NewClaims, issued_at: i64) -> Self {
        Self {
            subject: claims.subject,
            principal_type: claims.principal_type,
            email: claims.email,
            username: claims.username,
            issued_at,
            expires_at: issued_at + TOKEN_TTL_SECS,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.principal_type == ADMIN_PRINCIPAL
    }

    /// A token is still valid at the exact second it expires.
    pub fn is_expired_at(&self, now_unix: i64) -> bool {
        self.expires_at < now_unix
    }
}
